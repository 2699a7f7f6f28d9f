//! Route definitions
//!
//! All like routes mounted under /api/likes, plus health probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, likes};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/likes", like_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        // Book likes
        .route("/books/toggle", post(likes::toggle_book_like))
        .route("/books/:book_id/status", get(likes::book_like_status))
        .route(
            "/books/status/multiple",
            post(likes::multiple_book_like_status),
        )
        .route(
            "/books/count/multiple",
            post(likes::multiple_book_likes_count),
        )
        // Chapter likes
        .route("/chapters/toggle", post(likes::toggle_chapter_like))
        .route(
            "/chapters/:chapter_id/status",
            get(likes::chapter_like_status),
        )
        .route(
            "/chapters/status/multiple",
            post(likes::multiple_chapter_like_status),
        )
        .route(
            "/chapters/count/multiple",
            post(likes::multiple_chapter_likes_count),
        )
        // Per-user listings
        .route("/user/:user_id", get(likes::user_likes))
        .route("/user/:user_id/books", get(likes::user_liked_books))
        .route("/user/:user_id/chapters", get(likes::user_liked_chapters))
}
