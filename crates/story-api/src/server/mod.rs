//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use story_common::{AppConfig, AppError};
use story_db::{
    create_pool, run_migrations, PgBookLikeRepository, PgBookRepository,
    PgChapterLikeRepository, PgChapterRepository, PgUserRepository,
};
use story_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware_with_config(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = story_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let book_repo = Arc::new(PgBookRepository::new(pool.clone()));
    let chapter_repo = Arc::new(PgChapterRepository::new(pool.clone()));
    let book_like_repo = Arc::new(PgBookLikeRepository::new(pool.clone()));
    let chapter_like_repo = Arc::new(PgChapterLikeRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .book_repo(book_repo)
        .chapter_repo(chapter_repo)
        .book_like_repo(book_like_repo)
        .chapter_like_repo(chapter_like_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
