//! Router-level tests driving the full application with one-shot requests
//!
//! Run with: cargo test -p integration-tests --test router_tests

use std::sync::Arc;

use axum::http::StatusCode;
use integration_tests::{get_json, post_json, test_app, MemoryStore};
use serde_json::json;

fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.add_user(1);
    store.add_user(2);
    store.add_book(10, "The Long Way", "jules");
    store.add_book(11, "Night Trains", "marta");
    store.add_chapter(100, "Chapter One", 10);
    store
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(&seeded_store());

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = test_app(&seeded_store());

    let (status, body) = get_json(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], false);
}

#[tokio::test]
async fn test_toggle_book_like_roundtrip() {
    let app = test_app(&seeded_store());

    let (status, body) = post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["isLiked"], true);
    assert_eq!(body["data"]["likesCount"], 1);
    assert!(body["message"].as_str().unwrap().contains("liked"));

    let (status, body) = post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isLiked"], false);
    assert_eq!(body["data"]["likesCount"], 0);
}

#[tokio::test]
async fn test_toggle_rejects_non_positive_ids() {
    let app = test_app(&seeded_store());

    let (status, body) = post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 0, "bookId": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_toggle_unknown_book_is_not_found() {
    let app = test_app(&seeded_store());

    let (status, body) = post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 999}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_status_path_rejects_malformed_id() {
    let app = test_app(&seeded_store());

    let (status, _) = get_json(&app, "/api/likes/books/abc/status?userId=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/api/likes/books/-3/status?userId=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_book_status_reflects_toggles() {
    let app = test_app(&seeded_store());

    let (status, body) = get_json(&app, "/api/likes/books/10/status?userId=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isLiked"], false);
    assert_eq!(body["data"]["likesCount"], 0);

    post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 10}),
    )
    .await;

    let (status, body) = get_json(&app, "/api/likes/books/10/status?userId=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isLiked"], true);
    assert_eq!(body["data"]["likesCount"], 1);
}

#[tokio::test]
async fn test_chapter_status_roundtrip() {
    let app = test_app(&seeded_store());

    post_json(
        &app,
        "/api/likes/chapters/toggle",
        json!({"userId": 1, "chapterId": 100}),
    )
    .await;

    let (status, body) = get_json(&app, "/api/likes/chapters/100/status?userId=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isLiked"], true);
    assert_eq!(body["data"]["likesCount"], 1);
}

#[tokio::test]
async fn test_multiple_status_collapses_duplicates() {
    let app = test_app(&seeded_store());

    post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 10}),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/api/likes/books/status/multiple",
        json!({"userId": 1, "bookIds": [10, 10, 11]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_object().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["10"]["isLiked"], true);
    assert_eq!(data["10"]["likesCount"], 1);
    assert_eq!(data["11"]["isLiked"], false);
}

#[tokio::test]
async fn test_empty_batch_yields_empty_mapping() {
    let app = test_app(&seeded_store());

    let (status, body) = post_json(
        &app,
        "/api/likes/books/count/multiple",
        json!({"bookIds": []}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_rejects_negative_ids() {
    let app = test_app(&seeded_store());

    let (status, body) = post_json(
        &app,
        "/api/likes/chapters/count/multiple",
        json!({"chapterIds": [100, -1]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_multiple_counts_roundtrip() {
    let app = test_app(&seeded_store());

    post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 10}),
    )
    .await;
    post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 2, "bookId": 10}),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/api/likes/books/count/multiple",
        json!({"bookIds": [10, 11]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["10"], 2);
    assert_eq!(body["data"]["11"], 0);
}

#[tokio::test]
async fn test_user_likes_listing() {
    let app = test_app(&seeded_store());

    post_json(
        &app,
        "/api/likes/books/toggle",
        json!({"userId": 1, "bookId": 10}),
    )
    .await;
    post_json(
        &app,
        "/api/likes/chapters/toggle",
        json!({"userId": 1, "chapterId": 100}),
    )
    .await;

    let (status, body) = get_json(&app, "/api/likes/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalLikes"], 2);
    assert_eq!(body["data"]["likedBooks"][0]["bookId"], "10");
    assert_eq!(body["data"]["likedBooks"][0]["book"]["title"], "The Long Way");
    assert_eq!(
        body["data"]["likedChapters"][0]["chapter"]["book"]["author"]["username"],
        "jules"
    );

    let (status, body) = get_json(&app, "/api/likes/user/1/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = get_json(&app, "/api/likes/user/1/chapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_likes_unknown_user() {
    let app = test_app(&seeded_store());

    let (status, body) = get_json(&app, "/api/likes/user/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
