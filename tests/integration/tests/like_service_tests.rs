//! Service-level tests over the in-memory repositories
//!
//! Run with: cargo test -p integration-tests --test like_service_tests

use std::sync::Arc;

use integration_tests::{test_context, MemoryStore};
use story_core::traits::{BookLikeRepository, ChapterLikeRepository};
use story_core::value_objects::EntityId;
use story_core::DomainError;
use story_service::{LikeService, ServiceError};

fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.add_user(1);
    store.add_user(2);
    store.add_book(10, "The Long Way", "jules");
    store.add_book(11, "Night Trains", "marta");
    store.add_chapter(100, "Chapter One", 10);
    store.add_chapter(101, "Chapter Two", 10);
    store
}

#[tokio::test]
async fn test_book_toggle_alternates_with_counts() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let user = EntityId::new(1);
    let book = EntityId::new(10);

    let first = service.toggle_book_like(user, book).await.unwrap();
    assert!(first.is_liked);
    assert_eq!(first.likes_count, 1);

    let second = service.toggle_book_like(user, book).await.unwrap();
    assert!(!second.is_liked);
    assert_eq!(second.likes_count, 0);

    let third = service.toggle_book_like(user, book).await.unwrap();
    assert!(third.is_liked);
    assert_eq!(third.likes_count, 1);
}

#[tokio::test]
async fn test_chapter_toggle_alternates_with_counts() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let user = EntityId::new(1);
    let chapter = EntityId::new(100);

    let first = service.toggle_chapter_like(user, chapter).await.unwrap();
    assert!(first.is_liked);
    assert_eq!(first.likes_count, 1);

    let second = service.toggle_chapter_like(user, chapter).await.unwrap();
    assert!(!second.is_liked);
    assert_eq!(second.likes_count, 0);
}

#[tokio::test]
async fn test_toggle_unknown_user_leaves_no_state() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let err = service
        .toggle_book_like(EntityId::new(99), EntityId::new(10))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let status = service
        .book_like_status(EntityId::new(1), EntityId::new(10))
        .await
        .unwrap();
    assert_eq!(status.likes_count, 0);
}

#[tokio::test]
async fn test_toggle_unknown_book_fails_before_write() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let err = service
        .toggle_book_like(EntityId::new(1), EntityId::new(999))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_direct_duplicate_insert_conflicts() {
    let store = seeded_store();
    let ctx = test_context(&store);

    let user = EntityId::new(1);
    let book = EntityId::new(10);

    ctx.book_like_repo().insert(user, book).await.unwrap();
    let err = ctx.book_like_repo().insert(user, book).await.unwrap_err();
    assert!(matches!(err, DomainError::LikeAlreadyExists));
}

#[tokio::test]
async fn test_delete_absent_like_is_false_not_error() {
    let store = seeded_store();
    let ctx = test_context(&store);

    let deleted = ctx
        .book_like_repo()
        .delete(EntityId::new(1), EntityId::new(10))
        .await
        .unwrap();
    assert!(!deleted);

    let deleted = ctx
        .chapter_like_repo()
        .delete(EntityId::new(1), EntityId::new(100))
        .await
        .unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_status_reads_absence_as_false_and_zero() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    // No existence checks on the read path; an id with no rows simply
    // reads as unliked with a zero count.
    let status = service
        .book_like_status(EntityId::new(1), EntityId::new(12345))
        .await
        .unwrap();
    assert!(!status.is_liked);
    assert_eq!(status.likes_count, 0);
}

#[tokio::test]
async fn test_status_propagates_store_failure() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    store.set_fail_likes(true);

    let err = service
        .book_like_status(EntityId::new(1), EntityId::new(10))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);

    let err = service
        .multiple_book_like_status(EntityId::new(1), &[EntityId::new(10)])
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_multiple_status_dedups_and_preserves_shape() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let user = EntityId::new(1);
    service
        .toggle_book_like(user, EntityId::new(10))
        .await
        .unwrap();

    let empty = service.multiple_book_like_status(user, &[]).await.unwrap();
    assert!(empty.is_empty());

    let ids = [EntityId::new(10), EntityId::new(10), EntityId::new(11)];
    let statuses = service.multiple_book_like_status(user, &ids).await.unwrap();
    assert_eq!(statuses.len(), 2);
    assert!(statuses[&EntityId::new(10)].is_liked);
    assert_eq!(statuses[&EntityId::new(10)].likes_count, 1);
    assert!(!statuses[&EntityId::new(11)].is_liked);
    assert_eq!(statuses[&EntityId::new(11)].likes_count, 0);
}

#[tokio::test]
async fn test_multiple_counts_fan_out() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    service
        .toggle_book_like(EntityId::new(1), EntityId::new(10))
        .await
        .unwrap();
    service
        .toggle_book_like(EntityId::new(2), EntityId::new(10))
        .await
        .unwrap();

    let counts = service
        .multiple_book_likes_count(&[EntityId::new(10), EntityId::new(11)])
        .await
        .unwrap();
    assert_eq!(counts[&EntityId::new(10)], 2);
    assert_eq!(counts[&EntityId::new(11)], 0);

    let empty = service.multiple_chapter_likes_count(&[]).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_two_users_share_counts_independently() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let alice = EntityId::new(1);
    let bob = EntityId::new(2);
    let book = EntityId::new(10);

    service.toggle_book_like(alice, book).await.unwrap();
    let result = service.toggle_book_like(bob, book).await.unwrap();
    assert_eq!(result.likes_count, 2);

    // Alice unlikes; Bob's like survives
    let result = service.toggle_book_like(alice, book).await.unwrap();
    assert!(!result.is_liked);
    assert_eq!(result.likes_count, 1);

    let bob_status = service.book_like_status(bob, book).await.unwrap();
    assert!(bob_status.is_liked);
    assert_eq!(bob_status.likes_count, 1);
}

#[tokio::test]
async fn test_user_likes_aggregates_books_and_chapters() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let user = EntityId::new(1);
    service
        .toggle_book_like(user, EntityId::new(10))
        .await
        .unwrap();
    service
        .toggle_chapter_like(user, EntityId::new(100))
        .await
        .unwrap();
    service
        .toggle_chapter_like(user, EntityId::new(101))
        .await
        .unwrap();

    let likes = service.user_likes(user).await.unwrap();
    assert_eq!(likes.liked_books.len(), 1);
    assert_eq!(likes.liked_chapters.len(), 2);
    assert_eq!(likes.total_likes, 3);

    assert_eq!(likes.liked_books[0].book.title, "The Long Way");
    assert_eq!(likes.liked_books[0].book.author.username, "jules");

    let books = service.user_liked_books(user).await.unwrap();
    assert_eq!(books.len(), 1);

    let chapters = service.user_liked_chapters(user).await.unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].chapter.book.title, "The Long Way");
}

#[tokio::test]
async fn test_user_likes_unknown_user_fails() {
    let store = seeded_store();
    let ctx = test_context(&store);
    let service = LikeService::new(&ctx);

    let err = service.user_likes(EntityId::new(77)).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}
