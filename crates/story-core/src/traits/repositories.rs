//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Lookup outcomes are three-valued: `Ok(true)` means found, `Ok(false)`
//! means not found, and `Err(_)` means the lookup itself failed. The store
//! never collapses a failed lookup into a negative answer; the service
//! layer decides whether a failure propagates or degrades.

use async_trait::async_trait;

use crate::entities::{LikedBook, LikedChapter};
use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a user row with this id exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;
}

// ============================================================================
// Book Repository
// ============================================================================

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Check whether a book row with this id exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;
}

// ============================================================================
// Chapter Repository
// ============================================================================

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Check whether a chapter row with this id exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;
}

// ============================================================================
// Book Like Repository
// ============================================================================

#[async_trait]
pub trait BookLikeRepository: Send + Sync {
    /// Check whether the (user, book) like row exists
    async fn is_liked(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<bool>;

    /// Insert the like pair and return it joined with book display data.
    ///
    /// Fails with `DomainError::LikeAlreadyExists` if the pair is already
    /// present (unique constraint violation), or `BookNotFound` if the
    /// book cannot be joined when composing the returned record.
    async fn insert(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<LikedBook>;

    /// Delete the like pair. Returns true if a row was deleted; deleting
    /// an absent pair is `Ok(false)`, not an error.
    async fn delete(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<bool>;

    /// Count surviving like rows for the book. Always recomputed from the
    /// relation; no denormalized counter is maintained.
    async fn count(&self, book_id: EntityId) -> RepoResult<i64>;

    /// Fetch every book like for the user, newest first, each joined
    /// with its book's display data
    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<LikedBook>>;
}

// ============================================================================
// Chapter Like Repository
// ============================================================================

#[async_trait]
pub trait ChapterLikeRepository: Send + Sync {
    /// Check whether the (user, chapter) like row exists
    async fn is_liked(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<bool>;

    /// Insert the like pair and return it joined with chapter display data.
    ///
    /// Fails with `DomainError::LikeAlreadyExists` on a unique constraint
    /// violation, or `ChapterNotFound` if the chapter cannot be joined.
    async fn insert(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<LikedChapter>;

    /// Delete the like pair. Returns true if a row was deleted.
    async fn delete(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<bool>;

    /// Count surviving like rows for the chapter
    async fn count(&self, chapter_id: EntityId) -> RepoResult<i64>;

    /// Fetch every chapter like for the user, newest first
    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<LikedChapter>>;
}
