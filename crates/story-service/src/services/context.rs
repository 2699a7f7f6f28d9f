//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use story_core::traits::{
    BookLikeRepository, BookRepository, ChapterLikeRepository, ChapterRepository, UserRepository,
};
use story_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to the database pool and the repository
/// implementations behind trait objects.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    book_repo: Arc<dyn BookRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
    book_like_repo: Arc<dyn BookLikeRepository>,
    chapter_like_repo: Arc<dyn ChapterLikeRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        book_repo: Arc<dyn BookRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
        book_like_repo: Arc<dyn BookLikeRepository>,
        chapter_like_repo: Arc<dyn ChapterLikeRepository>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            book_repo,
            chapter_repo,
            book_like_repo,
            chapter_like_repo,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the book repository
    pub fn book_repo(&self) -> &dyn BookRepository {
        self.book_repo.as_ref()
    }

    /// Get the chapter repository
    pub fn chapter_repo(&self) -> &dyn ChapterRepository {
        self.chapter_repo.as_ref()
    }

    /// Get the book like repository
    pub fn book_like_repo(&self) -> &dyn BookLikeRepository {
        self.book_like_repo.as_ref()
    }

    /// Get the chapter like repository
    pub fn chapter_like_repo(&self) -> &dyn ChapterLikeRepository {
        self.chapter_like_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    book_repo: Option<Arc<dyn BookRepository>>,
    chapter_repo: Option<Arc<dyn ChapterRepository>>,
    book_like_repo: Option<Arc<dyn BookLikeRepository>>,
    chapter_like_repo: Option<Arc<dyn ChapterLikeRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            book_repo: None,
            chapter_repo: None,
            book_like_repo: None,
            chapter_like_repo: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn book_repo(mut self, repo: Arc<dyn BookRepository>) -> Self {
        self.book_repo = Some(repo);
        self
    }

    pub fn chapter_repo(mut self, repo: Arc<dyn ChapterRepository>) -> Self {
        self.chapter_repo = Some(repo);
        self
    }

    pub fn book_like_repo(mut self, repo: Arc<dyn BookLikeRepository>) -> Self {
        self.book_like_repo = Some(repo);
        self
    }

    pub fn chapter_like_repo(mut self, repo: Arc<dyn ChapterLikeRepository>) -> Self {
        self.chapter_like_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.book_repo
                .ok_or_else(|| super::error::ServiceError::validation("book_repo is required"))?,
            self.chapter_repo
                .ok_or_else(|| super::error::ServiceError::validation("chapter_repo is required"))?,
            self.book_like_repo.ok_or_else(|| {
                super::error::ServiceError::validation("book_like_repo is required")
            })?,
            self.chapter_like_repo.ok_or_else(|| {
                super::error::ServiceError::validation("chapter_like_repo is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
