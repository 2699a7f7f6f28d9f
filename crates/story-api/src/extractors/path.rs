//! Path parameter extractors
//!
//! Ids arrive as path strings and must parse to positive integers
//! before any store access.

use story_core::value_objects::EntityId;

use crate::response::ApiError;

/// Path parameters with book_id
#[derive(Debug, serde::Deserialize)]
pub struct BookIdPath {
    pub book_id: String,
}

impl BookIdPath {
    /// Parse book_id as EntityId
    pub fn book_id(&self) -> Result<EntityId, ApiError> {
        self.book_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid book_id format"))
    }
}

/// Path parameters with chapter_id
#[derive(Debug, serde::Deserialize)]
pub struct ChapterIdPath {
    pub chapter_id: String,
}

impl ChapterIdPath {
    /// Parse chapter_id as EntityId
    pub fn chapter_id(&self) -> Result<EntityId, ApiError> {
        self.chapter_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid chapter_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as EntityId
    pub fn user_id(&self) -> Result<EntityId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
