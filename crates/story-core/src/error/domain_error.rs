//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Book not found: {0}")]
    BookNotFound(EntityId),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(EntityId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Id must be a positive integer: {0}")]
    NonPositiveId(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Like already exists for this pair")]
    LikeAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BookNotFound(_) => "UNKNOWN_BOOK",
            Self::ChapterNotFound(_) => "UNKNOWN_CHAPTER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NonPositiveId(_) => "INVALID_ID",
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::BookNotFound(_) | Self::ChapterNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::NonPositiveId(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LikeAlreadyExists)
    }
}
