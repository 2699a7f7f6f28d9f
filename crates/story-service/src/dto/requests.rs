//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Field names follow the camelCase wire format.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject id lists containing zero or negative values
fn validate_positive_ids(ids: &[i64]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| *id <= 0) {
        return Err(ValidationError::new("positive_id")
            .with_message("ids must be positive integers".into()));
    }
    Ok(())
}

/// Toggle a book like
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBookLikeRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "bookId must be a positive integer"))]
    pub book_id: i64,
}

/// Toggle a chapter like
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleChapterLikeRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "chapterId must be a positive integer"))]
    pub chapter_id: i64,
}

/// Query like status for several books at once
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MultipleBookStatusRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    /// May be empty; an empty list yields an empty mapping
    #[validate(custom(function = validate_positive_ids))]
    pub book_ids: Vec<i64>,
}

/// Query like status for several chapters at once
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChapterStatusRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    #[validate(custom(function = validate_positive_ids))]
    pub chapter_ids: Vec<i64>,
}

/// Query like counts for several books at once
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookIdsRequest {
    #[validate(custom(function = validate_positive_ids))]
    pub book_ids: Vec<i64>,
}

/// Query like counts for several chapters at once
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChapterIdsRequest {
    #[validate(custom(function = validate_positive_ids))]
    pub chapter_ids: Vec<i64>,
}

/// Query string for single status lookups
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusQuery {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,
}
