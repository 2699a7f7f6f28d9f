//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Entity ids
//! are serialized as strings for JavaScript compatibility, and field
//! names follow the camelCase wire format.

use chrono::{DateTime, Utc};
use serde::Serialize;

use story_core::value_objects::EntityId;

/// Result of a like toggle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub is_liked: bool,
    pub likes_count: i64,
    pub message: String,
}

/// Like status for a single entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    pub is_liked: bool,
    pub likes_count: i64,
}

/// Author display data embedded in like listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub username: String,
    pub profile_picture: Option<String>,
}

/// Book display data embedded in like listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummaryResponse {
    pub id: EntityId,
    pub title: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub author: AuthorResponse,
}

/// Chapter display data embedded in like listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummaryResponse {
    pub id: EntityId,
    pub title: String,
    pub book: BookSummaryResponse,
}

/// A book like with its book attached
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedBookResponse {
    pub user_id: EntityId,
    pub book_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub book: BookSummaryResponse,
}

/// A chapter like with its chapter attached
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedChapterResponse {
    pub user_id: EntityId,
    pub chapter_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub chapter: ChapterSummaryResponse,
}

/// Everything a user has liked
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLikesResponse {
    pub liked_books: Vec<LikedBookResponse>,
    pub liked_chapters: Vec<LikedChapterResponse>,
    pub total_likes: usize,
}
