//! Like database models
//!
//! Joined rows carrying the like pair plus the denormalized display
//! fields of the liked entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row for a book like joined with its book, author, and genres
#[derive(Debug, Clone, FromRow)]
pub struct LikedBookModel {
    pub user_id: i64,
    pub book_id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub author_username: String,
    pub author_profile_picture: Option<String>,
    pub genres: Vec<String>,
}

/// Row for a chapter like joined with its chapter, owning book, and author
#[derive(Debug, Clone, FromRow)]
pub struct LikedChapterModel {
    pub user_id: i64,
    pub chapter_id: i64,
    pub created_at: DateTime<Utc>,
    pub chapter_title: String,
    pub book_id: i64,
    pub book_title: String,
    pub book_cover_image: Option<String>,
    pub book_description: Option<String>,
    pub author_username: String,
    pub author_profile_picture: Option<String>,
}
