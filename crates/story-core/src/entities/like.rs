//! Like entities - the (user, entity) relations and their denormalized views
//!
//! A like has no identity beyond the pair and no mutable fields: the row
//! either exists or it does not. Rows are only ever created and destroyed,
//! never updated in place. Uniqueness of the pair is enforced by the
//! store's composite primary key, not by application logic.

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// A user's like on a book, keyed on (user_id, book_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLike {
    pub user_id: EntityId,
    pub book_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl BookLike {
    /// Create a new BookLike stamped with the current time
    pub fn new(user_id: EntityId, book_id: EntityId) -> Self {
        Self {
            user_id,
            book_id,
            created_at: Utc::now(),
        }
    }
}

/// A user's like on a chapter, keyed on (user_id, chapter_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterLike {
    pub user_id: EntityId,
    pub chapter_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl ChapterLike {
    /// Create a new ChapterLike stamped with the current time
    pub fn new(user_id: EntityId, chapter_id: EntityId) -> Self {
        Self {
            user_id,
            chapter_id,
            created_at: Utc::now(),
        }
    }
}

/// Display data for a book's author, copied alongside a like for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub username: String,
    pub profile_picture: Option<String>,
}

/// Denormalized book display data carried by a like record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub id: EntityId,
    pub title: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub author: AuthorSummary,
}

/// Denormalized chapter display data, including the owning book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub id: EntityId,
    pub title: String,
    pub book: BookSummary,
}

/// A book like joined with its book's display data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedBook {
    pub user_id: EntityId,
    pub book_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub book: BookSummary,
}

/// A chapter like joined with its chapter's display data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedChapter {
    pub user_id: EntityId,
    pub chapter_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub chapter: ChapterSummary,
}
