//! Book entity

use crate::value_objects::EntityId;

/// Book entity - a likeable work authored by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub author_id: EntityId,
    pub genres: Vec<String>,
}

impl Book {
    /// Create a new Book with required fields
    pub fn new(id: EntityId, title: String, author_id: EntityId) -> Self {
        Self {
            id,
            title,
            cover_image: None,
            description: None,
            author_id,
            genres: Vec::new(),
        }
    }

    /// Attach a cover image URL
    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    /// Attach a description
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Attach genre labels
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }
}
