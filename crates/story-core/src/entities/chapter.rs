//! Chapter entity

use crate::value_objects::EntityId;

/// Chapter entity - belongs to exactly one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: EntityId,
    pub title: String,
    pub book_id: EntityId,
}

impl Chapter {
    /// Create a new Chapter
    pub fn new(id: EntityId, title: String, book_id: EntityId) -> Self {
        Self { id, title, book_id }
    }
}
