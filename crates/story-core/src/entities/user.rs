//! User entity - represents a platform account
//!
//! Users are referenced by the likes subsystem but never mutated by it.

use crate::value_objects::EntityId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub profile_picture: Option<String>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: EntityId, username: String) -> Self {
        Self {
            id,
            username,
            profile_picture: None,
        }
    }

    /// Attach a profile picture URL
    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }
}
