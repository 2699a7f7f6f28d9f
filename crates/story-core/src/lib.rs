//! # story-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuthorSummary, Book, BookLike, BookSummary, Chapter, ChapterLike, ChapterSummary, LikedBook,
    LikedChapter, User,
};
pub use error::DomainError;
pub use traits::{
    BookLikeRepository, BookRepository, ChapterLikeRepository, ChapterRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{EntityId, EntityIdParseError};
