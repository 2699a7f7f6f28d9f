//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in story-core.
//! Each repository handles database operations for a specific domain entity.

mod book;
mod book_like;
mod chapter;
mod chapter_like;
mod error;
mod user;

pub use book::PgBookRepository;
pub use book_like::PgBookLikeRepository;
pub use chapter::PgChapterRepository;
pub use chapter_like::PgChapterLikeRepository;
pub use user::PgUserRepository;
