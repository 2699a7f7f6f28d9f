//! Database models - SQLx-compatible structs for PostgreSQL rows

mod like;

pub use like::{LikedBookModel, LikedChapterModel};
