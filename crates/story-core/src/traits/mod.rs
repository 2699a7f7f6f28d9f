//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    BookLikeRepository, BookRepository, ChapterLikeRepository, ChapterRepository, RepoResult,
    UserRepository,
};
