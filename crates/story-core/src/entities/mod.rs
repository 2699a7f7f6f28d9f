//! Domain entities - core business objects

mod book;
mod chapter;
mod like;
mod user;

pub use book::Book;
pub use chapter::Chapter;
pub use like::{
    AuthorSummary, BookLike, BookSummary, ChapterLike, ChapterSummary, LikedBook, LikedChapter,
};
pub use user::User;
