//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use story_core::entities::{AuthorSummary, BookSummary, ChapterSummary, LikedBook, LikedChapter};

use super::responses::{
    AuthorResponse, BookSummaryResponse, ChapterSummaryResponse, LikedBookResponse,
    LikedChapterResponse,
};

impl From<&AuthorSummary> for AuthorResponse {
    fn from(author: &AuthorSummary) -> Self {
        Self {
            username: author.username.clone(),
            profile_picture: author.profile_picture.clone(),
        }
    }
}

impl From<&BookSummary> for BookSummaryResponse {
    fn from(book: &BookSummary) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            cover_image: book.cover_image.clone(),
            description: book.description.clone(),
            genres: book.genres.clone(),
            author: AuthorResponse::from(&book.author),
        }
    }
}

impl From<&ChapterSummary> for ChapterSummaryResponse {
    fn from(chapter: &ChapterSummary) -> Self {
        Self {
            id: chapter.id,
            title: chapter.title.clone(),
            book: BookSummaryResponse::from(&chapter.book),
        }
    }
}

impl From<&LikedBook> for LikedBookResponse {
    fn from(like: &LikedBook) -> Self {
        Self {
            user_id: like.user_id,
            book_id: like.book_id,
            created_at: like.created_at,
            book: BookSummaryResponse::from(&like.book),
        }
    }
}

impl From<LikedBook> for LikedBookResponse {
    fn from(like: LikedBook) -> Self {
        Self::from(&like)
    }
}

impl From<&LikedChapter> for LikedChapterResponse {
    fn from(like: &LikedChapter) -> Self {
        Self {
            user_id: like.user_id,
            chapter_id: like.chapter_id,
            created_at: like.created_at,
            chapter: ChapterSummaryResponse::from(&like.chapter),
        }
    }
}

impl From<LikedChapter> for LikedChapterResponse {
    fn from(like: LikedChapter) -> Self {
        Self::from(&like)
    }
}
