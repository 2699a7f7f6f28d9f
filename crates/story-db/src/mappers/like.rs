//! Like model <-> entity mappers

use story_core::entities::{AuthorSummary, BookSummary, ChapterSummary, LikedBook, LikedChapter};
use story_core::value_objects::EntityId;

use crate::models::{LikedBookModel, LikedChapterModel};

/// Convert LikedBookModel to LikedBook entity
impl From<LikedBookModel> for LikedBook {
    fn from(model: LikedBookModel) -> Self {
        LikedBook {
            user_id: EntityId::new(model.user_id),
            book_id: EntityId::new(model.book_id),
            created_at: model.created_at,
            book: BookSummary {
                id: EntityId::new(model.book_id),
                title: model.title,
                cover_image: model.cover_image,
                description: model.description,
                genres: model.genres,
                author: AuthorSummary {
                    username: model.author_username,
                    profile_picture: model.author_profile_picture,
                },
            },
        }
    }
}

/// Convert LikedChapterModel to LikedChapter entity
impl From<LikedChapterModel> for LikedChapter {
    fn from(model: LikedChapterModel) -> Self {
        LikedChapter {
            user_id: EntityId::new(model.user_id),
            chapter_id: EntityId::new(model.chapter_id),
            created_at: model.created_at,
            chapter: ChapterSummary {
                id: EntityId::new(model.chapter_id),
                title: model.chapter_title,
                book: BookSummary {
                    id: EntityId::new(model.book_id),
                    title: model.book_title,
                    cover_image: model.book_cover_image,
                    description: model.book_description,
                    // Genres are not joined for chapter likes; display
                    // surfaces only the owning book's headline fields.
                    genres: Vec::new(),
                    author: AuthorSummary {
                        username: model.author_username,
                        profile_picture: model.author_profile_picture,
                    },
                },
            },
        }
    }
}
