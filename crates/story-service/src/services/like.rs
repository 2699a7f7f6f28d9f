//! Like service
//!
//! Coordinates like toggles, status lookups, aggregate counts, and
//! per-user like listings for books and chapters.

use std::collections::{HashMap, HashSet};

use futures::future::try_join_all;
use tracing::{info, instrument};

use story_core::error::DomainError;
use story_core::value_objects::EntityId;

use crate::dto::{
    LikeStatusResponse, LikeToggleResponse, LikedBookResponse, LikedChapterResponse,
    UserLikesResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a book like for a user
    ///
    /// Verifies the user and book exist before touching any like row.
    /// A like racing in between the status read and the insert is
    /// treated as already liked rather than a conflict.
    #[instrument(skip(self))]
    pub async fn toggle_book_like(
        &self,
        user_id: EntityId,
        book_id: EntityId,
    ) -> ServiceResult<LikeToggleResponse> {
        self.verify_user_exists(user_id).await?;
        if !self.ctx.book_repo().exists(book_id).await? {
            return Err(ServiceError::not_found("Book", book_id.to_string()));
        }

        let was_liked = self.ctx.book_like_repo().is_liked(user_id, book_id).await?;

        let is_liked = if was_liked {
            // Deleting an already-absent row is fine, the target state
            // is "not liked" either way.
            self.ctx.book_like_repo().delete(user_id, book_id).await?;
            false
        } else {
            match self.ctx.book_like_repo().insert(user_id, book_id).await {
                Ok(_) | Err(DomainError::LikeAlreadyExists) => true,
                Err(e) => return Err(e.into()),
            }
        };

        let likes_count = self.ctx.book_like_repo().count(book_id).await?;

        info!(
            user_id = %user_id,
            book_id = %book_id,
            is_liked,
            "Book like toggled"
        );

        Ok(LikeToggleResponse {
            is_liked,
            likes_count,
            message: if is_liked {
                "Book liked successfully".to_string()
            } else {
                "Book like removed successfully".to_string()
            },
        })
    }

    /// Toggle a chapter like for a user
    #[instrument(skip(self))]
    pub async fn toggle_chapter_like(
        &self,
        user_id: EntityId,
        chapter_id: EntityId,
    ) -> ServiceResult<LikeToggleResponse> {
        self.verify_user_exists(user_id).await?;
        if !self.ctx.chapter_repo().exists(chapter_id).await? {
            return Err(ServiceError::not_found("Chapter", chapter_id.to_string()));
        }

        let was_liked = self
            .ctx
            .chapter_like_repo()
            .is_liked(user_id, chapter_id)
            .await?;

        let is_liked = if was_liked {
            self.ctx
                .chapter_like_repo()
                .delete(user_id, chapter_id)
                .await?;
            false
        } else {
            match self
                .ctx
                .chapter_like_repo()
                .insert(user_id, chapter_id)
                .await
            {
                Ok(_) | Err(DomainError::LikeAlreadyExists) => true,
                Err(e) => return Err(e.into()),
            }
        };

        let likes_count = self.ctx.chapter_like_repo().count(chapter_id).await?;

        info!(
            user_id = %user_id,
            chapter_id = %chapter_id,
            is_liked,
            "Chapter like toggled"
        );

        Ok(LikeToggleResponse {
            is_liked,
            likes_count,
            message: if is_liked {
                "Chapter liked successfully".to_string()
            } else {
                "Chapter like removed successfully".to_string()
            },
        })
    }

    /// Get like status and count for a single book
    ///
    /// The two reads run concurrently and are not a joint snapshot; a
    /// toggle landing in between can skew one against the other.
    #[instrument(skip(self))]
    pub async fn book_like_status(
        &self,
        user_id: EntityId,
        book_id: EntityId,
    ) -> ServiceResult<LikeStatusResponse> {
        let (is_liked, likes_count) = tokio::try_join!(
            self.ctx.book_like_repo().is_liked(user_id, book_id),
            self.ctx.book_like_repo().count(book_id),
        )?;

        Ok(LikeStatusResponse {
            is_liked,
            likes_count,
        })
    }

    /// Get like status and count for a single chapter
    #[instrument(skip(self))]
    pub async fn chapter_like_status(
        &self,
        user_id: EntityId,
        chapter_id: EntityId,
    ) -> ServiceResult<LikeStatusResponse> {
        let (is_liked, likes_count) = tokio::try_join!(
            self.ctx.chapter_like_repo().is_liked(user_id, chapter_id),
            self.ctx.chapter_like_repo().count(chapter_id),
        )?;

        Ok(LikeStatusResponse {
            is_liked,
            likes_count,
        })
    }

    /// Get like status for several books at once
    ///
    /// Duplicate ids collapse to one lookup. Any failed lookup fails
    /// the whole batch.
    #[instrument(skip(self))]
    pub async fn multiple_book_like_status(
        &self,
        user_id: EntityId,
        book_ids: &[EntityId],
    ) -> ServiceResult<HashMap<EntityId, LikeStatusResponse>> {
        let distinct: HashSet<EntityId> = book_ids.iter().copied().collect();

        let lookups = distinct.into_iter().map(|book_id| async move {
            let status = self.book_like_status(user_id, book_id).await?;
            Ok::<_, ServiceError>((book_id, status))
        });

        Ok(try_join_all(lookups).await?.into_iter().collect())
    }

    /// Get like status for several chapters at once
    #[instrument(skip(self))]
    pub async fn multiple_chapter_like_status(
        &self,
        user_id: EntityId,
        chapter_ids: &[EntityId],
    ) -> ServiceResult<HashMap<EntityId, LikeStatusResponse>> {
        let distinct: HashSet<EntityId> = chapter_ids.iter().copied().collect();

        let lookups = distinct.into_iter().map(|chapter_id| async move {
            let status = self.chapter_like_status(user_id, chapter_id).await?;
            Ok::<_, ServiceError>((chapter_id, status))
        });

        Ok(try_join_all(lookups).await?.into_iter().collect())
    }

    /// Get like counts for several books at once
    #[instrument(skip(self))]
    pub async fn multiple_book_likes_count(
        &self,
        book_ids: &[EntityId],
    ) -> ServiceResult<HashMap<EntityId, i64>> {
        let distinct: HashSet<EntityId> = book_ids.iter().copied().collect();

        let lookups = distinct.into_iter().map(|book_id| async move {
            let count = self.ctx.book_like_repo().count(book_id).await?;
            Ok::<_, ServiceError>((book_id, count))
        });

        Ok(try_join_all(lookups).await?.into_iter().collect())
    }

    /// Get like counts for several chapters at once
    #[instrument(skip(self))]
    pub async fn multiple_chapter_likes_count(
        &self,
        chapter_ids: &[EntityId],
    ) -> ServiceResult<HashMap<EntityId, i64>> {
        let distinct: HashSet<EntityId> = chapter_ids.iter().copied().collect();

        let lookups = distinct.into_iter().map(|chapter_id| async move {
            let count = self.ctx.chapter_like_repo().count(chapter_id).await?;
            Ok::<_, ServiceError>((chapter_id, count))
        });

        Ok(try_join_all(lookups).await?.into_iter().collect())
    }

    /// Get everything a user has liked, books and chapters together
    #[instrument(skip(self))]
    pub async fn user_likes(&self, user_id: EntityId) -> ServiceResult<UserLikesResponse> {
        self.verify_user_exists(user_id).await?;

        let (books, chapters) = tokio::try_join!(
            self.ctx.book_like_repo().find_by_user(user_id),
            self.ctx.chapter_like_repo().find_by_user(user_id),
        )?;

        let liked_books: Vec<LikedBookResponse> =
            books.iter().map(LikedBookResponse::from).collect();
        let liked_chapters: Vec<LikedChapterResponse> =
            chapters.iter().map(LikedChapterResponse::from).collect();
        let total_likes = liked_books.len() + liked_chapters.len();

        Ok(UserLikesResponse {
            liked_books,
            liked_chapters,
            total_likes,
        })
    }

    /// Get the books a user has liked
    #[instrument(skip(self))]
    pub async fn user_liked_books(
        &self,
        user_id: EntityId,
    ) -> ServiceResult<Vec<LikedBookResponse>> {
        self.verify_user_exists(user_id).await?;

        let books = self.ctx.book_like_repo().find_by_user(user_id).await?;
        Ok(books.iter().map(LikedBookResponse::from).collect())
    }

    /// Get the chapters a user has liked
    #[instrument(skip(self))]
    pub async fn user_liked_chapters(
        &self,
        user_id: EntityId,
    ) -> ServiceResult<Vec<LikedChapterResponse>> {
        self.verify_user_exists(user_id).await?;

        let chapters = self.ctx.chapter_like_repo().find_by_user(user_id).await?;
        Ok(chapters.iter().map(LikedChapterResponse::from).collect())
    }

    /// Verify the user exists
    async fn verify_user_exists(&self, user_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.user_repo().exists(user_id).await? {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }
        Ok(())
    }
}
