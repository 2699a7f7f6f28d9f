//! PostgreSQL implementation of ChapterLikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use story_core::entities::LikedChapter;
use story_core::error::DomainError;
use story_core::traits::{ChapterLikeRepository, RepoResult};
use story_core::value_objects::EntityId;

use crate::models::LikedChapterModel;

use super::error::{map_db_error, map_unique_violation};

/// Select a chapter like joined with its chapter, owning book, and author
const SELECT_LIKED_CHAPTER: &str = r#"
    SELECT cl.user_id, cl.chapter_id, cl.created_at,
           c.title AS chapter_title,
           b.id AS book_id, b.title AS book_title,
           b.cover_image AS book_cover_image,
           b.description AS book_description,
           a.username AS author_username,
           a.profile_picture AS author_profile_picture
    FROM chapter_likes cl
    JOIN chapters c ON c.id = cl.chapter_id
    JOIN books b ON b.id = c.book_id
    JOIN users a ON a.id = b.author_id
"#;

/// PostgreSQL implementation of ChapterLikeRepository
#[derive(Clone)]
pub struct PgChapterLikeRepository {
    pool: PgPool,
}

impl PgChapterLikeRepository {
    /// Create a new PgChapterLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterLikeRepository for PgChapterLikeRepository {
    #[instrument(skip(self))]
    async fn is_liked(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<bool> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM chapter_likes WHERE user_id = $1 AND chapter_id = $2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(chapter_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found)
    }

    #[instrument(skip(self))]
    async fn insert(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<LikedChapter> {
        sqlx::query(
            r#"
            INSERT INTO chapter_likes (user_id, chapter_id) VALUES ($1, $2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(chapter_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LikeAlreadyExists))?;

        let sql = format!("{SELECT_LIKED_CHAPTER} WHERE cl.user_id = $1 AND cl.chapter_id = $2");
        let row = sqlx::query_as::<_, LikedChapterModel>(&sql)
            .bind(user_id.into_inner())
            .bind(chapter_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(LikedChapter::from)
            .ok_or(DomainError::ChapterNotFound(chapter_id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM chapter_likes WHERE user_id = $1 AND chapter_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(chapter_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, chapter_id: EntityId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM chapter_likes WHERE chapter_id = $1
            "#,
        )
        .bind(chapter_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<LikedChapter>> {
        let sql = format!("{SELECT_LIKED_CHAPTER} WHERE cl.user_id = $1 ORDER BY cl.created_at DESC");
        let rows = sqlx::query_as::<_, LikedChapterModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LikedChapter::from).collect())
    }
}
