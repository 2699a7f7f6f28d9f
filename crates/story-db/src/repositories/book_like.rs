//! PostgreSQL implementation of BookLikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use story_core::entities::LikedBook;
use story_core::error::DomainError;
use story_core::traits::{BookLikeRepository, RepoResult};
use story_core::value_objects::EntityId;

use crate::models::LikedBookModel;

use super::error::{map_db_error, map_unique_violation};

/// Select a like row joined with its book, author, and genre labels.
/// Genres aggregate through a grouped left join so books without genres
/// come back with an empty array rather than a dropped row.
const SELECT_LIKED_BOOK: &str = r#"
    SELECT bl.user_id, bl.book_id, bl.created_at,
           b.title, b.cover_image, b.description,
           a.username AS author_username,
           a.profile_picture AS author_profile_picture,
           COALESCE(
               array_agg(g.name ORDER BY g.name) FILTER (WHERE g.name IS NOT NULL),
               ARRAY[]::text[]
           ) AS genres
    FROM book_likes bl
    JOIN books b ON b.id = bl.book_id
    JOIN users a ON a.id = b.author_id
    LEFT JOIN book_genres bg ON bg.book_id = b.id
    LEFT JOIN genres g ON g.id = bg.genre_id
"#;

const GROUP_BY_LIKED_BOOK: &str = r#"
    GROUP BY bl.user_id, bl.book_id, bl.created_at,
             b.title, b.cover_image, b.description, a.username, a.profile_picture
"#;

/// PostgreSQL implementation of BookLikeRepository
#[derive(Clone)]
pub struct PgBookLikeRepository {
    pool: PgPool,
}

impl PgBookLikeRepository {
    /// Create a new PgBookLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookLikeRepository for PgBookLikeRepository {
    #[instrument(skip(self))]
    async fn is_liked(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<bool> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM book_likes WHERE user_id = $1 AND book_id = $2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(book_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found)
    }

    #[instrument(skip(self))]
    async fn insert(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<LikedBook> {
        sqlx::query(
            r#"
            INSERT INTO book_likes (user_id, book_id) VALUES ($1, $2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(book_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LikeAlreadyExists))?;

        let sql = format!(
            "{SELECT_LIKED_BOOK} WHERE bl.user_id = $1 AND bl.book_id = $2 {GROUP_BY_LIKED_BOOK}"
        );
        let row = sqlx::query_as::<_, LikedBookModel>(&sql)
            .bind(user_id.into_inner())
            .bind(book_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(LikedBook::from)
            .ok_or(DomainError::BookNotFound(book_id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM book_likes WHERE user_id = $1 AND book_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(book_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, book_id: EntityId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM book_likes WHERE book_id = $1
            "#,
        )
        .bind(book_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<LikedBook>> {
        let sql = format!(
            "{SELECT_LIKED_BOOK} WHERE bl.user_id = $1 {GROUP_BY_LIKED_BOOK} ORDER BY bl.created_at DESC"
        );
        let rows = sqlx::query_as::<_, LikedBookModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LikedBook::from).collect())
    }
}
