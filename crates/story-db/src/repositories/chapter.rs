//! PostgreSQL implementation of ChapterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use story_core::traits::{ChapterRepository, RepoResult};
use story_core::value_objects::EntityId;

use super::error::map_db_error;

/// PostgreSQL implementation of ChapterRepository
#[derive(Clone)]
pub struct PgChapterRepository {
    pool: PgPool,
}

impl PgChapterRepository {
    /// Create a new PgChapterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterRepository for PgChapterRepository {
    #[instrument(skip(self))]
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM chapters WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found)
    }
}
