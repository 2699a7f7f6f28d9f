//! # story-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `story-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//! - Embedded SQL migrations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookLikeRepository, PgBookRepository, PgChapterLikeRepository, PgChapterRepository,
    PgUserRepository,
};

/// Run the embedded SQL migrations against the given pool
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
