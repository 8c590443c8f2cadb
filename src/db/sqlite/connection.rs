//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{SqliteCategoryRepository, SqliteQuestionRepository};
use crate::db::{CategoryRepository, Database, DbError, DbResult, QuestionRepository};

/// SQLx-backed SQLite database.
///
/// Holds the connection pool and one repository per entity; the pool is an
/// `Arc` internally, so the clones held by the repositories are cheap.
pub struct SqliteDatabase {
    pool: SqlitePool,
    categories: SqliteCategoryRepository,
    questions: SqliteQuestionRepository,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self::from_pool(pool))
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        // A single connection that is never recycled: an in-memory SQLite
        // database lives exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self::from_pool(pool))
    }

    fn from_pool(pool: SqlitePool) -> Self {
        Self {
            categories: SqliteCategoryRepository { pool: pool.clone() },
            questions: SqliteQuestionRepository { pool: pool.clone() },
            pool,
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn questions(&self) -> &dyn QuestionRepository {
        &self.questions
    }
}
