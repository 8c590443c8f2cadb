//! SQLite CategoryRepository implementation.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::helpers::map_sqlx_err;
use crate::db::{Category, CategoryRepository, DbError, DbResult};

/// SQLx-backed category repository.
pub(crate) struct SqliteCategoryRepository {
    pub(crate) pool: SqlitePool,
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, kind: &str) -> DbResult<Category> {
        let result = sqlx::query("INSERT INTO category (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(Category {
            id: result.last_insert_rowid(),
            kind: kind.to_string(),
        })
    }

    async fn get(&self, id: i64) -> DbResult<Category> {
        let row = sqlx::query("SELECT id, type FROM category WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Category".to_string(),
            id,
        })?;

        Ok(Category {
            id: row.get("id"),
            kind: row.get("type"),
        })
    }

    async fn list(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, type FROM category ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(rows
            .into_iter()
            .map(|row| Category {
                id: row.get("id"),
                kind: row.get("type"),
            })
            .collect())
    }
}
