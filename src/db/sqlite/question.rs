//! SQLite QuestionRepository implementation.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::map_sqlx_err;
use crate::db::{DbError, DbResult, NewQuestion, Question, QuestionRepository};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty, rating";

/// SQLx-backed question repository.
pub(crate) struct SqliteQuestionRepository {
    pub(crate) pool: SqlitePool,
}

fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
        rating: row.get("rating"),
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn create(&self, question: &NewQuestion) -> DbResult<Question> {
        let result = sqlx::query(
            "INSERT INTO question (question, answer, category, difficulty, rating) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .bind(question.rating)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
            rating: question.rating,
        })
    }

    async fn get(&self, id: i64) -> DbResult<Question> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM question WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Question".to_string(),
            id,
        })?;

        Ok(question_from_row(&row))
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM question WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Question".to_string(),
                id,
            });
        }

        Ok(())
    }

    async fn count(&self) -> DbResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM question")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> DbResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM question ORDER BY id ASC LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn list_by_category(&self, category_id: i64) -> DbResult<Vec<Question>> {
        let sql =
            format!("SELECT {QUESTION_COLUMNS} FROM question WHERE category = ? ORDER BY id ASC");
        let rows = sqlx::query(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn list_all(&self) -> DbResult<Vec<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM question ORDER BY id ASC");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(rows.iter().map(question_from_row).collect())
    }
}
