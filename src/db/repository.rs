//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use async_trait::async_trait;

use crate::db::{
    DbResult,
    models::{Category, NewQuestion, Question},
};

/// Repository for Category operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category with the given type label; the id is generated.
    async fn create(&self, kind: &str) -> DbResult<Category>;

    /// Get a category by ID.
    async fn get(&self, id: i64) -> DbResult<Category>;

    /// Get all categories, ordered by id ascending.
    async fn list(&self) -> DbResult<Vec<Category>>;
}

/// Repository for Question operations.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Create a new question; the id is generated.
    async fn create(&self, question: &NewQuestion) -> DbResult<Question>;

    /// Get a question by ID.
    async fn get(&self, id: i64) -> DbResult<Question>;

    /// Delete a question by ID.
    async fn delete(&self, id: i64) -> DbResult<()>;

    /// Count all questions.
    async fn count(&self) -> DbResult<i64>;

    /// Get one page of questions, ordered by id ascending.
    async fn list_page(&self, offset: i64, limit: i64) -> DbResult<Vec<Question>>;

    /// Get all questions in a category, ordered by id ascending.
    async fn list_by_category(&self, category_id: i64) -> DbResult<Vec<Question>>;

    /// Get all questions, ordered by id ascending.
    async fn list_all(&self) -> DbResult<Vec<Question>>;
}

/// Combined database interface.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run pending migrations.
    async fn migrate(&self) -> DbResult<()>;

    /// Get the category repository.
    fn categories(&self) -> &dyn CategoryRepository;

    /// Get the question repository.
    fn questions(&self) -> &dyn QuestionRepository;
}
