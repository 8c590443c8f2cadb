//! Database error types.
//!
//! Abstracted error types for storage operations. Uses miette for
//! diagnostic output and thiserror for derive macros; the variants are
//! storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(trivia::db::not_found))]
    NotFound { entity_type: String, id: i64 },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(trivia::db::constraint))]
    Constraint { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(trivia::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(trivia::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(trivia::db::connection_error))]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
