//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;

use crate::db::DbError;

/// Map an sqlx error to the storage-agnostic taxonomy.
///
/// Constraint violations (foreign key, check, not-null, unique) get their
/// own variant so the HTTP boundary can answer 422 instead of 500.
pub(crate) fn map_sqlx_err(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return DbError::Constraint {
                    message: db_err.message().to_string(),
                };
            }
            _ => {}
        }
    }

    DbError::Database {
        message: e.to_string(),
    }
}
