//! HTTP error taxonomy.
//!
//! One error type for every handler. Variant payloads carry diagnostic
//! detail for the logs; the serialized body always uses the canonical
//! per-status message, so clients see a single fixed shape:
//! `{success: false, error: <status>, message: <text>}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Request failure taxonomy, mapped to HTTP statuses at the boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("entity not found: {0}")]
    NotFound(String),

    #[error("unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

/// Error response body shared by every endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code, repeated in the body
    #[schema(example = 404)]
    pub error: u16,
    /// Canonical reason text
    #[schema(example = "entity not found")]
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Canonical message serialized into the response body.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request",
            ApiError::NotFound(_) => "entity not found",
            ApiError::Unprocessable(_) => "unprocessable entity",
            ApiError::Internal(_) => "internal server error",
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            DbError::Constraint { .. } => ApiError::Unprocessable(e.to_string()),
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_taxonomy() {
        assert_eq!(
            ApiError::BadRequest(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(String::new()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unprocessable(String::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn db_not_found_maps_to_404() {
        let err = ApiError::from(DbError::NotFound {
            entity_type: "Question".to_string(),
            id: 7,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn db_constraint_maps_to_422() {
        let err = ApiError::from(DbError::Constraint {
            message: "FOREIGN KEY constraint failed".to_string(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn other_db_errors_map_to_500() {
        let err = ApiError::from(DbError::Database {
            message: "disk I/O error".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn body_message_is_canonical_not_the_detail() {
        let err = ApiError::NotFound("Question 42 is gone".to_string());
        assert_eq!(err.message(), "entity not found");
    }
}
