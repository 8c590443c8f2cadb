//! Quiz play handler.

use std::collections::HashSet;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use super::questions::QuestionResponse;
use crate::api::AppState;
use crate::api::error::{ApiError, ErrorBody};
use crate::db::Database;
use crate::game::select_next;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Category filter of a quiz round; id 0 means "all categories".
/// The client also sends the type label, which is ignored here.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: i64,
}

/// Quiz round request
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of the questions already asked this game
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    /// Optional category filter; absent behaves like id 0
    pub quiz_category: Option<QuizCategory>,
}

/// Quiz round response
#[derive(Serialize, ToSchema)]
pub struct QuizResponse {
    /// The next question, or null when the quiz is finished
    pub question: Option<QuestionResponse>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Play the next quiz round
///
/// Picks one random question that has not been asked yet, restricted to
/// the requested category when one is given; `question: null` signals
/// that no eligible question remains
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null when finished", body = QuizResponse),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state, payload))]
pub async fn play_quiz<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(value) = payload.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let req: QuizRequest =
        serde_json::from_value(value).map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let category_id = req.quiz_category.map(|c| c.id).unwrap_or(0);
    let previous: HashSet<i64> = req.previous_questions.into_iter().collect();

    let pool = state.db().questions().list_all().await?;
    let question = select_next(category_id, &previous, &pool, &mut rand::rng()).cloned();

    Ok(Json(QuizResponse {
        question: question.map(QuestionResponse::from),
    }))
}
