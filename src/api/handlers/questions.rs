//! Question handlers: paginated listing, create, search, delete.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use super::categories::categories_map;
use crate::api::AppState;
use crate::api::error::{ApiError, ErrorBody};
use crate::db::{Database, NewQuestion, Question};
use crate::game::{QUESTIONS_PER_PAGE, matches, validate_page};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Question response DTO
#[derive(Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i64,
    #[schema(example = "Who invented the Lambda calculus?")]
    pub question: String,
    #[schema(example = "Alonzo Church")]
    pub answer: String,
    /// Id of the owning category
    pub category: i64,
    pub difficulty: i64,
    pub rating: i64,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
            rating: q.rating,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuestionsParams {
    /// 1-indexed page number (pages hold 10 questions)
    #[param(example = 1)]
    pub page: Option<i64>,
}

/// Paginated question listing response
#[derive(Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    /// Total count across all pages
    pub total_questions: i64,
    /// Map from category id to its type label
    pub categories: BTreeMap<i64, String>,
    /// Always 0: the listing is not filtered by category
    pub current_category: i64,
}

/// Create question request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(example = "Who invented the Lambda calculus?")]
    pub question: String,
    #[schema(example = "Alonzo Church")]
    pub answer: String,
    /// Id of an existing category
    pub category: i64,
    pub difficulty: i64,
    pub rating: i64,
}

/// Create question response
#[derive(Serialize, ToSchema)]
pub struct QuestionCreatedResponse {
    /// Always true
    #[schema(example = true)]
    pub success: bool,
    /// Generated id of the new question
    pub question_id: i64,
}

/// Search request; its presence in a POST /questions body selects the
/// search operation instead of create
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    #[schema(example = "lambda")]
    pub search_term: String,
}

/// Search response
#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    pub questions: Vec<QuestionResponse>,
    /// Count of matching questions
    pub total_questions: i64,
    /// Always 0: search is not filtered by category
    pub current_category: i64,
}

/// Delete question response
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    /// Always true
    #[schema(example = true)]
    pub success: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// List one page of questions
///
/// Returns 10 questions per page together with the category map and the
/// total question count; out-of-range pages are 404
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(ListQuestionsParams),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 404, description = "Page out of range", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state))]
pub async fn list_questions<D: Database>(
    State(state): State<AppState<D>>,
    params: Result<Query<ListQuestionsParams>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let page = params.page.unwrap_or(1);

    let total_questions = state.db().questions().count().await?;
    let offset = validate_page(page, total_questions, QUESTIONS_PER_PAGE)
        .map_err(|e| ApiError::NotFound(format!("page {page}: {e}")))?;

    let questions = state
        .db()
        .questions()
        .list_page(offset, QUESTIONS_PER_PAGE)
        .await?;
    let categories = state.db().categories().list().await?;

    Ok(Json(QuestionListResponse {
        questions: questions.into_iter().map(QuestionResponse::from).collect(),
        total_questions,
        categories: categories_map(categories),
        current_category: 0,
    }))
}

/// Create a question or search questions
///
/// A body carrying `searchTerm` runs a case-insensitive substring search
/// over the question texts; any other body is treated as a create request
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created, or search results", body = QuestionCreatedResponse),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid fields or unknown category", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state, payload))]
pub async fn post_questions<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(value) = payload.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if value.get("searchTerm").is_some() {
        let req: SearchRequest =
            serde_json::from_value(value).map_err(|e| ApiError::Unprocessable(e.to_string()))?;
        return Ok(search_questions(&state, &req.search_term).await?.into_response());
    }

    let req: CreateQuestionRequest =
        serde_json::from_value(value).map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    Ok(create_question(&state, req).await?.into_response())
}

async fn search_questions<D: Database>(
    state: &AppState<D>,
    term: &str,
) -> Result<Json<SearchResponse>, ApiError> {
    let questions = state.db().questions().list_all().await?;
    let matched: Vec<QuestionResponse> = questions
        .into_iter()
        .filter(|q| matches(&q.question, term))
        .map(QuestionResponse::from)
        .collect();

    Ok(Json(SearchResponse {
        total_questions: matched.len() as i64,
        questions: matched,
        current_category: 0,
    }))
}

async fn create_question<D: Database>(
    state: &AppState<D>,
    req: CreateQuestionRequest,
) -> Result<Json<QuestionCreatedResponse>, ApiError> {
    let question = state
        .db()
        .questions()
        .create(&NewQuestion {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
            rating: req.rating,
        })
        .await?;

    Ok(Json(QuestionCreatedResponse {
        success: true,
        question_id: question.id,
    }))
}

/// Delete a question
///
/// Deletes a question by its id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i64, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 404, description = "Question not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state))]
pub async fn delete_question<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    // A non-numeric id never names an existing question.
    let Path(id) = id.map_err(|e| ApiError::NotFound(e.to_string()))?;

    state.db().questions().delete(id).await?;

    Ok(Json(DeletedResponse { success: true }))
}
