//! Category handlers.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use super::questions::QuestionResponse;
use crate::api::AppState;
use crate::api::error::{ApiError, ErrorBody};
use crate::db::{Category, Database};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Category listing response
#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Map from category id to its type label
    pub categories: BTreeMap<i64, String>,
}

/// Create category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    /// Type label of the new category
    #[schema(example = "Sports")]
    pub new_category: String,
}

/// Create category response
#[derive(Serialize, ToSchema)]
pub struct CategoryCreatedResponse {
    /// Always true
    #[schema(example = true)]
    pub success: bool,
    /// Generated id of the new category
    pub category_id: i64,
}

/// Questions-of-a-category response
#[derive(Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    /// Id of the selected category
    pub current_category: i64,
}

/// Build the `{id: type}` map the client renders its sidebar from.
pub(super) fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

// =============================================================================
// Handlers
// =============================================================================

/// List all categories
///
/// Returns every category as an id-to-label map
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Map of all categories", body = CategoriesResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state))]
pub async fn list_categories<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.db().categories().list().await?;

    Ok(Json(CategoriesResponse {
        categories: categories_map(categories),
    }))
}

/// Create a new category
///
/// Creates a category from its type label and returns the generated id
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = CategoryCreatedResponse),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Missing or empty category label", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_category<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CategoryCreatedResponse>, ApiError> {
    let Json(value) = payload.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let req: CreateCategoryRequest =
        serde_json::from_value(value).map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let category = state.db().categories().create(&req.new_category).await?;

    Ok(Json(CategoryCreatedResponse {
        success: true,
        category_id: category.id,
    }))
}

/// List the questions of one category
///
/// Returns every question belonging to the category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions of the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[instrument(skip(state))]
pub async fn list_category_questions<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    // A non-numeric id never names an existing category.
    let Path(id) = id.map_err(|e| ApiError::NotFound(e.to_string()))?;

    let category = state.db().categories().get(id).await?;
    let questions = state.db().questions().list_by_category(category.id).await?;

    Ok(Json(CategoryQuestionsResponse {
        total_questions: questions.len() as i64,
        questions: questions.into_iter().map(QuestionResponse::from).collect(),
        current_category: category.id,
    }))
}
