//! API route configuration.

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CategoriesResponse, CategoryCreatedResponse, CategoryQuestionsResponse,
    CreateCategoryRequest, CreateQuestionRequest, DeletedResponse, HealthResponse,
    QuestionCreatedResponse, QuestionListResponse, QuestionResponse, QuizCategory, QuizRequest,
    QuizResponse, SearchRequest, SearchResponse,
};
use super::state::AppState;
use crate::api::error::ErrorBody;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Question bank and quiz-play API for the trivia client",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        handlers::list_categories,
        handlers::create_category,
        handlers::list_category_questions,
        handlers::list_questions,
        handlers::post_questions,
        handlers::delete_question,
        handlers::play_quiz,
    ),
    components(
        schemas(
            HealthResponse,
            CategoriesResponse,
            CreateCategoryRequest,
            CategoryCreatedResponse,
            CategoryQuestionsResponse,
            QuestionResponse,
            QuestionListResponse,
            CreateQuestionRequest,
            QuestionCreatedResponse,
            SearchRequest,
            SearchResponse,
            DeletedResponse,
            QuizCategory,
            QuizRequest,
            QuizResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "categories", description = "Category management endpoints"),
        (name = "questions", description = "Question listing, creation, search, and deletion"),
        (name = "quizzes", description = "Quiz play endpoint")
    )
)]
pub struct ApiDoc;

/// Permissive CORS: the trivia client is served from a different origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(handlers::health));

    // Category routes (generic over Database)
    let category_routes = routes!(D => {
        get "/categories" => handlers::list_categories,
        post "/categories" => handlers::create_category,
        get "/categories/{id}/questions" => handlers::list_category_questions,
    });

    // Question routes (generic over Database)
    let question_routes = routes!(D => {
        get "/questions" => handlers::list_questions,
        post "/questions" => handlers::post_questions,
        delete "/questions/{id}" => handlers::delete_question,
    });

    // Quiz routes (generic over Database)
    let quiz_routes = routes!(D => {
        post "/quizzes" => handlers::play_quiz,
    });

    system_routes
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(cors_layer())
        .with_state(state)
}
