// src/routes.rs

use axum::{
    Json, Router,
    http::{Method, header},
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{category, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires every endpoint to its handler.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (database pool + config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(home))
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(category::list_category_questions),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/{id}", delete(question::delete_question))
        .route("/questions/search", post(question::search_questions))
        .route("/quizzes", post(quiz::next_quiz_question))
        .fallback(fallback)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn home() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "code": 200,
        "message": "Trivia Game Restful API. Please read the README.md file for how to start",
    }))
}

/// Unknown paths get the same JSON error body as everything else.
async fn fallback() -> AppError {
    AppError::NotFound("no such route".to_string())
}
