pub mod categories;
pub mod docs;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    extract::DefaultBodyLimit,
    middleware::map_response,
    routing::{delete, get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    error::Error,
    middleware::{cors::trivia_cors, envelope},
    AppState,
};

pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Full application router with every layer applied.
pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(questions::list_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(|| async { Error::NotFound("no such route".to_string()) })
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(map_response(envelope::ensure_json_errors))
        .layer(CatchPanicLayer::custom(envelope::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(trivia_cors())
}
