use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::{Error, Result},
    extract::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next unseen question, or null when none remain", body = QuizResponse),
        (status = 400, description = "previous_questions or quiz_category missing", body = ErrorEnvelope),
        (status = 404, description = "Unknown category", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizPayload>,
) -> Result<impl IntoResponse> {
    let (previous, category) = match (payload.previous_questions, payload.quiz_category) {
        (Some(previous), Some(category)) => (previous, category),
        _ => {
            return Err(Error::BadRequest(
                "previous_questions and quiz_category are required".to_string(),
            ))
        }
    };

    let question = state
        .quiz_service
        .next_question(category.category_id(), &previous)
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
