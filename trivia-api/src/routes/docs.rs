use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    dto::{
        category_dto::CategoryListResponse,
        question_dto::{
            CreateQuestionPayload, QuestionCreatedResponse, QuestionDeletedResponse,
            QuestionListResponse, QuestionPageResponse, SearchPayload,
        },
        quiz_dto::{QuizCategory, QuizPayload, QuizResponse},
    },
    error::ErrorEnvelope,
    models::{Category, Question},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::categories::list_categories,
        crate::routes::questions::list_questions,
        crate::routes::questions::create_question,
        crate::routes::questions::delete_question,
        crate::routes::questions::search_questions,
        crate::routes::questions::list_category_questions,
        crate::routes::quizzes::play_quiz,
    ),
    components(
        schemas(
            Question, Category,
            CreateQuestionPayload, SearchPayload, QuizPayload, QuizCategory,
            QuestionListResponse, QuestionPageResponse, QuestionCreatedResponse,
            QuestionDeletedResponse, CategoryListResponse, QuizResponse,
            ErrorEnvelope
        )
    ),
    tags(
        (name = "Trivia", description = "Question, category and quiz endpoints")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
