use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    database::QuestionFilter,
    dto::{
        category_dto::category_map,
        question_dto::{
            CreateQuestionPayload, QuestionCreatedResponse, QuestionDeletedResponse,
            QuestionListResponse, QuestionPageResponse, SearchPayload,
        },
    },
    error::{Error, Result},
    extract::{AppJson, AppPath},
    utils::pagination::PageQuery,
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponse),
        (status = 404, description = "Page is empty", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let page = state
        .question_service
        .non_empty_page(QuestionFilter::All, query.page())
        .await?;
    let categories = state.question_service.categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories: category_map(categories),
        current_category: None,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = QuestionCreatedResponse),
        (status = 400, description = "Malformed body", body = ErrorEnvelope),
        (status = 422, description = "Missing or invalid field", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    AppJson(payload): AppJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let created = state.question_service.create(payload).await?;
    let page = state
        .question_service
        .page(QuestionFilter::All, query.page())
        .await?;

    Ok(Json(QuestionCreatedResponse {
        success: true,
        created: created.id,
        questions: page.questions,
        total_questions: page.total,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionDeletedResponse),
        (status = 404, description = "Question not found", body = ErrorEnvelope),
        (status = 422, description = "Storage rejected the delete", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(id).await?;
    let page = state
        .question_service
        .page(QuestionFilter::All, query.page())
        .await?;

    Ok(Json(QuestionDeletedResponse {
        success: true,
        deleted: id,
        questions: page.questions,
        total_questions: page.total,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchPayload,
    responses(
        (status = 200, description = "Matching questions, possibly none", body = QuestionPageResponse),
        (status = 400, description = "searchTerm missing", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    AppJson(payload): AppJson<SearchPayload>,
) -> Result<impl IntoResponse> {
    let term = payload
        .search_term
        .ok_or_else(|| Error::BadRequest("searchTerm is required".to_string()))?;
    let page = state.question_service.search(&term, query.page()).await?;
    Ok(Json(QuestionPageResponse::new(page, None)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionPageResponse),
        (status = 404, description = "Unknown category or empty page", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let category = state.question_service.require_category(id).await?;
    let page = state
        .question_service
        .non_empty_page(QuestionFilter::Category(category.id), query.page())
        .await?;
    Ok(Json(QuestionPageResponse::new(page, Some(category.id))))
}
