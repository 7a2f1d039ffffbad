use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::category_dto::CategoryListResponse,
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoryListResponse),
        (status = 404, description = "No categories stored", body = ErrorEnvelope)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.question_service.categories().await?;
    if categories.is_empty() {
        return Err(Error::NotFound("no categories stored".to_string()));
    }
    Ok(Json(CategoryListResponse::from(categories)))
}
