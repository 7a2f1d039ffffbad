use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, AppState};

/// Liveness plus a storage round-trip.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.question_service.categories().await?;
    Ok(Json(json!({
        "status": "ok",
        "success": true,
        "storage": { "categories": categories.len() },
    })))
}
