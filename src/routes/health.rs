use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "AutoApply Backend Running" }))
}

/// Reports whether the document store answers, and which collections it holds.
#[axum::debug_handler]
pub async fn store_status(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let collections = state.store.collections().await?;
    Ok(Json(json!({
        "backend": "running",
        "database": "connected",
        "collections": collections,
    })))
}
