pub mod apply;
pub mod docs;
pub mod health;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/test", get(health::store_status))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route("/resume/upload", post(resume::upload_resume))
        .route("/resume", get(resume::list_resumes))
        .route("/resume/:id", get(resume::download_resume))
        .route("/apply/plan", post(apply::plan_applications))
        .route("/apply/send", post(apply::send_applications))
        .route("/apply/send/report", post(apply::send_applications_report))
        .route("/apply/sent", get(apply::list_sent))
        .with_state(state)
}
