use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::{
    apply_dto::{PlanRequest, PlanResponse, SendReportItem, SendRequest, SubmissionResponse},
    resume_dto::ResumeResponse,
};
use crate::models::{application_plan::PlanStatus, submission::SubmissionStatus};
use crate::services::submission_service::SkipReason;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::resume::upload_resume,
        super::resume::list_resumes,
        super::resume::download_resume,
        super::apply::plan_applications,
        super::apply::send_applications,
        super::apply::send_applications_report,
        super::apply::list_sent,
    ),
    components(schemas(
        ResumeResponse,
        PlanRequest,
        PlanResponse,
        PlanStatus,
        SendRequest,
        SubmissionResponse,
        SubmissionStatus,
        SendReportItem,
        SkipReason,
    ))
)]
pub struct ApiDoc;

#[axum::debug_handler]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
