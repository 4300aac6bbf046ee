use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::{
    dto::apply_dto::{
        PlanRequest, PlanResponse, SendReportItem, SendRequest, SubmissionResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/apply/plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Created plans", body = [PlanResponse]),
        (status = 400, description = "Invalid resume id or payload")
    )
)]
#[axum::debug_handler]
pub async fn plan_applications(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse> {
    let payload: PlanRequest = serde_json::from_value(body)?;
    payload.validate()?;
    let plans = state.plan_service.plan(payload).await?;
    let plans: Vec<PlanResponse> = plans.into_iter().map(Into::into).collect();
    Ok(Json(plans))
}

#[utoipa::path(
    post,
    path = "/apply/send",
    request_body = SendRequest,
    responses(
        (status = 200, description = "Submissions created for the known plan ids", body = [SubmissionResponse]),
        (status = 400, description = "application_ids is not a list")
    )
)]
#[axum::debug_handler]
pub async fn send_applications(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse> {
    let request = SendRequest::from_json(body)?;
    let sent = state
        .submission_service
        .send(&request.application_ids)
        .await;
    let sent: Vec<SubmissionResponse> = sent.into_iter().map(Into::into).collect();
    Ok(Json(sent))
}

#[utoipa::path(
    post,
    path = "/apply/send/report",
    request_body = SendRequest,
    responses(
        (status = 200, description = "One outcome per requested id", body = [SendReportItem]),
        (status = 400, description = "application_ids is not a list")
    )
)]
#[axum::debug_handler]
pub async fn send_applications_report(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse> {
    let request = SendRequest::from_json(body)?;
    let outcomes = state
        .submission_service
        .send_with_report(&request.application_ids)
        .await;
    let report: Vec<SendReportItem> = outcomes.into_iter().map(Into::into).collect();
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/apply/sent",
    responses(
        (status = 200, description = "Recorded submissions, newest first", body = [SubmissionResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_sent(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let sent = state.submission_service.list_sent().await?;
    let sent: Vec<SubmissionResponse> = sent.into_iter().map(Into::into).collect();
    Ok(Json(sent))
}
