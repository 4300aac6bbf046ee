use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::{
    dto::resume_dto::ResumeResponse,
    error::{Error, Result},
    AppState,
};

const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/resume/upload",
    responses(
        (status = 200, description = "Resume stored", body = ResumeResponse),
        (status = 400, description = "Empty, missing or unreadable file")
    )
)]
#[axum::debug_handler]
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read resume bytes: {}", e);
            Error::BadRequest("Failed to read uploaded file".into())
        })?;

        let resume = state
            .resume_service
            .upload(filename.as_deref(), content_type.as_deref(), &data)
            .await?;
        return Ok(Json(ResumeResponse::from(resume)));
    }

    Err(Error::BadRequest("No file uploaded".into()))
}

#[utoipa::path(
    get,
    path = "/resume",
    responses(
        (status = 200, description = "Stored resumes, newest first", body = [ResumeResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_resumes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.resume_service.list().await?;
    let items: Vec<ResumeResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/resume/{id}",
    params(
        ("id" = String, Path, description = "Resume ID")
    ),
    responses(
        (status = 200, description = "Raw resume bytes"),
        (status = 400, description = "Invalid resume id"),
        (status = 404, description = "Resume not found")
    )
)]
#[axum::debug_handler]
pub async fn download_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let file = state.resume_service.download(&id).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        file.original_name.replace(['"', '\\', '\r', '\n'], "_")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    ))
}
