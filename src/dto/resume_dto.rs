use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::resume::ResumeMetadata;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeResponse {
    pub id: Uuid,
    pub original_name: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ResumeMetadata> for ResumeResponse {
    fn from(value: ResumeMetadata) -> Self {
        Self {
            id: value.id,
            original_name: value.original_name,
            content_type: value.content_type,
            size: value.size,
            created_at: value.created_at,
        }
    }
}
