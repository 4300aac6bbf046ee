use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::database::Document;
use crate::error::Result;

pub const COLLECTION: &str = "submission";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Sent,
}

/// Body of a `submission` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub application_id: Uuid,
    #[serde(default = "unknown_board")]
    pub board: String,
    pub resume_id: Option<Uuid>,
    pub status: SubmissionStatus,
    pub sent_at: DateTime<Utc>,
}

fn unknown_board() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub application_id: Uuid,
    pub board: String,
    pub resume_id: Option<Uuid>,
    pub status: SubmissionStatus,
    pub sent_at: DateTime<Utc>,
}

impl Submission {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let record: SubmissionRecord = doc.decode()?;
        Ok(Self {
            id: doc.id,
            application_id: record.application_id,
            board: record.board,
            resume_id: record.resume_id,
            status: record.status,
            sent_at: record.sent_at,
        })
    }
}
