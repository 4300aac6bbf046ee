use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::database::Document;
use crate::error::Result;

pub const COLLECTION: &str = "applicationplan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Planned,
    Sent,
    Failed,
}

/// Body of an `applicationplan` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub resume_id: Uuid,
    pub board: String,
    pub planned_time: String,
    pub match_score: i32,
    pub paraphrase_level: i32,
    pub status: PlanStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationPlan {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub board: String,
    pub planned_time: String,
    pub match_score: i32,
    pub paraphrase_level: i32,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
}

impl ApplicationPlan {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let record: PlanRecord = doc.decode()?;
        Ok(Self {
            id: doc.id,
            resume_id: record.resume_id,
            board: record.board,
            planned_time: record.planned_time,
            match_score: record.match_score,
            paraphrase_level: record.paraphrase_level,
            status: record.status,
            created_at: doc.created_at,
        })
    }
}
