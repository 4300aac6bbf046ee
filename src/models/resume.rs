use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::Document;
use crate::error::Result;

pub const COLLECTION: &str = "resume";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
pub const DEFAULT_FILENAME: &str = "resume";

/// Body of a `resume` document. File content is embedded as base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub original_name: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub data_base64: String,
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeMetadata {
    pub id: Uuid,
    pub original_name: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

impl ResumeMetadata {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let record: ResumeRecord = doc.decode()?;
        Ok(Self {
            id: doc.id,
            original_name: record.original_name,
            content_type: record.content_type,
            size: record.size,
            created_at: doc.created_at,
        })
    }
}

/// Raw resume bytes ready to be streamed back to a client.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub content: Vec<u8>,
    pub content_type: String,
    pub original_name: String,
}
