use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use uuid::Uuid;

use crate::database::store::{parse_id, DocumentStore};
use crate::error::{Error, Result};
use crate::models::resume::{
    ResumeFile, ResumeMetadata, ResumeRecord, COLLECTION, DEFAULT_CONTENT_TYPE, DEFAULT_FILENAME,
};

const LIST_LIMIT: usize = 500;

#[derive(Clone)]
pub struct ResumeService {
    store: Arc<dyn DocumentStore>,
}

impl ResumeService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn upload(
        &self,
        filename: Option<&str>,
        content_type: Option<&str>,
        content: &[u8],
    ) -> Result<ResumeMetadata> {
        if content.is_empty() {
            return Err(Error::BadRequest("Empty file".into()));
        }

        let record = ResumeRecord {
            original_name: non_blank(filename).unwrap_or(DEFAULT_FILENAME).to_string(),
            content_type: non_blank(content_type)
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string(),
            size: content.len() as i64,
            data_base64: STANDARD.encode(content),
        };

        let doc = self
            .store
            .insert(COLLECTION, serde_json::to_value(&record)?)
            .await?;
        tracing::info!(
            resume_id = %doc.id,
            size = record.size,
            content_type = %record.content_type,
            "Resume stored"
        );

        Ok(ResumeMetadata {
            id: doc.id,
            original_name: record.original_name,
            content_type: record.content_type,
            size: record.size,
            created_at: doc.created_at,
        })
    }

    pub async fn list(&self) -> Result<Vec<ResumeMetadata>> {
        let docs = self
            .store
            .find_many(COLLECTION, &json!({}), LIST_LIMIT)
            .await?;
        docs.iter().map(ResumeMetadata::from_document).collect()
    }

    pub async fn download(&self, id: &str) -> Result<ResumeFile> {
        let id = parse_id(id).ok_or_else(|| Error::InvalidId("Invalid resume id".into()))?;
        let doc = self
            .store
            .find_one(COLLECTION, &id.to_string())
            .await?
            .ok_or_else(|| Error::NotFound("Resume not found".into()))?;

        let record: ResumeRecord = doc.decode()?;
        let content = STANDARD.decode(record.data_base64.as_bytes())?;
        Ok(ResumeFile {
            content,
            content_type: record.content_type,
            original_name: record.original_name,
        })
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self
            .store
            .find_one(COLLECTION, &id.to_string())
            .await?
            .is_some())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
