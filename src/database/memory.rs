use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::store::{
    clamp_limit, creation_time, json_contains, parse_id, Document, DocumentStore,
};
use crate::error::Result;

/// Process-local store. Each collection keeps documents in insertion order.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document> {
        let doc = Document {
            id: Uuid::new_v4(),
            collection: collection.to_string(),
            created_at: creation_time(&body),
            body,
        };

        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &JsonValue,
        limit: usize,
    ) -> Result<Vec<Document>> {
        let guard = self.collections.read().await;
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };

        // Newest insert first, so the stable sort breaks timestamp ties the same way.
        let mut matched: Vec<Document> = docs
            .iter()
            .rev()
            .filter(|doc| json_contains(&doc.body, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched.truncate(clamp_limit(limit));
        Ok(matched)
    }

    async fn collections(&self) -> Result<Vec<String>> {
        let guard = self.collections.read().await;
        let mut names: Vec<String> = guard
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn close(&self) {
        tracing::debug!("in-memory document store closed");
    }
}
