//! Document persistence port.
//!
//! Collections hold schemaless JSON bodies keyed by a generated UUID. Every
//! document carries its creation time, and listings come back newest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::Result;
use crate::utils::time;

pub const DEFAULT_FIND_LIMIT: usize = 50;
pub const MAX_FIND_LIMIT: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub body: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `body` under a fresh id and returns the stored document.
    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document>;

    /// Returns `None` when `id` is not a UUID or no document has it.
    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Documents whose body contains `filter`, newest first, at most `limit`.
    async fn find_many(
        &self,
        collection: &str,
        filter: &JsonValue,
        limit: usize,
    ) -> Result<Vec<Document>>;

    async fn collections(&self) -> Result<Vec<String>>;

    async fn close(&self);
}

pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_FIND_LIMIT)
}

/// Creation time for a new document: the body's own `created_at` when it is a
/// valid RFC 3339 string, otherwise now.
pub fn creation_time(body: &JsonValue) -> DateTime<Utc> {
    body.get("created_at")
        .and_then(JsonValue::as_str)
        .and_then(|raw| time::from_rfc3339(raw).ok())
        .unwrap_or_else(time::now)
}

/// JSON containment with the same rules as Postgres `@>`. A `null` filter
/// matches every body; nested `null`s only match a stored `null`.
pub fn json_contains(body: &JsonValue, filter: &JsonValue) -> bool {
    filter.is_null() || contains(body, filter)
}

fn contains(body: &JsonValue, filter: &JsonValue) -> bool {
    match (body, filter) {
        (JsonValue::Object(body), JsonValue::Object(filter)) => filter.iter().all(|(key, want)| {
            body.get(key)
                .map(|have| contains(have, want))
                .unwrap_or(false)
        }),
        (JsonValue::Array(body), JsonValue::Array(filter)) => filter
            .iter()
            .all(|want| body.iter().any(|have| contains(have, want))),
        (body, filter) => body == filter,
    }
}
