use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value as JsonValue};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::store::{clamp_limit, creation_time, parse_id, Document, DocumentStore};
use crate::error::Result;

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    collection: String,
    body: JsonValue,
    created_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            collection: row.collection,
            body: row.body,
            created_at: row.created_at,
        }
    }
}

/// Documents kept as JSONB rows in a single `documents` table.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document> {
        let created_at = creation_time(&body);
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (id, collection, body, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, collection, body, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(collection)
        .bind(&body)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, collection, body, created_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &JsonValue,
        limit: usize,
    ) -> Result<Vec<Document>> {
        let filter = if filter.is_null() { json!({}) } else { filter.clone() };
        let limit = clamp_limit(limit) as i64;

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, collection, body, created_at
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at DESC, seq DESC
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(&filter)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn collections(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
