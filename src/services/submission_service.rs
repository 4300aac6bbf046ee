use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use utoipa::ToSchema;

use crate::database::store::{parse_id, DocumentStore, MAX_FIND_LIMIT};
use crate::error::Result;
use crate::models::application_plan::COLLECTION as PLAN_COLLECTION;
use crate::models::submission::{Submission, SubmissionRecord, SubmissionStatus, COLLECTION};
use crate::utils::time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    InvalidId,
    PlanNotFound,
    StoreError,
}

/// Result of sending a single requested application id.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Sent(Submission),
    Skipped {
        application_id: String,
        reason: SkipReason,
    },
}

#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn DocumentStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Records a simulated send for every known plan id and drops the rest.
    /// Sending the same plan twice records two submissions.
    pub async fn send(&self, application_ids: &[String]) -> Vec<Submission> {
        self.send_with_report(application_ids)
            .await
            .into_iter()
            .filter_map(|outcome| match outcome {
                SendOutcome::Sent(submission) => Some(submission),
                SendOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    /// One outcome per requested id, in request order. A failure on one id
    /// never aborts the rest of the batch.
    pub async fn send_with_report(&self, application_ids: &[String]) -> Vec<SendOutcome> {
        let mut outcomes = Vec::with_capacity(application_ids.len());
        for raw in application_ids {
            let outcome = match self.send_one(raw).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(application_id = raw.as_str(), error = %e, "Failed to send application");
                    skipped(raw, SkipReason::StoreError)
                }
            };
            outcomes.push(outcome);
        }

        let sent = outcomes
            .iter()
            .filter(|o| matches!(o, SendOutcome::Sent(_)))
            .count();
        tracing::info!(
            requested = application_ids.len(),
            sent,
            skipped = application_ids.len() - sent,
            "Applications sent"
        );
        outcomes
    }

    pub async fn list_sent(&self) -> Result<Vec<Submission>> {
        let docs = self
            .store
            .find_many(COLLECTION, &json!({}), MAX_FIND_LIMIT)
            .await?;
        docs.iter().map(Submission::from_document).collect()
    }

    async fn send_one(&self, raw: &str) -> Result<SendOutcome> {
        let Some(application_id) = parse_id(raw) else {
            tracing::debug!(application_id = raw, "Skipping malformed application id");
            return Ok(skipped(raw, SkipReason::InvalidId));
        };

        let Some(plan) = self
            .store
            .find_one(PLAN_COLLECTION, &application_id.to_string())
            .await?
        else {
            tracing::debug!(%application_id, "Skipping unknown application id");
            return Ok(skipped(raw, SkipReason::PlanNotFound));
        };

        let record = SubmissionRecord {
            application_id,
            board: plan
                .body
                .get("board")
                .and_then(JsonValue::as_str)
                .unwrap_or("unknown")
                .to_string(),
            resume_id: plan
                .body
                .get("resume_id")
                .and_then(JsonValue::as_str)
                .and_then(parse_id),
            status: SubmissionStatus::Sent,
            sent_at: time::now(),
        };
        let doc = self
            .store
            .insert(COLLECTION, serde_json::to_value(&record)?)
            .await?;
        Ok(SendOutcome::Sent(Submission::from_document(&doc)?))
    }
}

fn skipped(raw: &str, reason: SkipReason) -> SendOutcome {
    SendOutcome::Skipped {
        application_id: raw.to_string(),
        reason,
    }
}
