use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::application_plan::{ApplicationPlan, PlanStatus};
use crate::models::submission::{Submission, SubmissionStatus};
use crate::services::submission_service::{SendOutcome, SkipReason};

fn default_min_score() -> i32 {
    70
}

fn default_paraphrase_level() -> i32 {
    1
}

fn default_daily_cap() -> i32 {
    10
}

fn default_window_start() -> i32 {
    9
}

fn default_window_end() -> i32 {
    18
}

/// Numeric fields are clamped by the planner rather than rejected here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlanRequest {
    #[validate(length(max = 1000))]
    pub boards: Vec<String>,
    #[validate(length(min = 1))]
    pub resume_id: String,
    #[serde(default = "default_min_score")]
    pub min_score: i32,
    #[serde(default = "default_paraphrase_level")]
    pub paraphrase_level: i32,
    #[serde(default = "default_daily_cap")]
    pub daily_cap: i32,
    #[serde(default = "default_window_start")]
    pub time_window_start: i32,
    #[serde(default = "default_window_end")]
    pub time_window_end: i32,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            boards: Vec::new(),
            resume_id: String::new(),
            min_score: default_min_score(),
            paraphrase_level: default_paraphrase_level(),
            daily_cap: default_daily_cap(),
            time_window_start: default_window_start(),
            time_window_end: default_window_end(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanResponse {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub board: String,
    pub planned_time: String,
    pub match_score: i32,
    pub paraphrase_level: i32,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ApplicationPlan> for PlanResponse {
    fn from(value: ApplicationPlan) -> Self {
        Self {
            id: value.id,
            resume_id: value.resume_id,
            board: value.board,
            planned_time: value.planned_time,
            match_score: value.match_score,
            paraphrase_level: value.paraphrase_level,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

/// Body of the send routes. Parsed by hand so a non-list `application_ids`
/// is a 400 rather than an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SendRequest {
    pub application_ids: Vec<String>,
}

impl SendRequest {
    pub fn from_json(body: JsonValue) -> Result<Self> {
        let ids = match body {
            JsonValue::Object(mut map) => map.remove("application_ids"),
            _ => return Err(Error::BadRequest("Request body must be an object".into())),
        };

        let application_ids = match ids {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    JsonValue::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            Some(_) => {
                return Err(Error::BadRequest(
                    "application_ids must be a list".into(),
                ))
            }
        };

        Ok(Self { application_ids })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub application_id: Uuid,
    pub board: String,
    pub resume_id: Option<Uuid>,
    pub status: SubmissionStatus,
    pub sent_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(value: Submission) -> Self {
        Self {
            id: value.id,
            application_id: value.application_id,
            board: value.board,
            resume_id: value.resume_id,
            status: value.status,
            sent_at: value.sent_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SendReportItem {
    Sent {
        submission: SubmissionResponse,
    },
    Skipped {
        application_id: String,
        reason: SkipReason,
    },
}

impl From<SendOutcome> for SendReportItem {
    fn from(value: SendOutcome) -> Self {
        match value {
            SendOutcome::Sent(submission) => Self::Sent {
                submission: submission.into(),
            },
            SendOutcome::Skipped {
                application_id,
                reason,
            } => Self::Skipped {
                application_id,
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_request_fills_defaults() {
        let req: PlanRequest =
            serde_json::from_value(json!({"boards": ["LinkedIn"], "resume_id": "abc"})).unwrap();
        assert_eq!(req.min_score, 70);
        assert_eq!(req.paraphrase_level, 1);
        assert_eq!(req.daily_cap, 10);
        assert_eq!((req.time_window_start, req.time_window_end), (9, 18));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn plan_request_requires_resume_id() {
        let req: PlanRequest =
            serde_json::from_value(json!({"boards": [], "resume_id": ""})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn send_request_accepts_lists_and_missing_ids() {
        let req = SendRequest::from_json(json!({"application_ids": ["a", 7]})).unwrap();
        assert_eq!(req.application_ids, vec!["a".to_string(), "7".to_string()]);

        let req = SendRequest::from_json(json!({})).unwrap();
        assert!(req.application_ids.is_empty());

        let req = SendRequest::from_json(json!({"application_ids": null})).unwrap();
        assert!(req.application_ids.is_empty());
    }

    #[test]
    fn send_request_rejects_non_lists() {
        for body in [json!({"application_ids": "abc"}), json!([1, 2]), json!("x")] {
            assert!(matches!(
                SendRequest::from_json(body).unwrap_err(),
                Error::BadRequest(_)
            ));
        }
    }

    #[test]
    fn report_items_are_tagged() {
        let item = SendReportItem::from(SendOutcome::Skipped {
            application_id: "bad".into(),
            reason: SkipReason::InvalidId,
        });
        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({"outcome": "skipped", "application_id": "bad", "reason": "invalid_id"})
        );
    }
}
