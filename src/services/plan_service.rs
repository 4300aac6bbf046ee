//! Application planning.
//!
//! Boards are walked in request order and each one gets an hour slot from the
//! requested window, cycling through the window's hours. Generation stops at
//! the daily cap.

use std::sync::Arc;

use crate::database::store::{parse_id, DocumentStore};
use crate::dto::apply_dto::PlanRequest;
use crate::error::{Error, Result};
use crate::models::application_plan::{ApplicationPlan, PlanRecord, PlanStatus, COLLECTION};
use crate::services::resume_service::ResumeService;
use crate::utils::time::format_slot;

pub const MIN_DAILY_CAP: i32 = 1;
pub const MAX_DAILY_CAP: i32 = 100;
const LAST_HOUR: i32 = 23;

/// Inclusive range of hours plans may be scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: u8,
    end: u8,
}

impl TimeWindow {
    /// Clamps both ends into `0..=23` and never lets `end` fall before `start`.
    /// A collapsed window is the single hour starting at `start`.
    pub fn clamped(start: i32, end: i32) -> Self {
        let start = start.clamp(0, LAST_HOUR);
        let end = end.clamp(start, LAST_HOUR);
        Self {
            start: start as u8,
            end: end as u8,
        }
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    /// Number of distinct hours in the window, at least one.
    pub fn span(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Hour for the `index`-th plan of a request.
    pub fn hour_for(&self, index: usize) -> u8 {
        self.start + (index % self.span()) as u8
    }

    pub fn slot_for(&self, index: usize) -> String {
        format_slot(self.hour_for(index), 0)
    }
}

#[derive(Clone)]
pub struct PlanService {
    store: Arc<dyn DocumentStore>,
    resumes: ResumeService,
}

impl PlanService {
    pub fn new(store: Arc<dyn DocumentStore>, resumes: ResumeService) -> Self {
        Self { store, resumes }
    }

    pub async fn plan(&self, payload: PlanRequest) -> Result<Vec<ApplicationPlan>> {
        let resume_id = parse_id(&payload.resume_id)
            .ok_or_else(|| Error::InvalidReference("Invalid resume id".into()))?;
        if !self.resumes.exists(resume_id).await? {
            return Err(Error::InvalidReference(format!(
                "Resume {} does not exist",
                resume_id
            )));
        }

        let cap = payload.daily_cap.clamp(MIN_DAILY_CAP, MAX_DAILY_CAP) as usize;
        let window = TimeWindow::clamped(payload.time_window_start, payload.time_window_end);
        let match_score = payload.min_score.clamp(0, 100);
        let paraphrase_level = payload.paraphrase_level.clamp(0, 100);

        let requested = payload.boards.len();
        let mut plans = Vec::with_capacity(cap.min(requested));
        for (index, board) in payload.boards.into_iter().take(cap).enumerate() {
            let record = PlanRecord {
                resume_id,
                board,
                planned_time: window.slot_for(index),
                match_score,
                paraphrase_level,
                status: PlanStatus::Planned,
            };
            let doc = self
                .store
                .insert(COLLECTION, serde_json::to_value(&record)?)
                .await?;
            plans.push(ApplicationPlan::from_document(&doc)?);
        }

        tracing::info!(
            resume_id = %resume_id,
            requested,
            planned = plans.len(),
            window_start = window.start(),
            window_end = window.end(),
            "Applications planned"
        );
        Ok(plans)
    }
}
