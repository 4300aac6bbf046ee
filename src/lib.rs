pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::database::{pool::create_pool, DocumentStore, MemoryDocumentStore, PgDocumentStore};
use crate::services::{
    plan_service::PlanService, resume_service::ResumeService,
    submission_service::SubmissionService,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub resume_service: ResumeService,
    pub plan_service: PlanService,
    pub submission_service: SubmissionService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let resume_service = ResumeService::new(store.clone());
        let plan_service = PlanService::new(store.clone(), resume_service.clone());
        let submission_service = SubmissionService::new(store.clone());

        Self {
            store,
            resume_service,
            plan_service,
            submission_service,
        }
    }
}

/// Opens the configured document store. Postgres stores are migrated before use.
pub async fn connect_store(config: &Config) -> error::Result<Arc<dyn DocumentStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = create_pool(config).await?;
            let store = PgDocumentStore::new(pool);
            store.migrate().await?;
            tracing::info!("Connected to Postgres document store");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on exit");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}
