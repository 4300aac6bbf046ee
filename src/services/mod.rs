pub mod plan_service;
pub mod resume_service;
pub mod submission_service;
