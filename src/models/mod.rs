pub mod application_plan;
pub mod resume;
pub mod submission;
