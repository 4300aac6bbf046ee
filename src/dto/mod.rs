pub mod apply_dto;
pub mod resume_dto;
