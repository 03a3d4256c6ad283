pub mod assessments;
pub mod programs;
pub mod sessions;
