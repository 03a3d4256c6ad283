pub mod employees;
pub mod hiring;
pub mod job_postings;
pub mod onboarding;
pub mod performance;
pub mod predictions;
