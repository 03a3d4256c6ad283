pub mod access_reviews;
pub mod audit_log;
pub mod compliance_reports;
