//! Page modules grouped by the role whose dashboard shows them.

pub mod admin;
pub mod auditor;
pub mod employee;
pub mod hr;
pub mod leave;
pub mod manager;
pub mod trainer;
