pub mod benefits;
pub mod compliance;
pub mod departments;
pub mod payroll;
pub mod users;
