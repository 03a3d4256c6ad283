pub mod attendance;
pub mod leave_balance;
pub mod leave_history;
pub mod payslips;
pub mod profile;
pub mod trainings;
