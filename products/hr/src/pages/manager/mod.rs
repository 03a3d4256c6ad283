pub mod goals;
pub mod leave_approvals;
pub mod team;
pub mod team_attendance;
