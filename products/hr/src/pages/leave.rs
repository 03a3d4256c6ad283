//! Leave vocabulary shared by the employee and manager pages.

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::common::{StatusTone, Toned};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Parental,
    Unpaid,
}

impl LeaveType {
    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Personal => "Personal Leave",
            LeaveType::Parental => "Parental Leave",
            LeaveType::Unpaid => "Unpaid Leave",
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl Toned for LeaveStatus {
    fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            LeaveStatus::Pending => StatusTone::Warning,
            LeaveStatus::Approved => StatusTone::Success,
            LeaveStatus::Rejected => StatusTone::Danger,
        }
    }
}
