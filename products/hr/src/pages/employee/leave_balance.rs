use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, percentage},
    page::{Page, PageContext, PageInfo, Role},
    pages::leave::LeaveType,
};

pub const SLUG: &str = "employee-leave-balance";

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct LeaveBalance {
    pub leave_type: LeaveType,
    pub entitled: u32,
    pub used: u32,
    pub pending: u32,
    pub available: u32,
}

impl LeaveBalance {
    fn new(leave_type: LeaveType, entitled: u32, used: u32, pending: u32) -> Self {
        Self {
            leave_type,
            entitled,
            used,
            pending,
            available: entitled.saturating_sub(used + pending),
        }
    }
}

/// How much of an allowance is left, shown as the row badge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Remaining {
    Plenty,
    Low,
    Exhausted,
}

impl Remaining {
    fn of(balance: &LeaveBalance) -> Self {
        if balance.available == 0 {
            Remaining::Exhausted
        } else if balance.available * 4 <= balance.entitled {
            Remaining::Low
        } else {
            Remaining::Plenty
        }
    }
}

impl Toned for Remaining {
    fn label(&self) -> &'static str {
        match self {
            Remaining::Plenty => "Available",
            Remaining::Low => "Running Low",
            Remaining::Exhausted => "Exhausted",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Remaining::Plenty => StatusTone::Success,
            Remaining::Low => StatusTone::Warning,
            Remaining::Exhausted => StatusTone::Danger,
        }
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct LeaveBalanceFilter {
    pub leave_type: Option<LeaveType>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct LeaveBalanceSummary {
    pub total_entitled: u32,
    pub total_used: u32,
    pub total_pending: u32,
    pub total_available: u32,
    pub utilization: f64,
}

pub struct LeaveBalancePage;

impl Page for LeaveBalancePage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Leave Balance",
        role: Role::Employee,
        description: "Remaining days per leave type this year",
    };

    type Record = LeaveBalance;
    type Filter = LeaveBalanceFilter;
    type Summary = LeaveBalanceSummary;

    fn records() -> Vec<LeaveBalance> {
        vec![
            LeaveBalance::new(LeaveType::Annual, 20, 8, 5),
            LeaveBalance::new(LeaveType::Sick, 10, 3, 0),
            LeaveBalance::new(LeaveType::Personal, 3, 2, 1),
            LeaveBalance::new(LeaveType::Parental, 60, 0, 0),
            LeaveBalance::new(LeaveType::Unpaid, 5, 4, 0),
        ]
    }

    fn matches(filter: &LeaveBalanceFilter, record: &LeaveBalance, _ctx: &PageContext) -> bool {
        matches_choice(filter.leave_type.as_ref(), &record.leave_type)
    }

    fn badge(record: &LeaveBalance, _ctx: &PageContext) -> Badge {
        Remaining::of(record).badge()
    }

    fn summarize(records: &[LeaveBalance], _ctx: &PageContext) -> LeaveBalanceSummary {
        let total_entitled = records.iter().map(|b| b.entitled).sum();
        let total_used = records.iter().map(|b| b.used).sum();
        LeaveBalanceSummary {
            total_entitled,
            total_used,
            total_pending: records.iter().map(|b| b.pending).sum(),
            total_available: records.iter().map(|b| b.available).sum(),
            utilization: percentage(f64::from(total_used), f64::from(total_entitled)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::ymd, page::view};

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    #[test]
    fn available_subtracts_used_and_pending() {
        let balances = LeaveBalancePage::records();
        assert_eq!(balances[0].available, 7);
        assert_eq!(balances[2].available, 0);
        assert!(balances
            .iter()
            .all(|b| b.available + b.used + b.pending <= b.entitled || b.available == 0));
    }

    #[test]
    fn saturates_instead_of_going_negative() {
        let balance = LeaveBalance::new(LeaveType::Personal, 2, 2, 1);
        assert_eq!(balance.available, 0);
    }

    #[test]
    fn summary_totals() {
        let summary = LeaveBalancePage::summarize(&LeaveBalancePage::records(), &ctx());
        assert_eq!(summary.total_entitled, 98);
        assert_eq!(summary.total_used, 17);
        assert_eq!(summary.total_available, 75);
        assert_eq!(summary.utilization, 17.3);
    }

    #[test]
    fn badges_reflect_remaining_days() {
        let page = view::<LeaveBalancePage>(&LeaveBalanceFilter::default(), &ctx());
        let labels: Vec<_> = page.badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Available", "Available", "Exhausted", "Available", "Running Low"]
        );
    }
}
