use async_graphql::{InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, Toned, days_inclusive, matches_choice, ymd},
    page::{Page, PageContext, PageInfo, Role},
    pages::leave::{LeaveStatus, LeaveType},
};

pub const SLUG: &str = "employee-leave-history";

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct LeaveRecord {
    pub id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub status: LeaveStatus,
    pub applied_on: NaiveDate,
    pub approver: Option<String>,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct LeaveHistoryFilter {
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct LeaveHistorySummary {
    pub requests: u32,
    pub days_taken: u32,
    pub pending: u32,
    pub rejected: u32,
}

pub struct LeaveHistoryPage;

impl Page for LeaveHistoryPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Leave History",
        role: Role::Employee,
        description: "Every leave request you have submitted",
    };

    type Record = LeaveRecord;
    type Filter = LeaveHistoryFilter;
    type Summary = LeaveHistorySummary;

    #[rustfmt::skip]
    fn records() -> Vec<LeaveRecord> {
        vec![
            record("LV-1001", LeaveType::Annual, ymd(2025, 3, 24), ymd(2025, 3, 28), LeaveStatus::Pending, ymd(2025, 3, 3), None),
            record("LV-0994", LeaveType::Sick, ymd(2025, 2, 10), ymd(2025, 2, 12), LeaveStatus::Approved, ymd(2025, 2, 10), Some("Michael Chen")),
            record("LV-0987", LeaveType::Personal, ymd(2025, 1, 17), ymd(2025, 1, 17), LeaveStatus::Approved, ymd(2025, 1, 6), Some("Michael Chen")),
            record("LV-0960", LeaveType::Annual, ymd(2024, 12, 23), ymd(2024, 12, 27), LeaveStatus::Approved, ymd(2024, 11, 15), Some("Michael Chen")),
            record("LV-0941", LeaveType::Unpaid, ymd(2024, 11, 4), ymd(2024, 11, 8), LeaveStatus::Rejected, ymd(2024, 10, 20), Some("Michael Chen")),
            record("LV-0932", LeaveType::Personal, ymd(2024, 10, 11), ymd(2024, 10, 11), LeaveStatus::Approved, ymd(2024, 10, 1), Some("Sarah Johnson")),
        ]
    }

    fn matches(filter: &LeaveHistoryFilter, record: &LeaveRecord, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_choice(filter.leave_type.as_ref(), &record.leave_type)
    }

    fn badge(record: &LeaveRecord, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[LeaveRecord], _ctx: &PageContext) -> LeaveHistorySummary {
        let count = |status| records.iter().filter(|r| r.status == status).count() as u32;
        LeaveHistorySummary {
            requests: records.len() as u32,
            days_taken: records
                .iter()
                .filter(|r| r.status == LeaveStatus::Approved)
                .map(|r| r.days)
                .sum(),
            pending: count(LeaveStatus::Pending),
            rejected: count(LeaveStatus::Rejected),
        }
    }

    fn sort(_filter: &LeaveHistoryFilter, records: &mut [LeaveRecord]) {
        records.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    }
}

fn record(
    id: &str,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: LeaveStatus,
    applied_on: NaiveDate,
    approver: Option<&str>,
) -> LeaveRecord {
    LeaveRecord {
        id: id.into(),
        leave_type,
        start_date,
        end_date,
        days: days_inclusive(start_date, end_date),
        status,
        applied_on,
        approver: approver.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view;

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    #[test]
    fn approved_filter_shows_only_approved() {
        let filter = LeaveHistoryFilter {
            status: Some(LeaveStatus::Approved),
            ..Default::default()
        };
        let page = view::<LeaveHistoryPage>(&filter, &ctx());
        let expected = LeaveHistoryPage::records()
            .into_iter()
            .filter(|r| r.status == LeaveStatus::Approved)
            .count();
        assert_eq!(page.records.len(), expected);
        assert!(page.records.iter().all(|r| r.status == LeaveStatus::Approved));
        assert!(page.badges.iter().all(|b| b.label == "Approved"));
    }

    #[test]
    fn days_taken_counts_approved_only() {
        let summary = LeaveHistoryPage::summarize(&LeaveHistoryPage::records(), &ctx());
        // 3 + 1 + 5 + 1
        assert_eq!(summary.days_taken, 10);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn type_and_status_combine() {
        let filter = LeaveHistoryFilter {
            status: Some(LeaveStatus::Approved),
            leave_type: Some(LeaveType::Personal),
        };
        let page = view::<LeaveHistoryPage>(&filter, &ctx());
        let ids: Vec<_> = page.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["LV-0987", "LV-0932"]);
    }
}
