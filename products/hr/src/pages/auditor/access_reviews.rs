use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, matches_search, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "auditor-access-reviews";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessReviewStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl Toned for AccessReviewStatus {
    fn label(&self) -> &'static str {
        match self {
            AccessReviewStatus::Scheduled => "Scheduled",
            AccessReviewStatus::InProgress => "In Progress",
            AccessReviewStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            AccessReviewStatus::Scheduled => StatusTone::Neutral,
            AccessReviewStatus::InProgress => StatusTone::Info,
            AccessReviewStatus::Completed => StatusTone::Success,
        }
    }
}

/// Periodic recertification of who can reach a system.
#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AccessReview {
    pub id: String,
    pub system: String,
    pub reviewer: String,
    pub users_reviewed: u32,
    pub exceptions: u32,
    pub due_date: NaiveDate,
    pub status: AccessReviewStatus,
}

impl AccessReview {
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.status != AccessReviewStatus::Completed && self.due_date < as_of
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct AccessReviewFilter {
    pub status: Option<AccessReviewStatus>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct AccessReviewSummary {
    pub completed: u32,
    pub exceptions: u32,
    pub overdue: u32,
    pub users_reviewed: u32,
}

pub struct AccessReviewsPage;

impl Page for AccessReviewsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Access Reviews",
        role: Role::Auditor,
        description: "User access recertification campaigns",
    };

    type Record = AccessReview;
    type Filter = AccessReviewFilter;
    type Summary = AccessReviewSummary;

    #[rustfmt::skip]
    fn records() -> Vec<AccessReview> {
        vec![
            review("AR-31", "Payroll System", "Robert Taylor", 18, 2, ymd(2025, 2, 28), AccessReviewStatus::Completed),
            review("AR-32", "HRIS", "Robert Taylor", 42, 3, ymd(2025, 3, 7), AccessReviewStatus::InProgress),
            review("AR-33", "Source Control", "Jennifer Wu", 65, 0, ymd(2025, 3, 21), AccessReviewStatus::InProgress),
            review("AR-34", "Finance ERP", "Jennifer Wu", 24, 1, ymd(2025, 1, 31), AccessReviewStatus::Completed),
            review("AR-35", "Badge Access", "Robert Taylor", 0, 0, ymd(2025, 4, 15), AccessReviewStatus::Scheduled),
        ]
    }

    fn matches(filter: &AccessReviewFilter, record: &AccessReview, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_search(
                filter.search.as_deref(),
                &[record.system.as_str(), record.reviewer.as_str()],
            )
    }

    fn badge(record: &AccessReview, ctx: &PageContext) -> Badge {
        if record.is_overdue(ctx.as_of) {
            Badge::new("Overdue", StatusTone::Danger)
        } else {
            record.status.badge()
        }
    }

    fn summarize(records: &[AccessReview], ctx: &PageContext) -> AccessReviewSummary {
        AccessReviewSummary {
            completed: records
                .iter()
                .filter(|r| r.status == AccessReviewStatus::Completed)
                .count() as u32,
            exceptions: records.iter().map(|r| r.exceptions).sum(),
            overdue: records.iter().filter(|r| r.is_overdue(ctx.as_of)).count() as u32,
            users_reviewed: records.iter().map(|r| r.users_reviewed).sum(),
        }
    }

    fn sort(_filter: &AccessReviewFilter, records: &mut [AccessReview]) {
        records.sort_by_key(|r| r.due_date);
    }
}

fn review(
    id: &str,
    system: &str,
    reviewer: &str,
    users_reviewed: u32,
    exceptions: u32,
    due_date: NaiveDate,
    status: AccessReviewStatus,
) -> AccessReview {
    AccessReview {
        id: id.into(),
        system: system.into(),
        reviewer: reviewer.into(),
        users_reviewed,
        exceptions,
        due_date,
        status,
    }
}
