use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "hr-onboarding";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl Toned for OnboardingStatus {
    fn label(&self) -> &'static str {
        match self {
            OnboardingStatus::NotStarted => "Not Started",
            OnboardingStatus::InProgress => "In Progress",
            OnboardingStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            OnboardingStatus::NotStarted => StatusTone::Neutral,
            OnboardingStatus::InProgress => StatusTone::Info,
            OnboardingStatus::Completed => StatusTone::Success,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct OnboardingCase {
    pub id: String,
    pub employee: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub buddy: String,
    pub tasks_completed: u32,
    pub tasks_total: u32,
    pub status: OnboardingStatus,
}

impl OnboardingCase {
    pub fn progress(&self) -> f64 {
        percentage(f64::from(self.tasks_completed), f64::from(self.tasks_total))
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct OnboardingFilter {
    pub status: Option<OnboardingStatus>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct OnboardingSummary {
    pub in_progress: u32,
    pub completed: u32,
    pub not_started: u32,
    pub average_progress: f64,
}

pub struct OnboardingPage;

impl Page for OnboardingPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Onboarding",
        role: Role::Hr,
        description: "New hire checklists and buddies",
    };

    type Record = OnboardingCase;
    type Filter = OnboardingFilter;
    type Summary = OnboardingSummary;

    #[rustfmt::skip]
    fn records() -> Vec<OnboardingCase> {
        vec![
            case("ONB-01", "Carlos Rivera", "Account Executive", ymd(2025, 1, 6), "Jennifer Lee", 12, 12, OnboardingStatus::Completed),
            case("ONB-02", "Liam O'Connor", "Account Executive", ymd(2025, 3, 3), "Carlos Rivera", 7, 12, OnboardingStatus::InProgress),
            case("ONB-03", "Lucas Kim", "Product Designer", ymd(2025, 3, 10), "Emily Davis", 3, 10, OnboardingStatus::InProgress),
            case("ONB-04", "Sophia Nguyen", "Product Designer", ymd(2025, 4, 7), "Aisha Khan", 0, 10, OnboardingStatus::NotStarted),
        ]
    }

    fn matches(filter: &OnboardingFilter, record: &OnboardingCase, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
    }

    fn badge(record: &OnboardingCase, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[OnboardingCase], _ctx: &PageContext) -> OnboardingSummary {
        let count = |status| records.iter().filter(|c| c.status == status).count() as u32;
        OnboardingSummary {
            in_progress: count(OnboardingStatus::InProgress),
            completed: count(OnboardingStatus::Completed),
            not_started: count(OnboardingStatus::NotStarted),
            average_progress: average(records.iter().map(OnboardingCase::progress)),
        }
    }

    fn sort(_filter: &OnboardingFilter, records: &mut [OnboardingCase]) {
        records.sort_by_key(|c| c.start_date);
    }
}

#[allow(clippy::too_many_arguments)]
fn case(
    id: &str,
    employee: &str,
    position: &str,
    start_date: NaiveDate,
    buddy: &str,
    tasks_completed: u32,
    tasks_total: u32,
    status: OnboardingStatus,
) -> OnboardingCase {
    OnboardingCase {
        id: id.into(),
        employee: employee.into(),
        position: position.into(),
        start_date,
        buddy: buddy.into(),
        tasks_completed,
        tasks_total,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view;

    #[test]
    fn progress_is_task_ratio() {
        let cases = OnboardingPage::records();
        assert_eq!(cases[0].progress(), 100.0);
        assert_eq!(cases[1].progress(), 58.3);
        assert_eq!(cases[3].progress(), 0.0);
    }

    #[test]
    fn summary_counts_and_average() {
        let ctx = PageContext::new(ymd(2025, 3, 14));
        let summary = OnboardingPage::summarize(&OnboardingPage::records(), &ctx);
        assert_eq!(summary.in_progress, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.not_started, 1);
        // (100 + 58.3 + 30 + 0) / 4
        assert_eq!(summary.average_progress, 47.1);
    }

    #[test]
    fn in_progress_filter() {
        let ctx = PageContext::new(ymd(2025, 3, 14));
        let filter = OnboardingFilter {
            status: Some(OnboardingStatus::InProgress),
        };
        let page = view::<OnboardingPage>(&filter, &ctx);
        assert_eq!(page.shown, 2);
    }
}
