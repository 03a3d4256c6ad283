use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, matches_search, percentage},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "hr-performance";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    NotStarted,
    SelfReview,
    ManagerReview,
    Completed,
}

impl Toned for ReviewStatus {
    fn label(&self) -> &'static str {
        match self {
            ReviewStatus::NotStarted => "Not Started",
            ReviewStatus::SelfReview => "Self Review",
            ReviewStatus::ManagerReview => "Manager Review",
            ReviewStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ReviewStatus::NotStarted => StatusTone::Neutral,
            ReviewStatus::SelfReview | ReviewStatus::ManagerReview => StatusTone::Warning,
            ReviewStatus::Completed => StatusTone::Success,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct PerformanceReview {
    pub id: String,
    pub employee: String,
    pub reviewer: String,
    pub period: String,
    /// Final rating out of 5; only set once the review completes.
    pub rating: Option<f64>,
    pub status: ReviewStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct PerformanceFilter {
    pub status: Option<ReviewStatus>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct PerformanceSummary {
    pub reviews: u32,
    pub completed: u32,
    pub completion_rate: f64,
    pub average_rating: f64,
}

pub struct PerformancePage;

impl Page for PerformancePage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Performance Reviews",
        role: Role::Hr,
        description: "Review cycle progress and ratings",
    };

    type Record = PerformanceReview;
    type Filter = PerformanceFilter;
    type Summary = PerformanceSummary;

    #[rustfmt::skip]
    fn records() -> Vec<PerformanceReview> {
        vec![
            review("REV-01", "Emily Davis", "Michael Chen", Some(4.6), ReviewStatus::Completed),
            review("REV-02", "Carlos Rivera", "Jennifer Lee", None, ReviewStatus::ManagerReview),
            review("REV-03", "Aisha Khan", "Daniel Kim", Some(4.1), ReviewStatus::Completed),
            review("REV-04", "David Wilson", "Robert Taylor", None, ReviewStatus::NotStarted),
            review("REV-05", "Lisa Anderson", "Sarah Johnson", Some(3.9), ReviewStatus::Completed),
            review("REV-06", "Tom Becker", "Maria Garcia", None, ReviewStatus::SelfReview),
        ]
    }

    fn matches(filter: &PerformanceFilter, record: &PerformanceReview, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_search(
                filter.search.as_deref(),
                &[record.employee.as_str(), record.reviewer.as_str()],
            )
    }

    fn badge(record: &PerformanceReview, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[PerformanceReview], _ctx: &PageContext) -> PerformanceSummary {
        let completed = records
            .iter()
            .filter(|r| r.status == ReviewStatus::Completed)
            .count();
        PerformanceSummary {
            reviews: records.len() as u32,
            completed: completed as u32,
            completion_rate: percentage(completed as f64, records.len() as f64),
            average_rating: average(records.iter().filter_map(|r| r.rating)),
        }
    }
}

fn review(
    id: &str,
    employee: &str,
    reviewer: &str,
    rating: Option<f64>,
    status: ReviewStatus,
) -> PerformanceReview {
    PerformanceReview {
        id: id.into(),
        employee: employee.into(),
        reviewer: reviewer.into(),
        period: "H2 2024".into(),
        rating,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::ymd, page::view};

    #[test]
    fn average_only_counts_rated_reviews() {
        let ctx = PageContext::new(ymd(2025, 3, 14));
        let summary = PerformancePage::summarize(&PerformancePage::records(), &ctx);
        assert_eq!(summary.completed, 3);
        assert_eq!(summary.completion_rate, 50.0);
        assert_eq!(summary.average_rating, 4.2);
    }

    #[test]
    fn search_matches_reviewer() {
        let ctx = PageContext::new(ymd(2025, 3, 14));
        let filter = PerformanceFilter {
            search: Some("sarah".into()),
            ..Default::default()
        };
        let page = view::<PerformancePage>(&filter, &ctx);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].employee, "Lisa Anderson");
    }
}
