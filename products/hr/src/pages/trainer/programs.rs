use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, matches_search, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "trainer-programs";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Technical,
    Leadership,
    Compliance,
    SoftSkills,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    Upcoming,
    Active,
    Completed,
}

impl Toned for ProgramStatus {
    fn label(&self) -> &'static str {
        match self {
            ProgramStatus::Upcoming => "Upcoming",
            ProgramStatus::Active => "Active",
            ProgramStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ProgramStatus::Upcoming => StatusTone::Info,
            ProgramStatus::Active => StatusTone::Success,
            ProgramStatus::Completed => StatusTone::Neutral,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct TrainingProgram {
    pub id: String,
    pub title: String,
    pub category: ProgramCategory,
    pub instructor: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub completed: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProgramStatus,
}

impl TrainingProgram {
    pub fn completion_rate(&self) -> f64 {
        percentage(f64::from(self.completed), f64::from(self.enrolled))
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct ProgramFilter {
    pub status: Option<ProgramStatus>,
    pub category: Option<ProgramCategory>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct ProgramSummary {
    pub programs: u32,
    pub total_enrolled: u32,
    pub fill_rate: f64,
    /// Mean of each program's completed/enrolled share.
    pub average_completion: f64,
    pub upcoming: u32,
}

pub struct ProgramsPage;

impl Page for ProgramsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Training Programs",
        role: Role::Trainer,
        description: "Programs you run and their enrolment",
    };

    type Record = TrainingProgram;
    type Filter = ProgramFilter;
    type Summary = ProgramSummary;

    #[rustfmt::skip]
    fn records() -> Vec<TrainingProgram> {
        vec![
            program("PRG-01", "Leadership Essentials", ProgramCategory::Leadership, "Patricia Moore", 18, 20, 9, ymd(2025, 2, 3), ymd(2025, 4, 25), ProgramStatus::Active),
            program("PRG-02", "Cloud Architecture Fundamentals", ProgramCategory::Technical, "Kevin Patel", 24, 30, 0, ymd(2025, 4, 7), ymd(2025, 5, 30), ProgramStatus::Upcoming),
            program("PRG-03", "Anti-Bribery and Corruption", ProgramCategory::Compliance, "Linda Garcia", 120, 150, 120, ymd(2025, 1, 6), ymd(2025, 1, 31), ProgramStatus::Completed),
            program("PRG-04", "Giving Effective Feedback", ProgramCategory::SoftSkills, "Patricia Moore", 15, 15, 6, ymd(2025, 3, 3), ymd(2025, 3, 28), ProgramStatus::Active),
            program("PRG-05", "Secure Coding Workshop", ProgramCategory::Technical, "Kevin Patel", 22, 25, 0, ymd(2025, 3, 24), ymd(2025, 4, 4), ProgramStatus::Upcoming),
        ]
    }

    fn matches(filter: &ProgramFilter, record: &TrainingProgram, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_choice(filter.category.as_ref(), &record.category)
            && matches_search(
                filter.search.as_deref(),
                &[record.title.as_str(), record.instructor.as_str()],
            )
    }

    fn badge(record: &TrainingProgram, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[TrainingProgram], _ctx: &PageContext) -> ProgramSummary {
        let total_enrolled = records.iter().map(|p| p.enrolled).sum();
        let capacity: u32 = records.iter().map(|p| p.capacity).sum();
        ProgramSummary {
            programs: records.len() as u32,
            total_enrolled,
            fill_rate: percentage(f64::from(total_enrolled), f64::from(capacity)),
            average_completion: average(records.iter().map(TrainingProgram::completion_rate)),
            upcoming: records
                .iter()
                .filter(|p| p.status == ProgramStatus::Upcoming)
                .count() as u32,
        }
    }

    fn sort(_filter: &ProgramFilter, records: &mut [TrainingProgram]) {
        records.sort_by_key(|p| p.start_date);
    }
}

#[allow(clippy::too_many_arguments)]
fn program(
    id: &str,
    title: &str,
    category: ProgramCategory,
    instructor: &str,
    enrolled: u32,
    capacity: u32,
    completed: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProgramStatus,
) -> TrainingProgram {
    TrainingProgram {
        id: id.into(),
        title: title.into(),
        category,
        instructor: instructor.into(),
        enrolled,
        capacity,
        completed,
        start_date,
        end_date,
        status,
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
    fn enrolment_aggregates() {
        let summary = ProgramsPage::summarize(&ProgramsPage::records(), &ctx());
        assert_eq!(summary.total_enrolled, 199);
        // 199 of 240 seats
        assert_eq!(summary.fill_rate, 82.9);
        // (50 + 0 + 100 + 40 + 0) / 5
        assert_eq!(summary.average_completion, 38.0);
        assert_eq!(summary.upcoming, 2);
    }

    #[test]
    fn category_and_instructor_search() {
        let filter = ProgramFilter {
            category: Some(ProgramCategory::Technical),
            search: Some("patel".into()),
            ..Default::default()
        };
        let page = view::<ProgramsPage>(&filter, &ctx());
        let ids: Vec<_> = page.records.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PRG-05", "PRG-02"]);
    }
}
