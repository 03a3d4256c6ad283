use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, matches_search, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "hr-hiring";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl HiringStage {
    /// Pipeline columns, left to right.
    pub const ORDER: [HiringStage; 6] = [
        HiringStage::Applied,
        HiringStage::Screening,
        HiringStage::Interview,
        HiringStage::Offer,
        HiringStage::Hired,
        HiringStage::Rejected,
    ];
}

impl Toned for HiringStage {
    fn label(&self) -> &'static str {
        match self {
            HiringStage::Applied => "Applied",
            HiringStage::Screening => "Screening",
            HiringStage::Interview => "Interview",
            HiringStage::Offer => "Offer",
            HiringStage::Hired => "Hired",
            HiringStage::Rejected => "Rejected",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            HiringStage::Applied | HiringStage::Screening => StatusTone::Neutral,
            HiringStage::Interview => StatusTone::Info,
            HiringStage::Offer => StatusTone::Warning,
            HiringStage::Hired => StatusTone::Success,
            HiringStage::Rejected => StatusTone::Danger,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub position: String,
    pub stage: HiringStage,
    pub source: String,
    /// Interviewer rating out of 5.
    pub rating: f64,
    pub applied_on: NaiveDate,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct CandidateFilter {
    pub stage: Option<HiringStage>,
    pub position: Option<String>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct StageCount {
    pub stage: HiringStage,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct HiringSummary {
    pub candidates: u32,
    pub stages: Vec<StageCount>,
    pub hire_rate: f64,
    pub average_rating: f64,
}

pub struct HiringPage;

impl Page for HiringPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Hiring Pipeline",
        role: Role::Hr,
        description: "Candidates by stage across open requisitions",
    };

    type Record = Candidate;
    type Filter = CandidateFilter;
    type Summary = HiringSummary;

    #[rustfmt::skip]
    fn records() -> Vec<Candidate> {
        vec![
            candidate("CAN-201", "Olivia Martinez", "Senior Software Engineer", HiringStage::Interview, "LinkedIn", 4.5, ymd(2025, 2, 3)),
            candidate("CAN-202", "Ethan Wright", "Senior Software Engineer", HiringStage::Screening, "Referral", 3.8, ymd(2025, 2, 17)),
            candidate("CAN-203", "Sophia Nguyen", "Product Designer", HiringStage::Offer, "Dribbble", 4.8, ymd(2025, 1, 22)),
            candidate("CAN-204", "Liam O'Connor", "Account Executive", HiringStage::Hired, "Indeed", 4.2, ymd(2024, 12, 9)),
            candidate("CAN-205", "Mia Robinson", "Account Executive", HiringStage::Rejected, "Indeed", 2.9, ymd(2025, 1, 14)),
            candidate("CAN-206", "Noah Patel", "Data Analyst", HiringStage::Applied, "Company Website", 3.5, ymd(2025, 3, 10)),
            candidate("CAN-207", "Ava Thompson", "Data Analyst", HiringStage::Interview, "LinkedIn", 4.1, ymd(2025, 2, 25)),
            candidate("CAN-208", "Lucas Kim", "Product Designer", HiringStage::Hired, "Referral", 4.6, ymd(2024, 11, 28)),
            candidate("CAN-209", "Isabella Rossi", "HR Generalist", HiringStage::Applied, "Company Website", 3.2, ymd(2025, 3, 12)),
            candidate("CAN-210", "Mason Clark", "HR Generalist", HiringStage::Screening, "LinkedIn", 3.9, ymd(2025, 3, 4)),
        ]
    }

    fn matches(filter: &CandidateFilter, record: &Candidate, _ctx: &PageContext) -> bool {
        matches_choice(filter.stage.as_ref(), &record.stage)
            && matches_choice(filter.position.as_ref(), &record.position)
            && matches_search(
                filter.search.as_deref(),
                &[record.name.as_str(), record.source.as_str()],
            )
    }

    fn badge(record: &Candidate, _ctx: &PageContext) -> Badge {
        record.stage.badge()
    }

    fn summarize(records: &[Candidate], _ctx: &PageContext) -> HiringSummary {
        let stages: Vec<_> = HiringStage::ORDER
            .into_iter()
            .map(|stage| StageCount {
                stage,
                count: records.iter().filter(|c| c.stage == stage).count() as u32,
            })
            .collect();
        let hired = records
            .iter()
            .filter(|c| c.stage == HiringStage::Hired)
            .count();
        HiringSummary {
            candidates: records.len() as u32,
            stages,
            hire_rate: percentage(hired as f64, records.len() as f64),
            average_rating: average(records.iter().map(|c| c.rating)),
        }
    }

    fn sort(_filter: &CandidateFilter, records: &mut [Candidate]) {
        records.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
    }
}

fn candidate(
    id: &str,
    name: &str,
    position: &str,
    stage: HiringStage,
    source: &str,
    rating: f64,
    applied_on: NaiveDate,
) -> Candidate {
    Candidate {
        id: id.into(),
        name: name.into(),
        position: position.into(),
        stage,
        source: source.into(),
        rating,
        applied_on,
    }
}
