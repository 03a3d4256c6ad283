use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, matches_search, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "hr-job-postings";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    Open,
    Draft,
    Closed,
}

impl Toned for PostingStatus {
    fn label(&self) -> &'static str {
        match self {
            PostingStatus::Open => "Open",
            PostingStatus::Draft => "Draft",
            PostingStatus::Closed => "Closed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PostingStatus::Open => StatusTone::Success,
            PostingStatus::Draft => StatusTone::Neutral,
            PostingStatus::Closed => StatusTone::Danger,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub applicants: u32,
    pub status: PostingStatus,
    pub posted_on: NaiveDate,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct JobPostingFilter {
    pub status: Option<PostingStatus>,
    pub department: Option<String>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct JobPostingSummary {
    pub open_postings: u32,
    pub total_applicants: u32,
    pub average_applicants: f64,
}

pub struct JobPostingsPage;

impl Page for JobPostingsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Job Postings",
        role: Role::Hr,
        description: "Published and draft requisitions with applicant counts",
    };

    type Record = JobPosting;
    type Filter = JobPostingFilter;
    type Summary = JobPostingSummary;

    #[rustfmt::skip]
    fn records() -> Vec<JobPosting> {
        vec![
            posting("JOB-11", "Senior Software Engineer", "Engineering", "San Francisco", EmploymentType::FullTime, 46, PostingStatus::Open, ymd(2025, 1, 20)),
            posting("JOB-12", "Product Designer", "Engineering", "Remote", EmploymentType::FullTime, 31, PostingStatus::Open, ymd(2025, 1, 8)),
            posting("JOB-13", "Account Executive", "Sales", "Austin", EmploymentType::FullTime, 27, PostingStatus::Closed, ymd(2024, 11, 18)),
            posting("JOB-14", "Data Analyst", "Finance", "Chicago", EmploymentType::Contract, 19, PostingStatus::Open, ymd(2025, 2, 12)),
            posting("JOB-15", "HR Generalist", "Human Resources", "New York", EmploymentType::FullTime, 12, PostingStatus::Open, ymd(2025, 2, 26)),
            posting("JOB-16", "Marketing Intern", "Marketing", "Remote", EmploymentType::Internship, 0, PostingStatus::Draft, ymd(2025, 3, 11)),
        ]
    }

    fn matches(filter: &JobPostingFilter, record: &JobPosting, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_choice(filter.department.as_ref(), &record.department)
            && matches_search(
                filter.search.as_deref(),
                &[record.title.as_str(), record.location.as_str()],
            )
    }

    fn badge(record: &JobPosting, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[JobPosting], _ctx: &PageContext) -> JobPostingSummary {
        // drafts have not been published and never collect applicants
        let published = records.iter().filter(|p| p.status != PostingStatus::Draft);
        JobPostingSummary {
            open_postings: records
                .iter()
                .filter(|p| p.status == PostingStatus::Open)
                .count() as u32,
            total_applicants: records.iter().map(|p| p.applicants).sum(),
            average_applicants: average(published.map(|p| p.applicants)),
        }
    }

    fn sort(_filter: &JobPostingFilter, records: &mut [JobPosting]) {
        records.sort_by(|a, b| b.posted_on.cmp(&a.posted_on));
    }
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    department: &str,
    location: &str,
    employment_type: EmploymentType,
    applicants: u32,
    status: PostingStatus,
    posted_on: NaiveDate,
) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: title.into(),
        department: department.into(),
        location: location.into(),
        employment_type,
        applicants,
        status,
        posted_on,
    }
}
