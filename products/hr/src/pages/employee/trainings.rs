use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "employee-trainings";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl Toned for CourseStatus {
    fn label(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "Not Started",
            CourseStatus::InProgress => "In Progress",
            CourseStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            CourseStatus::NotStarted => StatusTone::Neutral,
            CourseStatus::InProgress => StatusTone::Info,
            CourseStatus::Completed => StatusTone::Success,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AssignedCourse {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub progress: u32,
    pub due_date: NaiveDate,
    pub mandatory: bool,
    pub status: CourseStatus,
}

impl AssignedCourse {
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.status != CourseStatus::Completed && self.due_date < as_of
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct AssignedCourseFilter {
    pub status: Option<CourseStatus>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct AssignedCourseSummary {
    pub completed: u32,
    pub in_progress: u32,
    pub overdue: u32,
    pub average_progress: f64,
}

pub struct MyTrainingsPage;

impl Page for MyTrainingsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "My Trainings",
        role: Role::Employee,
        description: "Courses assigned to you",
    };

    type Record = AssignedCourse;
    type Filter = AssignedCourseFilter;
    type Summary = AssignedCourseSummary;

    #[rustfmt::skip]
    fn records() -> Vec<AssignedCourse> {
        vec![
            course("TR-101", "Information Security Awareness", "SecureLearn", 100, ymd(2025, 1, 31), true, CourseStatus::Completed),
            course("TR-102", "Workplace Harassment Prevention", "HR Academy", 100, ymd(2025, 2, 15), true, CourseStatus::Completed),
            course("TR-205", "Advanced Rust Patterns", "Internal", 65, ymd(2025, 4, 30), false, CourseStatus::InProgress),
            course("TR-118", "Data Privacy Essentials", "SecureLearn", 40, ymd(2025, 3, 10), true, CourseStatus::InProgress),
            course("TR-230", "Effective Code Review", "Internal", 0, ymd(2025, 5, 15), false, CourseStatus::NotStarted),
            course("TR-119", "Fire Safety Refresher", "Facilities", 0, ymd(2025, 3, 1), true, CourseStatus::NotStarted),
        ]
    }

    fn matches(filter: &AssignedCourseFilter, record: &AssignedCourse, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
    }

    fn badge(record: &AssignedCourse, ctx: &PageContext) -> Badge {
        if record.is_overdue(ctx.as_of) {
            Badge::new("Overdue", StatusTone::Danger)
        } else {
            record.status.badge()
        }
    }

    fn summarize(records: &[AssignedCourse], ctx: &PageContext) -> AssignedCourseSummary {
        let count = |status| records.iter().filter(|c| c.status == status).count() as u32;
        AssignedCourseSummary {
            completed: count(CourseStatus::Completed),
            in_progress: count(CourseStatus::InProgress),
            overdue: records.iter().filter(|c| c.is_overdue(ctx.as_of)).count() as u32,
            average_progress: average(records.iter().map(|c| c.progress)),
        }
    }

    fn sort(_filter: &AssignedCourseFilter, records: &mut [AssignedCourse]) {
        records.sort_by_key(|c| (c.status == CourseStatus::Completed, c.due_date));
    }
}

fn course(
    id: &str,
    title: &str,
    provider: &str,
    progress: u32,
    due_date: NaiveDate,
    mandatory: bool,
    status: CourseStatus,
) -> AssignedCourse {
    AssignedCourse {
        id: id.into(),
        title: title.into(),
        provider: provider.into(),
        progress,
        due_date,
        mandatory,
        status,
    }
}
