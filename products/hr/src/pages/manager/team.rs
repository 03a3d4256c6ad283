use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, matches_search},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "manager-team";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    InOffice,
    Remote,
    OnLeave,
}

impl Toned for WorkStatus {
    fn label(&self) -> &'static str {
        match self {
            WorkStatus::InOffice => "In Office",
            WorkStatus::Remote => "Remote",
            WorkStatus::OnLeave => "On Leave",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            WorkStatus::InOffice => StatusTone::Success,
            WorkStatus::Remote => StatusTone::Info,
            WorkStatus::OnLeave => StatusTone::Warning,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: WorkStatus,
    /// Latest performance score, 0-100.
    pub performance: u32,
    pub active_projects: u32,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct TeamFilter {
    pub status: Option<WorkStatus>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct TeamSummary {
    pub team_size: u32,
    pub on_leave: u32,
    pub average_performance: f64,
    pub active_projects: u32,
}

pub struct TeamPage;

impl Page for TeamPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "My Team",
        role: Role::Manager,
        description: "Direct reports, where they are working today and how they are doing",
    };

    type Record = TeamMember;
    type Filter = TeamFilter;
    type Summary = TeamSummary;

    #[rustfmt::skip]
    fn records() -> Vec<TeamMember> {
        vec![
            member("EMP-003", "Emily Davis", "Senior Software Engineer", WorkStatus::Remote, 92, 3),
            member("EMP-010", "Ryan Foster", "Software Engineer", WorkStatus::InOffice, 81, 2),
            member("EMP-011", "Grace Liu", "QA Engineer", WorkStatus::InOffice, 77, 2),
            member("EMP-012", "Omar Haddad", "DevOps Engineer", WorkStatus::OnLeave, 85, 1),
            member("EMP-013", "Nina Petrova", "Frontend Engineer", WorkStatus::Remote, 88, 3),
        ]
    }

    fn matches(filter: &TeamFilter, record: &TeamMember, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_search(
                filter.search.as_deref(),
                &[record.name.as_str(), record.role.as_str()],
            )
    }

    fn badge(record: &TeamMember, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[TeamMember], _ctx: &PageContext) -> TeamSummary {
        TeamSummary {
            team_size: records.len() as u32,
            on_leave: records
                .iter()
                .filter(|m| m.status == WorkStatus::OnLeave)
                .count() as u32,
            average_performance: average(records.iter().map(|m| m.performance)),
            active_projects: records.iter().map(|m| m.active_projects).sum(),
        }
    }
}

fn member(
    id: &str,
    name: &str,
    role: &str,
    status: WorkStatus,
    performance: u32,
    active_projects: u32,
) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        status,
        performance,
        active_projects,
    }
}
