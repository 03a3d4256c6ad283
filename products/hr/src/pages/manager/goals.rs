use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "manager-goals";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    AtRisk,
    Behind,
    Completed,
}

impl Toned for GoalStatus {
    fn label(&self) -> &'static str {
        match self {
            GoalStatus::OnTrack => "On Track",
            GoalStatus::AtRisk => "At Risk",
            GoalStatus::Behind => "Behind",
            GoalStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            GoalStatus::OnTrack => StatusTone::Info,
            GoalStatus::AtRisk => StatusTone::Warning,
            GoalStatus::Behind => StatusTone::Danger,
            GoalStatus::Completed => StatusTone::Success,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct TeamGoal {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub progress: u32,
    pub due_date: NaiveDate,
    pub status: GoalStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct TeamGoalFilter {
    pub status: Option<GoalStatus>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct TeamGoalSummary {
    pub on_track: u32,
    pub at_risk: u32,
    pub behind: u32,
    pub completed: u32,
    pub average_progress: f64,
}

pub struct TeamGoalsPage;

impl Page for TeamGoalsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Team Goals",
        role: Role::Manager,
        description: "Quarterly objectives for the team",
    };

    type Record = TeamGoal;
    type Filter = TeamGoalFilter;
    type Summary = TeamGoalSummary;

    #[rustfmt::skip]
    fn records() -> Vec<TeamGoal> {
        vec![
            goal("GL-1", "Ship billing service v2", "Emily Davis", 70, ymd(2025, 3, 31), GoalStatus::OnTrack),
            goal("GL-2", "Reduce flaky test rate below 2%", "Grace Liu", 45, ymd(2025, 3, 31), GoalStatus::AtRisk),
            goal("GL-3", "Migrate CI to new runners", "Omar Haddad", 20, ymd(2025, 3, 15), GoalStatus::Behind),
            goal("GL-4", "Accessibility audit fixes", "Nina Petrova", 100, ymd(2025, 2, 28), GoalStatus::Completed),
            goal("GL-5", "Onboard two new engineers", "Ryan Foster", 60, ymd(2025, 4, 30), GoalStatus::OnTrack),
        ]
    }

    fn matches(filter: &TeamGoalFilter, record: &TeamGoal, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
    }

    fn badge(record: &TeamGoal, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[TeamGoal], _ctx: &PageContext) -> TeamGoalSummary {
        let count = |status| records.iter().filter(|g| g.status == status).count() as u32;
        TeamGoalSummary {
            on_track: count(GoalStatus::OnTrack),
            at_risk: count(GoalStatus::AtRisk),
            behind: count(GoalStatus::Behind),
            completed: count(GoalStatus::Completed),
            average_progress: average(records.iter().map(|g| g.progress)),
        }
    }

    fn sort(_filter: &TeamGoalFilter, records: &mut [TeamGoal]) {
        records.sort_by_key(|g| g.due_date);
    }
}

fn goal(
    id: &str,
    title: &str,
    owner: &str,
    progress: u32,
    due_date: NaiveDate,
    status: GoalStatus,
) -> TeamGoal {
    TeamGoal {
        id: id.into(),
        title: title.into(),
        owner: owner.into(),
        progress,
        due_date,
        status,
    }
}
