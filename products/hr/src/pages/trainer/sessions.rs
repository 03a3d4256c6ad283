use async_graphql::{InputObject, SimpleObject};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, deserialize_flag, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "trainer-sessions";

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct TrainingSession {
    pub id: String,
    pub program: String,
    pub topic: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub location: String,
    pub attendees: u32,
}

impl TrainingSession {
    pub fn is_upcoming(&self, as_of: NaiveDate) -> bool {
        self.date >= as_of
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct SessionFilter {
    pub program: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub upcoming_only: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct SessionSummary {
    pub sessions: u32,
    pub upcoming: u32,
    pub total_attendees: u32,
}

pub struct SessionsPage;

impl Page for SessionsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Session Schedule",
        role: Role::Trainer,
        description: "Classroom and virtual sessions",
    };

    type Record = TrainingSession;
    type Filter = SessionFilter;
    type Summary = SessionSummary;

    #[rustfmt::skip]
    fn records() -> Vec<TrainingSession> {
        vec![
            session("SES-108", "Leadership Essentials", "Coaching conversations", ymd(2025, 3, 18), (10, 0), 120, "Room 4B", 18),
            session("SES-104", "Giving Effective Feedback", "Feedback models", ymd(2025, 3, 5), (14, 0), 90, "Virtual", 15),
            session("SES-109", "Giving Effective Feedback", "Role-play practice", ymd(2025, 3, 18), (9, 0), 90, "Room 2A", 14),
            session("SES-101", "Leadership Essentials", "Leading through change", ymd(2025, 2, 11), (10, 0), 120, "Room 4B", 17),
            session("SES-112", "Secure Coding Workshop", "Threat modelling", ymd(2025, 3, 24), (13, 30), 180, "Lab 1", 22),
            session("SES-106", "Leadership Essentials", "Delegation", ymd(2025, 3, 14), (10, 0), 120, "Room 4B", 16),
        ]
    }

    fn matches(filter: &SessionFilter, record: &TrainingSession, ctx: &PageContext) -> bool {
        let program = filter
            .program
            .as_deref()
            .is_none_or(|p| p.eq_ignore_ascii_case(&record.program));
        let timing = !filter.upcoming_only.unwrap_or(false) || record.is_upcoming(ctx.as_of);
        program && timing
    }

    fn badge(record: &TrainingSession, ctx: &PageContext) -> Badge {
        if record.is_upcoming(ctx.as_of) {
            Badge::new("Upcoming", StatusTone::Info)
        } else {
            Badge::new("Completed", StatusTone::Neutral)
        }
    }

    fn summarize(records: &[TrainingSession], ctx: &PageContext) -> SessionSummary {
        SessionSummary {
            sessions: records.len() as u32,
            upcoming: records.iter().filter(|s| s.is_upcoming(ctx.as_of)).count() as u32,
            total_attendees: records.iter().map(|s| s.attendees).sum(),
        }
    }

    fn sort(_filter: &SessionFilter, records: &mut [TrainingSession]) {
        records.sort_by_key(|s| (s.date, s.start_time));
    }
}

#[allow(clippy::too_many_arguments)]
fn session(
    id: &str,
    program: &str,
    topic: &str,
    date: NaiveDate,
    (hour, minute): (u32, u32),
    duration_minutes: u32,
    location: &str,
    attendees: u32,
) -> TrainingSession {
    TrainingSession {
        id: id.into(),
        program: program.into(),
        topic: topic.into(),
        date,
        start_time: NaiveTime::from_hms_opt(hour, minute, 0).expect("literal time"),
        duration_minutes,
        location: location.into(),
        attendees,
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
    fn sorted_by_date_then_time() {
        let page = view::<SessionsPage>(&SessionFilter::default(), &ctx());
        let ids: Vec<_> = page.records.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["SES-101", "SES-104", "SES-106", "SES-109", "SES-108", "SES-112"]);
    }

    #[test]
    fn upcoming_includes_today() {
        let filter = SessionFilter {
            upcoming_only: Some(true),
            ..Default::default()
        };
        let page = view::<SessionsPage>(&filter, &ctx());
        assert_eq!(page.shown, 4);
        assert!(page.badges.iter().all(|b| b.label == "Upcoming"));
        assert_eq!(page.summary.upcoming, 4);
        assert_eq!(page.summary.total_attendees, 102);
    }

    #[test]
    fn program_filter_ignores_case() {
        let filter = SessionFilter {
            program: Some("leadership essentials".into()),
            upcoming_only: Some(false),
        };
        assert_eq!(view::<SessionsPage>(&filter, &ctx()).shown, 3);
    }
}
