use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, matches_search, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "manager-team-attendance";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Present,
    Late,
    Absent,
    Remote,
}

impl Toned for PresenceStatus {
    fn label(&self) -> &'static str {
        match self {
            PresenceStatus::Present => "Present",
            PresenceStatus::Late => "Late",
            PresenceStatus::Absent => "Absent",
            PresenceStatus::Remote => "Remote",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PresenceStatus::Present => StatusTone::Success,
            PresenceStatus::Late => StatusTone::Warning,
            PresenceStatus::Absent => StatusTone::Danger,
            PresenceStatus::Remote => StatusTone::Info,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct TeamAttendanceRecord {
    pub employee: String,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: PresenceStatus,
}

impl TeamAttendanceRecord {
    /// Hours between check-in and check-out, when both were recorded.
    pub fn hours_worked(&self) -> Option<f64> {
        let (start, end) = (self.check_in?, self.check_out?);
        let minutes = (end - start).num_minutes();
        (minutes > 0).then(|| crate::common::round1(minutes as f64 / 60.0))
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct TeamAttendanceFilter {
    pub status: Option<PresenceStatus>,
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct TeamAttendanceSummary {
    pub present: u32,
    pub late: u32,
    pub absent: u32,
    pub remote: u32,
    pub attendance_rate: f64,
}

pub struct TeamAttendancePage;

impl Page for TeamAttendancePage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Team Attendance",
        role: Role::Manager,
        description: "Daily check-ins for direct reports",
    };

    type Record = TeamAttendanceRecord;
    type Filter = TeamAttendanceFilter;
    type Summary = TeamAttendanceSummary;

    #[rustfmt::skip]
    fn records() -> Vec<TeamAttendanceRecord> {
        vec![
            row("Emily Davis", ymd(2025, 3, 13), Some((9, 2)), Some((17, 30)), PresenceStatus::Remote),
            row("Ryan Foster", ymd(2025, 3, 13), Some((8, 55)), Some((17, 10)), PresenceStatus::Present),
            row("Grace Liu", ymd(2025, 3, 13), Some((9, 41)), Some((18, 5)), PresenceStatus::Late),
            row("Omar Haddad", ymd(2025, 3, 13), None, None, PresenceStatus::Absent),
            row("Nina Petrova", ymd(2025, 3, 13), Some((8, 47)), Some((16, 58)), PresenceStatus::Remote),
            row("Emily Davis", ymd(2025, 3, 14), Some((8, 58)), None, PresenceStatus::Remote),
            row("Ryan Foster", ymd(2025, 3, 14), Some((9, 20)), None, PresenceStatus::Late),
            row("Grace Liu", ymd(2025, 3, 14), Some((8, 50)), None, PresenceStatus::Present),
            row("Omar Haddad", ymd(2025, 3, 14), None, None, PresenceStatus::Absent),
            row("Nina Petrova", ymd(2025, 3, 14), Some((9, 0)), None, PresenceStatus::Present),
        ]
    }

    fn matches(
        filter: &TeamAttendanceFilter,
        record: &TeamAttendanceRecord,
        _ctx: &PageContext,
    ) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_choice(filter.date.as_ref(), &record.date)
            && matches_search(filter.search.as_deref(), &[record.employee.as_str()])
    }

    fn badge(record: &TeamAttendanceRecord, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[TeamAttendanceRecord], _ctx: &PageContext) -> TeamAttendanceSummary {
        let count = |status| records.iter().filter(|r| r.status == status).count() as u32;
        let absent = count(PresenceStatus::Absent);
        let attended = records.len() as u32 - absent;
        TeamAttendanceSummary {
            present: count(PresenceStatus::Present),
            late: count(PresenceStatus::Late),
            absent,
            remote: count(PresenceStatus::Remote),
            attendance_rate: percentage(f64::from(attended), records.len() as f64),
        }
    }

    fn sort(_filter: &TeamAttendanceFilter, records: &mut [TeamAttendanceRecord]) {
        records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.employee.cmp(&b.employee)));
    }
}

fn row(
    employee: &str,
    date: NaiveDate,
    check_in: Option<(u32, u32)>,
    check_out: Option<(u32, u32)>,
    status: PresenceStatus,
) -> TeamAttendanceRecord {
    let time = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).expect("literal time");
    TeamAttendanceRecord {
        employee: employee.into(),
        date,
        check_in: check_in.map(time),
        check_out: check_out.map(time),
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
    fn attendance_rate_counts_everything_but_absences() {
        let summary = TeamAttendancePage::summarize(&TeamAttendancePage::records(), &ctx());
        assert_eq!(summary.absent, 2);
        assert_eq!(summary.present + summary.late + summary.remote, 8);
        assert_eq!(summary.attendance_rate, 80.0);
    }

    #[test]
    fn date_filter_limits_to_one_day() {
        let filter = TeamAttendanceFilter {
            date: Some(ymd(2025, 3, 14)),
            ..Default::default()
        };
        let page = view::<TeamAttendancePage>(&filter, &ctx());
        assert_eq!(page.shown, 5);
        assert_eq!(page.records[0].employee, "Emily Davis");
    }

    #[test]
    fn hours_need_both_punches() {
        let rows = TeamAttendancePage::records();
        assert_eq!(rows[1].hours_worked(), Some(8.3));
        assert_eq!(rows[3].hours_worked(), None);
        assert_eq!(rows[5].hours_worked(), None);
    }
}
