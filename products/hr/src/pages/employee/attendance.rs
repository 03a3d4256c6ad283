use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{MonthGrid, month_grid},
    common::{Badge, StatusTone, Toned, matches_choice, parse_month_key, percentage, ymd},
    error::HrResult,
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "employee-attendance";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Present,
    Late,
    Absent,
    OnLeave,
    Weekend,
}

impl Toned for DayStatus {
    fn label(&self) -> &'static str {
        match self {
            DayStatus::Present => "Present",
            DayStatus::Late => "Late",
            DayStatus::Absent => "Absent",
            DayStatus::OnLeave => "On Leave",
            DayStatus::Weekend => "Weekend",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            DayStatus::Present => StatusTone::Success,
            DayStatus::Late => StatusTone::Warning,
            DayStatus::Absent => StatusTone::Danger,
            DayStatus::OnLeave => StatusTone::Info,
            DayStatus::Weekend => StatusTone::Neutral,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub status: DayStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct AttendanceFilter {
    pub status: Option<DayStatus>,
    /// `YYYY-MM`; a malformed key matches no days.
    pub month: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub late: u32,
    pub absent: u32,
    pub on_leave: u32,
    /// Days attended over days expected at work (approved leave excluded).
    pub attendance_rate: f64,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub status: Option<DayStatus>,
    pub badge: Option<Badge>,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AttendanceCalendar {
    pub label: String,
    pub grid: MonthGrid,
    pub cells: Vec<CalendarCell>,
}

pub struct AttendancePage;

impl Page for AttendancePage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "My Attendance",
        role: Role::Employee,
        description: "Monthly attendance calendar",
    };

    type Record = AttendanceDay;
    type Filter = AttendanceFilter;
    type Summary = AttendanceSummary;

    fn records() -> Vec<AttendanceDay> {
        use DayStatus::{Absent as A, Late as L, OnLeave as V, Present as P};

        let february = [
            (3, P), (4, P), (5, L), (6, P), (7, P),
            (10, V), (11, V), (12, V), (13, P), (14, P),
            (17, P), (18, A), (19, P), (20, P), (21, L),
            (24, P), (25, P), (26, P), (27, P), (28, P),
        ];
        let march = [
            (3, P), (4, P), (5, P), (6, L), (7, P),
            (10, P), (11, P), (12, P), (13, P), (14, P),
        ];

        february
            .into_iter()
            .map(|(day, status)| (ymd(2025, 2, day), status))
            .chain(march.into_iter().map(|(day, status)| (ymd(2025, 3, day), status)))
            .map(|(date, status)| AttendanceDay { date, status })
            .collect()
    }

    fn matches(filter: &AttendanceFilter, record: &AttendanceDay, _ctx: &PageContext) -> bool {
        let in_month = match filter.month.as_deref() {
            None => true,
            Some(key) => parse_month_key(key)
                .is_some_and(|(y, m)| record.date.year() == y && record.date.month() == m),
        };
        in_month && matches_choice(filter.status.as_ref(), &record.status)
    }

    fn badge(record: &AttendanceDay, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[AttendanceDay], _ctx: &PageContext) -> AttendanceSummary {
        let count = |status| records.iter().filter(|r| r.status == status).count() as u32;
        let present = count(DayStatus::Present);
        let late = count(DayStatus::Late);
        let absent = count(DayStatus::Absent);
        AttendanceSummary {
            present,
            late,
            absent,
            on_leave: count(DayStatus::OnLeave),
            attendance_rate: percentage(
                f64::from(present + late),
                f64::from(present + late + absent),
            ),
        }
    }
}

/// The month grid with each recorded day's status filled in. Unrecorded
/// weekend days read as `Weekend`; other unrecorded days stay blank.
pub fn attendance_calendar(year: i32, month: u32) -> HrResult<AttendanceCalendar> {
    let grid = month_grid(year, month)?;
    let records = AttendancePage::records();
    let cells = grid
        .cells
        .iter()
        .map(|cell| {
            let status = cell.and_then(|day| {
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                records
                    .iter()
                    .find(|r| r.date == date)
                    .map(|r| r.status)
                    .or_else(|| {
                        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                            .then_some(DayStatus::Weekend)
                    })
            });
            CalendarCell {
                day: *cell,
                status,
                badge: status.map(|s| s.badge()),
            }
        })
        .collect();
    Ok(AttendanceCalendar {
        label: grid.month_label(),
        grid,
        cells,
    })
}
