use chrono::{Datelike, NaiveDate};

/// Builds a date for the literal datasets.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date")
}

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "-";

/// `Jan 5, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `Jan 5 - Jan 9, 2025` when both ends share a year, otherwise both dates in full.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return format_date(start);
    }
    if start.year() == end.year() {
        format!("{} - {}", start.format("%b %-d"), format_date(end))
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

/// Calendar days covered by `start..=end`; a reversed range counts as zero.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from(days.max(0)).unwrap_or(0)
}

/// Parses a `YYYY-MM` month key.
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.trim().split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
