//! Month grid used by the attendance calendar.

use async_graphql::SimpleObject;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{HrError, HrResult};

#[derive(Clone, Debug, PartialEq, Eq, SimpleObject, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1, counted from Sunday.
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<Option<u32>>,
}

impl MonthGrid {
    pub fn weeks(&self) -> Vec<Vec<Option<u32>>> {
        self.cells.chunks(7).map(<[_]>::to_vec).collect()
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// `February 2024`.
    pub fn month_label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

pub fn month_grid(year: i32, month: u32) -> HrResult<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(HrError::InvalidMonth { year, month })?;
    let days_in_month = days_in_month(first).ok_or(HrError::InvalidMonth { year, month })?;
    let leading_blanks = first.weekday().num_days_from_sunday();

    let cells = std::iter::repeat_n(None, leading_blanks as usize)
        .chain((1..=days_in_month).map(Some))
        .collect();

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        days_in_month,
        cells,
    })
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    let next = NaiveDate::from_ymd_opt(year, month, 1)?;
    next.pred_opt().map(|last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_leap_year() {
        // 2024-02-01 is a Thursday.
        let grid = month_grid(2024, 2).unwrap();
        assert_eq!(grid.days_in_month, 29);
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.cells.len(), 33);
        assert_eq!(&grid.cells[..5], &[None, None, None, None, Some(1)]);
        assert_eq!(grid.cells.last(), Some(&Some(29)));
    }

    #[test]
    fn february_common_year() {
        let grid = month_grid(2025, 2).unwrap();
        assert_eq!(grid.days_in_month, 28);
        // 2025-02-01 is a Saturday.
        assert_eq!(grid.leading_blanks, 6);
    }

    #[test]
    fn month_starting_on_sunday_has_no_blanks() {
        // 2025-06-01 is a Sunday.
        let grid = month_grid(2025, 6).unwrap();
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.cells.first(), Some(&Some(1)));
        assert_eq!(grid.cells.len(), 30);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let grid = month_grid(2025, 12).unwrap();
        assert_eq!(grid.days_in_month, 31);
        assert_eq!(grid.month_label(), "December 2025");
    }

    #[test]
    fn cell_count_matches_offset_plus_days_for_every_month() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let grid = month_grid(year, month).unwrap();
                let blanks = grid.cells.iter().filter(|c| c.is_none()).count();
                assert_eq!(blanks as u32, grid.leading_blanks);
                assert_eq!(
                    grid.cells.len() as u32,
                    grid.leading_blanks + grid.days_in_month
                );
                assert!(grid.leading_blanks < 7);
            }
        }
    }

    #[test]
    fn weeks_chunk_by_seven() {
        let grid = month_grid(2024, 2).unwrap();
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].len(), 7);
        assert_eq!(weeks[4].len(), 5);
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert_eq!(
            month_grid(2025, 13),
            Err(HrError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
        assert!(month_grid(2025, 0).is_err());
    }
}
