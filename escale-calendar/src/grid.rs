use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

pub const GRID_WEEKS: usize = 6;
pub const GRID_DAYS: usize = GRID_WEEKS * 7;

/// One cell of the month view. Recomputed from scratch on every change,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// The displayed year and month. The day component is pinned to the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Cursor one month later, pinned to the 1st. Saturates at the edge of
    /// the representable calendar rather than wrapping.
    pub fn next(&self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    /// Cursor one month earlier, pinned to the 1st.
    pub fn previous(&self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }
}

/// Computes the 6x7 month view for `cursor`.
///
/// The run starts on the Sunday on or before the 1st of the month and spans
/// exactly [`GRID_DAYS`] consecutive days, so it always covers the whole
/// month, always ends on a Saturday, and short months are padded with
/// trailing days from the next month.
pub fn month_grid(
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<CalendarDay> {
    let first = cursor.first_day();
    let back = first.weekday().num_days_from_sunday() as u64;
    let start = first.checked_sub_days(Days::new(back)).unwrap_or(first);

    start
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.month() == first.month() && date.year() == first.year(),
            is_today: date == today,
            is_selected: selected == Some(date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_is_always_42_days() {
        // Every month shape: leap and common Februaries, 30/31-day months,
        // months starting on every weekday.
        for year in 2015..=2030 {
            for month in 1..=12 {
                let cursor = MonthCursor::containing(date(year, month, 1));
                let grid = month_grid(cursor, date(2026, 8, 5), None);
                assert_eq!(grid.len(), GRID_DAYS, "{}-{:02}", year, month);
            }
        }
    }

    #[test]
    fn test_grid_is_contiguous_and_sunday_aligned() {
        for year in [2020, 2024, 2026] {
            for month in 1..=12 {
                let cursor = MonthCursor::containing(date(year, month, 15));
                let grid = month_grid(cursor, date(2026, 8, 5), None);

                assert_eq!(grid[0].date.weekday(), Weekday::Sun);
                assert_eq!(grid[GRID_DAYS - 1].date.weekday(), Weekday::Sat);
                for pair in grid.windows(2) {
                    assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_grid_covers_the_whole_month() {
        let cursor = MonthCursor::containing(date(2026, 2, 1));
        let grid = month_grid(cursor, date(2026, 8, 5), None);

        let in_month: Vec<_> = grid.iter().filter(|c| c.is_current_month).collect();
        assert_eq!(in_month.len(), 28);
        assert_eq!(in_month[0].date, date(2026, 2, 1));
        assert_eq!(in_month[27].date, date(2026, 2, 28));
    }

    #[test]
    fn test_four_week_february_is_padded_to_six() {
        // February 2015 started on a Sunday and fits 4 exact weeks; the view
        // still shows 6.
        let cursor = MonthCursor::containing(date(2015, 2, 1));
        let grid = month_grid(cursor, date(2026, 8, 5), None);

        assert_eq!(grid.len(), GRID_DAYS);
        assert_eq!(grid[0].date, date(2015, 2, 1));
        assert!(grid[GRID_DAYS - 1].date > date(2015, 2, 28));
    }

    #[test]
    fn test_today_and_selected_flags() {
        let today = date(2026, 8, 5);
        let selected = date(2026, 8, 20);
        let cursor = MonthCursor::containing(today);
        let grid = month_grid(cursor, today, Some(selected));

        assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(grid.iter().filter(|c| c.is_selected).count(), 1);
        assert!(grid.iter().any(|c| c.is_today && c.date == today));
        assert!(grid.iter().any(|c| c.is_selected && c.date == selected));
    }

    #[test]
    fn test_leading_and_trailing_days_are_flagged_foreign() {
        // September 2026 starts on a Tuesday.
        let cursor = MonthCursor::containing(date(2026, 9, 1));
        let grid = month_grid(cursor, date(2026, 8, 5), None);

        assert_eq!(grid[0].date, date(2026, 8, 30));
        assert!(!grid[0].is_current_month);
        assert!(grid[2].is_current_month);
        assert!(!grid[GRID_DAYS - 1].is_current_month);
    }

    #[test]
    fn test_cursor_navigation_normalizes_to_first() {
        let cursor = MonthCursor::containing(date(2026, 1, 31));
        assert_eq!(cursor.first_day(), date(2026, 1, 1));
        assert_eq!(cursor.next().first_day(), date(2026, 2, 1));
        assert_eq!(cursor.previous().first_day(), date(2025, 12, 1));
    }

    #[test]
    fn test_cursor_navigation_crosses_year_boundaries() {
        let mut cursor = MonthCursor::containing(date(2026, 12, 25));
        cursor = cursor.next();
        assert_eq!((cursor.year(), cursor.month()), (2027, 1));
        cursor = cursor.previous();
        cursor = cursor.previous();
        assert_eq!((cursor.year(), cursor.month()), (2026, 11));
    }
}
