use chrono::NaiveDate;
use tracing::debug;

use crate::grid::{month_grid, CalendarDay, MonthCursor};

/// Weekday header row, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Header label for a month view in the fixed locale, e.g. "septembre 2026".
pub fn month_label(cursor: MonthCursor) -> String {
    let month = MONTHS[cursor.month() as usize - 1];
    format!("{} {}", month, cursor.year())
}

/// Month-view date picker: a cursor, at most one selected date, and the
/// reference day used for the today flag and the past-date rule.
pub struct DatePicker {
    cursor: MonthCursor,
    selected: Option<NaiveDate>,
    today: NaiveDate,
}

impl DatePicker {
    /// Opens on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::containing(today),
            selected: None,
            today,
        }
    }

    /// The 42 cells of the current view.
    pub fn grid(&self) -> Vec<CalendarDay> {
        month_grid(self.cursor, self.today, self.selected)
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Header label in the fixed locale, e.g. "septembre 2026".
    pub fn month_label(&self) -> String {
        month_label(self.cursor)
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.previous();
    }

    /// Selects `date` and returns it in canonical `YYYY-MM-DD` form for the
    /// host. Dates before today are rejected silently: no state change, no
    /// emission.
    pub fn select(&mut self, date: NaiveDate) -> Option<String> {
        if date < self.today {
            debug!(%date, "Ignoring selection of past date");
            return None;
        }

        self.selected = Some(date);
        Some(date.format("%Y-%m-%d").to_string())
    }

    /// External reset; the only other way a selection goes away is
    /// re-selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
