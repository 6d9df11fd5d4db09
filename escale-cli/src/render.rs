use std::fmt::Write as _;

use chrono::NaiveDate;

use escale_calendar::{month_grid, month_label, MonthCursor, WEEKDAYS};
use escale_core::Flight;
use escale_view::flight_card;

/// Renders the search results the way the results screen lays them out:
/// a count header, one card per flight, or the empty-state hint.
pub fn render_results(flights: &[Flight]) -> String {
    if flights.is_empty() {
        return "Aucun vol trouvé.\nEssayez de modifier vos critères de recherche.\n".to_string();
    }

    let mut out = format!("{} vol(s) trouvé(s)\n\n", flights.len());
    for flight in flights {
        out.push_str(&flight_card(flight));
        out.push('\n');
    }
    out
}

/// Renders the 6x7 month view as text: label, weekday header, then one row
/// per week. Days outside the month are blanked and today is starred.
pub fn render_month(cursor: MonthCursor, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^27}", month_label(cursor));
    let _ = writeln!(out, "{}", WEEKDAYS.join(" "));

    let grid = month_grid(cursor, today, None);
    for week in grid.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if !cell.is_current_month {
                    return "   ".to_string();
                }
                let day = cell.date.format("%-d").to_string();
                if cell.is_today {
                    format!("{day:>2}*")
                } else {
                    format!("{day:>2} ")
                }
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }
    out
}
