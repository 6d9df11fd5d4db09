use chrono::NaiveDateTime;

use escale_core::Flight;

/// Seats below this count get the "last seats" marker. Display-only
/// threshold, not a business rule.
pub const LOW_AVAILABILITY_THRESHOLD: u32 = 10;

/// Renders a trip duration: "Nmin" under an hour, "Nh" on the hour,
/// otherwise "Nh MMmin" with zero-padded minutes.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{mins}min")
    } else if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins:02}min")
    }
}

/// Renders a schedule timestamp the way the fixed locale displays it,
/// day first: `14/09/2026 08:30`.
pub fn format_date_time(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

pub fn is_low_availability(flight: &Flight) -> bool {
    flight.available_seats() < LOW_AVAILABILITY_THRESHOLD
}
