use std::fmt::Write as _;

use escale_core::Flight;

use crate::format::{format_date_time, format_duration, is_low_availability};

/// Renders one result card for the shell, mirroring what the results screen
/// shows per flight: route and price, schedule, duration, availability, and
/// whether booking is still possible.
pub fn flight_card(flight: &Flight) -> String {
    let mut card = String::new();

    let _ = writeln!(
        card,
        "{} → {}    {:.2}€",
        flight.departure_city, flight.arrival_city, flight.price
    );
    let _ = writeln!(card, "  Départ:  {}", format_date_time(flight.departure_at));
    let _ = writeln!(card, "  Arrivée: {}", format_date_time(flight.arrival_at));
    let _ = writeln!(card, "  Durée:   {}", format_duration(flight.duration_minutes));

    let seats = flight.available_seats();
    let _ = write!(
        card,
        "  Places disponibles: {} / {}",
        seats, flight.max_capacity
    );
    if flight.is_full() {
        let _ = write!(card, "\n  Complet");
    } else {
        if is_low_availability(flight) {
            let _ = write!(card, " (dernières places)");
        }
        let _ = write!(card, "\n  Réserver: escale reserve {}", flight.id);
    }
    card.push('\n');

    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn flight(reserved_seats: u32) -> Flight {
        let day = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
        Flight {
            id: Uuid::nil(),
            departure_at: day.and_hms_opt(8, 30, 0).unwrap(),
            arrival_at: day.and_hms_opt(9, 45, 0).unwrap(),
            departure_city: "Paris".to_string(),
            arrival_city: "Lyon".to_string(),
            price: 89.99,
            duration_minutes: 75,
            max_capacity: 180,
            reserved_seats,
        }
    }

    #[test]
    fn test_card_shows_route_schedule_and_duration() {
        let card = flight_card(&flight(30));
        assert!(card.contains("Paris → Lyon"));
        assert!(card.contains("89.99€"));
        assert!(card.contains("Départ:  14/09/2026 08:30"));
        assert!(card.contains("Durée:   1h 15min"));
        assert!(card.contains("Places disponibles: 150 / 180"));
        assert!(!card.contains("dernières places"));
    }

    #[test]
    fn test_full_flight_disables_booking() {
        let card = flight_card(&flight(180));
        assert!(card.contains("Complet"));
        assert!(!card.contains("Réserver"));
    }

    #[test]
    fn test_low_availability_marker() {
        let card = flight_card(&flight(175));
        assert!(card.contains("Places disponibles: 5 / 180 (dernières places)"));
        assert!(card.contains("Réserver"));
    }
}
