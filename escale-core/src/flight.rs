use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flight as returned by the flight-query service.
///
/// Wire field names follow the service's French API; the optional
/// `placesDisponibles` the server sometimes attaches is ignored on input
/// because availability is always derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    #[serde(rename = "dateDepart")]
    pub departure_at: NaiveDateTime,
    #[serde(rename = "dateArrivee")]
    pub arrival_at: NaiveDateTime,
    #[serde(rename = "villeDepart")]
    pub departure_city: String,
    #[serde(rename = "villeArrivee")]
    pub arrival_city: String,
    #[serde(rename = "prix")]
    pub price: f64,
    #[serde(rename = "tempsTrajet")]
    pub duration_minutes: u32,
    #[serde(rename = "capaciteMaximale")]
    pub max_capacity: u32,
    #[serde(rename = "placesReservees")]
    pub reserved_seats: u32,
}

impl Flight {
    /// Seats still open for booking. Clamped at zero so a payload that
    /// violates the reserved <= capacity invariant cannot underflow.
    pub fn available_seats(&self) -> u32 {
        self.max_capacity.saturating_sub(self.reserved_seats)
    }

    /// A full flight cannot be booked.
    pub fn is_full(&self) -> bool {
        self.available_seats() == 0
    }
}
