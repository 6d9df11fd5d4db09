//! User-facing strings in the application's single fixed locale.

pub const SEARCH_FAILED: &str = "Erreur lors de la recherche des vols. Veuillez réessayer.";

pub const RESERVATION_FAILED: &str = "Erreur lors de la réservation.";

pub const INSUFFICIENT_SEATS: &str = "Places insuffisantes pour ce vol.";

pub const FLIGHT_NOT_FOUND: &str = "Vol non trouvé.";
