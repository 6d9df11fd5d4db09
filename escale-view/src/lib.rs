pub mod card;
pub mod format;

pub use card::flight_card;
pub use format::{format_date_time, format_duration, is_low_availability, LOW_AVAILABILITY_THRESHOLD};
