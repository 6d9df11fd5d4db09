pub mod api;
pub mod flight;
pub mod pii;
pub mod reservation;
pub mod search;

pub use api::{ApiError, FlightApi};
pub use flight::Flight;
pub use reservation::{Passenger, ReservationRequest, ReservationResponse};
pub use search::{SearchQuery, SortKey};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
