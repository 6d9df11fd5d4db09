use async_trait::async_trait;
use uuid::Uuid;

use crate::flight::Flight;
use crate::reservation::{ReservationRequest, ReservationResponse};
use crate::search::SearchQuery;

/// Failure taxonomy for the flight-query service.
///
/// Transport failures are the only retryable class; a domain rejection is a
/// definitive answer from the service and retrying would double-book.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Request rejected by flight service ({status}): {code:?}")]
    Domain {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    #[error("Unexpected payload from flight service: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Seam to the remote flight-query service.
#[async_trait]
pub trait FlightApi: Send + Sync {
    async fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>, ApiError>;

    async fn available_seats(&self, flight_id: Uuid) -> Result<u32, ApiError>;

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_failures_are_retryable() {
        assert!(ApiError::Transport("connection refused".to_string()).is_retryable());
        assert!(!ApiError::Domain {
            status: 409,
            code: Some("INSUFFICIENT_SEATS".to_string()),
            message: None,
        }
        .is_retryable());
        assert!(!ApiError::Decode("expected an array".to_string()).is_retryable());
    }
}
