use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use escale_core::reservation::{CODE_FLIGHT_NOT_FOUND, CODE_INSUFFICIENT_SEATS};
use escale_core::{
    ApiError, CoreError, Flight, FlightApi, ReservationRequest, ReservationResponse, SearchQuery,
};

use crate::messages;

/// Snapshot published to subscribers on every state change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState {
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<Flight>,
}

/// Transport failures are retried this many extra times, with a fixed delay
/// between attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub extra_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            extra_attempts: 2,
            delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidRequest(#[from] CoreError),

    /// A failure already mapped to its user-facing message.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Owns the search/reservation state and orchestrates calls to the remote
/// flight-query service.
///
/// Overlapping searches supersede each other: every dispatch takes a fresh
/// generation number, and a completion whose generation has been passed
/// returns its payload to its own caller without publishing, so the state
/// always reflects the most recently issued search.
pub struct SearchController {
    api: Arc<dyn FlightApi>,
    retry: RetryPolicy,
    generation: AtomicU64,
    state_tx: watch::Sender<SearchState>,
}

impl SearchController {
    pub fn new(api: Arc<dyn FlightApi>) -> Self {
        Self::with_retry(api, RetryPolicy::default())
    }

    pub fn with_retry(api: Arc<dyn FlightApi>, retry: RetryPolicy) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());
        Self {
            api,
            retry,
            generation: AtomicU64::new(0),
            state_tx,
        }
    }

    /// Latest-value subscription to {loading, error, results}.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    /// Resets the error banner without touching loading or results.
    pub fn clear_error(&self) {
        self.state_tx.send_modify(|state| state.error = None);
    }

    /// Runs a search. Blank filters are stripped at the wire layer, transport
    /// failures are retried per the policy, and results replace the previous
    /// set in the order the server returned them.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Flight>, SearchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let mut attempt: u32 = 0;
        loop {
            match self.api.search_flights(query).await {
                Ok(flights) => {
                    if self.is_current(generation) {
                        self.state_tx.send_modify(|state| {
                            state.loading = false;
                            state.results = flights.clone();
                        });
                        info!(count = flights.len(), "Flight search completed");
                    } else {
                        debug!("Discarding results of superseded search");
                    }
                    return Ok(flights);
                }
                Err(err) if err.is_retryable() && attempt < self.retry.extra_attempts => {
                    attempt += 1;
                    warn!(%err, attempt, "Flight search failed, retrying");
                    tokio::time::sleep(self.retry.delay).await;
                }
                Err(err) => {
                    if self.is_current(generation) {
                        self.state_tx.send_modify(|state| {
                            state.loading = false;
                            state.error = Some(messages::SEARCH_FAILED.to_string());
                        });
                    }
                    warn!(%err, "Flight search failed after {} attempts", attempt + 1);
                    return Err(SearchError::Failed {
                        message: messages::SEARCH_FAILED.to_string(),
                        source: err,
                    });
                }
            }
        }
    }

    /// Remaining-seat lookup. Failures are surfaced to the caller without
    /// touching the shared state, matching the search form's behavior.
    pub async fn available_seats(&self, flight_id: Uuid) -> Result<u32, SearchError> {
        self.api.available_seats(flight_id).await.map_err(|err| {
            warn!(%flight_id, %err, "Seat lookup failed");
            SearchError::Api(err)
        })
    }

    /// Books seats on a flight. Dispatched once, never retried: a domain
    /// rejection is definitive and a second POST could double-book.
    pub async fn reserve(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, SearchError> {
        request.validate()?;

        self.state_tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        match self.api.create_reservation(request).await {
            Ok(response) => {
                self.state_tx.send_modify(|state| state.loading = false);
                info!(
                    reservation = %response.reservation_number,
                    flight = %response.flight_id,
                    "Reservation confirmed"
                );
                Ok(response)
            }
            Err(err) => {
                let message = reservation_message(&err);
                self.state_tx.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(message.clone());
                });
                warn!(%err, "Reservation failed");
                Err(SearchError::Failed {
                    message,
                    source: err,
                })
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Maps a reservation failure to its localized message: known machine codes
/// first, then any message the server supplied, then the generic fallback.
fn reservation_message(err: &ApiError) -> String {
    if let ApiError::Domain { code, message, .. } = err {
        match code.as_deref() {
            Some(CODE_INSUFFICIENT_SEATS) => return messages::INSUFFICIENT_SEATS.to_string(),
            Some(CODE_FLIGHT_NOT_FOUND) | Some("FLIGHT_NOT_FOUND") => {
                return messages::FLIGHT_NOT_FOUND.to_string()
            }
            _ => {}
        }
        if let Some(message) = message {
            if !message.trim().is_empty() {
                return message.clone();
            }
        }
    }
    messages::RESERVATION_FAILED.to_string()
}
