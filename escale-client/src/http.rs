use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use escale_core::{ApiError, Flight, FlightApi, ReservationRequest, ReservationResponse, SearchQuery};

use crate::app_config::ApiConfig;
use crate::ClientError;

/// `FlightApi` over the flight-query service's HTTP surface.
pub struct HttpFlightApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFlightApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl FlightApi for HttpFlightApi {
    async fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>, ApiError> {
        let url = self.url("/vols");
        debug!(%url, "Searching flights");

        let response = self
            .client
            .get(url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(transport)?;

        read_json(response).await
    }

    async fn available_seats(&self, flight_id: Uuid) -> Result<u32, ApiError> {
        let url = self.url(&format!("/vols/{flight_id}/places"));
        debug!(%url, "Fetching remaining seats");

        let response = self.client.get(url).send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, ApiError> {
        let url = self.url("/reservations");
        debug!(%url, flight = %request.flight_id, seats = request.seat_count, "Creating reservation");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        read_json(response).await
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        return Err(failure_from(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error payload the reservation service attaches to rejections.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Classifies a non-success response. Server-side errors are transport
/// failures (the service gave no answer, so the call may be retried); client
/// errors carry a definitive domain rejection.
fn failure_from(status: u16, body: &str) -> ApiError {
    if status >= 500 {
        return ApiError::Transport(format!("HTTP {status}"));
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError::Domain {
        status,
        code: parsed.code,
        message: parsed.message,
    }
}
