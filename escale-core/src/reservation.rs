use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pii::MaskedEmail;
use crate::{CoreError, CoreResult};

/// Machine-readable failure codes the reservation endpoint can return.
/// `VOL_NOT_FOUND` is the wire spelling of flight-not-found.
pub const CODE_INSUFFICIENT_SEATS: &str = "INSUFFICIENT_SEATS";
pub const CODE_FLIGHT_NOT_FOUND: &str = "VOL_NOT_FOUND";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: MaskedEmail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(rename = "volId")]
    pub flight_id: Uuid,
    #[serde(rename = "passager")]
    pub passenger: Passenger,
    #[serde(rename = "nombrePlaces")]
    pub seat_count: u32,
}

impl ReservationRequest {
    /// Mirrors the constraints the reservation service enforces so obviously
    /// bad requests never leave the client.
    pub fn validate(&self) -> CoreResult<()> {
        if self.passenger.last_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Passenger last name is required".to_string(),
            ));
        }
        if self.passenger.first_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Passenger first name is required".to_string(),
            ));
        }

        let email = self.passenger.email.as_str();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(CoreError::ValidationError(format!(
                "Invalid passenger email: {}",
                self.passenger.email
            )));
        }

        if self.seat_count == 0 {
            return Err(CoreError::ValidationError(
                "Seat count must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    #[serde(rename = "numeroReservation")]
    pub reservation_number: String,
    #[serde(rename = "volId")]
    pub flight_id: Uuid,
    #[serde(rename = "passager")]
    pub passenger: Passenger,
    #[serde(rename = "nombrePlaces")]
    pub seat_count: u32,
    #[serde(rename = "dateReservation")]
    pub reserved_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReservationRequest {
        ReservationRequest {
            flight_id: Uuid::new_v4(),
            passenger: Passenger {
                last_name: "Dupont".to_string(),
                first_name: "Jean".to_string(),
                email: "jean.dupont@example.com".into(),
            },
            seat_count: 2,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut req = request();
        req.passenger.last_name = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = request();
        req.passenger.email = "jean.dupont".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut req = request();
        req.seat_count = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_serializes_with_wire_names() {
        let req = request();
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("volId").is_some());
        assert_eq!(json["passager"]["nom"], "Dupont");
        assert_eq!(json["passager"]["prenom"], "Jean");
        assert_eq!(json["nombrePlaces"], 2);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"
            {
                "numeroReservation": "RES-2026-000042",
                "volId": "7f8d2c2e-4f5a-4b8e-9d2a-1c3b5e7f9a0b",
                "passager": {
                    "nom": "Dupont",
                    "prenom": "Jean",
                    "email": "jean.dupont@example.com"
                },
                "nombrePlaces": 2,
                "dateReservation": "2026-08-05T11:02:33"
            }
        "#;
        let response: ReservationResponse =
            serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.reservation_number, "RES-2026-000042");
        assert_eq!(response.seat_count, 2);
    }
}
