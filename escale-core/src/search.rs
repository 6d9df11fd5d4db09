use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Server-side result ordering hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "prix")]
    Price,
    #[serde(rename = "temps_trajet")]
    Duration,
}

impl SortKey {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            SortKey::Price => "prix",
            SortKey::Duration => "temps_trajet",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prix" => Ok(SortKey::Price),
            "temps_trajet" => Ok(SortKey::Duration),
            other => Err(CoreError::ValidationError(format!(
                "Unknown sort key: {other}"
            ))),
        }
    }
}

/// Search filters for the flight-query endpoint. Every field is optional;
/// an all-empty query lists every flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub sort_key: Option<SortKey>,
}

impl SearchQuery {
    /// Wire query pairs for `GET /vols`. Blank city filters are stripped
    /// here so no key is ever sent with an empty value.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(date) = self.departure_date {
            pairs.push(("dateDepart", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(city) = non_blank(self.departure_city.as_deref()) {
            pairs.push(("villeDepart", city.to_string()));
        }
        if let Some(city) = non_blank(self.arrival_city.as_deref()) {
            pairs.push(("villeArrivee", city.to_string()));
        }
        if let Some(sort) = self.sort_key {
            pairs.push(("tri", sort.as_wire_str().to_string()));
        }

        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
