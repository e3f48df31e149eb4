use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::{error::LookupError, model::Coordinates};

use super::Geocoder;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Geocoding client backed by the Open-Meteo geocoding service. No API key
/// required.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoGeocoder {
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    name: String,
    admin1: Option<String>,
    country: Option<String>,
}

/// Take the first match of a geocoding response, if any.
fn first_match(response: GeoResponse) -> Option<Coordinates> {
    let result = response.results.unwrap_or_default().into_iter().next()?;

    Some(Coordinates {
        latitude: result.latitude,
        longitude: result.longitude,
        name: result.name,
        region: result.admin1,
        country: result.country,
    })
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, query: &str) -> Result<Coordinates, LookupError> {
        // The presenter rejects empty queries before getting here; if one
        // slips through anyway it behaves as not-found.
        if query.trim().is_empty() {
            return Err(LookupError::LocationNotFound);
        }

        debug!("geocoding '{query}'");

        let res = self
            .http
            .get(GEOCODING_URL)
            .query(&[("name", query), ("count", "1")])
            .send()
            .await
            .map_err(|e| {
                warn!("geocoding request failed: {e}");
                LookupError::ServiceUnavailable
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!("geocoding request failed with status {status}");
            return Err(LookupError::ServiceUnavailable);
        }

        let parsed: GeoResponse = res.json().await.map_err(|e| {
            warn!("failed to decode geocoding response: {e}");
            LookupError::ServiceUnavailable
        })?;

        first_match(parsed).ok_or(LookupError::LocationNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS_RESPONSE: &str = r#"{
        "results": [
            {
                "id": 2988507,
                "name": "Paris",
                "latitude": 48.85341,
                "longitude": 2.3488,
                "elevation": 42.0,
                "country_code": "FR",
                "timezone": "Europe/Paris",
                "country": "France",
                "admin1": "Île-de-France"
            }
        ],
        "generationtime_ms": 0.73
    }"#;

    #[test]
    fn first_match_takes_the_first_result() {
        let parsed: GeoResponse = serde_json::from_str(PARIS_RESPONSE).expect("valid fixture");
        let coords = first_match(parsed).expect("one result");

        assert!((coords.latitude - 48.85341).abs() < 1e-9);
        assert!((coords.longitude - 2.3488).abs() < 1e-9);
        assert_eq!(coords.display_name(), "Paris, Île-de-France, France");
    }

    #[test]
    fn missing_optional_fields_stay_absent() {
        let body = r#"{
            "results": [
                { "name": "Paris", "latitude": 48.85, "longitude": 2.35, "country": "France" }
            ]
        }"#;
        let parsed: GeoResponse = serde_json::from_str(body).expect("valid fixture");
        let coords = first_match(parsed).expect("one result");

        assert_eq!(coords.region, None);
        assert_eq!(coords.display_name(), "Paris, France");
    }

    #[test]
    fn zero_results_is_not_found() {
        let empty: GeoResponse = serde_json::from_str(r#"{"results": []}"#).expect("valid");
        assert!(first_match(empty).is_none());

        let absent: GeoResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.1}"#).expect("valid");
        assert!(first_match(absent).is_none());
    }
}
