//! Nominatim Reverse Geocoding Client
//!
//! Thin reqwest client for the OSM Nominatim `/reverse` endpoint. One
//! request per lookup, no retry; every failure maps to
//! `DomainError::Geocode`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Coordinate, DomainError, DomainResult};
use crate::geocode::ReverseGeocode;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

/// The subset of the jsonv2 reverse response we care about
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

impl NominatimClient {
    pub fn new() -> DomainResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> DomainResult<Self> {
        // Nominatim's usage policy requires an identifying user agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!("scavenger-hunt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Geocode(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ReverseGeocode for NominatimClient {
    async fn reverse(&self, coordinate: Coordinate) -> DomainResult<Option<String>> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::Geocode(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::Geocode(e.to_string()))?;

        let body: ReverseResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Geocode(e.to_string()))?;

        Ok(body.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_response_parsing() {
        let json = r#"{
            "place_id": 12345,
            "lat": "52.5487",
            "lon": "-1.8164",
            "display_name": "137 Pilkington Avenue, Sutton Coldfield, England",
            "address": {"road": "Pilkington Avenue"}
        }"#;

        let parsed: ReverseResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.display_name.as_deref(),
            Some("137 Pilkington Avenue, Sutton Coldfield, England")
        );
    }

    #[test]
    fn test_reverse_response_without_display_name() {
        let parsed: ReverseResponse = serde_json::from_str(r#"{"place_id": 1}"#).unwrap();
        assert!(parsed.display_name.is_none());
    }
}
