//! Google Geocoding API adapter.
//!
//! Google returns structured `address_components`, so locality fields are read
//! directly rather than parsed out of the formatted address.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::GeocodeError;
use crate::provider::{
    build_client, credential, endpoint_url, GeoProvider, GeocodedLocation, ProviderOutcome,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const GEOCODE_PATH: &str = "maps/api/geocode/json";
const NAME: &str = "google";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeMatch>,
}

#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    formatted_address: String,
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

impl GeocodeMatch {
    fn component(&self, kind: &str) -> Option<&AddressComponent> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
    }

    fn into_location(self) -> GeocodedLocation {
        let city = self
            .component("locality")
            .map(|c| c.long_name.clone())
            .unwrap_or_default();
        let county = self
            .component("administrative_area_level_2")
            .map(|c| strip_county_suffix(&c.long_name).to_string())
            .unwrap_or_default();
        let state = self
            .component("administrative_area_level_1")
            .map(|c| c.short_name.clone())
            .unwrap_or_default();

        GeocodedLocation {
            latitude: self.geometry.location.lat,
            longitude: self.geometry.location.lng,
            formatted_address: self.formatted_address,
            city,
            county,
            state,
        }
    }
}

fn strip_county_suffix(name: &str) -> &str {
    name.strip_suffix(" County").unwrap_or(name)
}

/// Client for the Google Geocoding API.
pub struct GoogleGeocoder {
    client: Client,
    api_key: Option<String>,
    geocode_url: Url,
}

impl GoogleGeocoder {
    /// Creates a client for the production Google Geocoding API.
    ///
    /// A `None` or blank key yields a client that reports
    /// [`ProviderOutcome::Unconfigured`] without sending requests.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<&str>, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the client cannot be constructed, or
    /// [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            api_key: credential(api_key),
            geocode_url: endpoint_url(base_url, GEOCODE_PATH)?,
        })
    }

    fn build_url(&self, key: &str, address: &str) -> Url {
        let mut url = self.geocode_url.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", key);
        url
    }

    /// Looks up `address`, returning the first result if any.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodeError::ProviderStatus`] when the payload status is neither
    ///   `OK` nor `ZERO_RESULTS`.
    /// - [`GeocodeError::Deserialize`] if the body does not have the expected
    ///   shape.
    async fn lookup(
        &self,
        key: &str,
        address: &str,
    ) -> Result<Option<GeocodedLocation>, GeocodeError> {
        let url = self.build_url(key, address);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                provider: NAME,
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await?;

        let payload: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("{NAME} geocode"),
                source: e,
            })?;

        match payload.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(payload
                .results
                .into_iter()
                .next()
                .map(GeocodeMatch::into_location)),
            _ => Err(GeocodeError::ProviderStatus {
                provider: NAME,
                message: payload.error_message.unwrap_or_default(),
                status: payload.status,
            }),
        }
    }
}

#[async_trait]
impl GeoProvider for GoogleGeocoder {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn attempt_geocode(&self, address: &str) -> ProviderOutcome {
        let Some(key) = self.api_key.as_deref() else {
            return ProviderOutcome::Unconfigured;
        };
        ProviderOutcome::from_result(self.lookup(key, address).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long: &str, short: &str, kind: &str) -> AddressComponent {
        AddressComponent {
            long_name: long.to_string(),
            short_name: short.to_string(),
            types: vec![kind.to_string(), "political".to_string()],
        }
    }

    #[test]
    fn county_suffix_is_stripped() {
        assert_eq!(strip_county_suffix("Fulton County"), "Fulton");
        assert_eq!(strip_county_suffix("Athens-Clarke County"), "Athens-Clarke");
        assert_eq!(strip_county_suffix("Anchorage"), "Anchorage");
    }

    #[test]
    fn components_map_to_locality_fields() {
        let result = GeocodeMatch {
            formatted_address: "55 Trinity Ave SW, Atlanta, GA 30303, USA".to_string(),
            geometry: Geometry {
                location: LatLng {
                    lat: 33.7488,
                    lng: -84.3903,
                },
            },
            address_components: vec![
                component("Atlanta", "Atlanta", "locality"),
                component("Fulton County", "Fulton County", "administrative_area_level_2"),
                component("Georgia", "GA", "administrative_area_level_1"),
            ],
        };
        let location = result.into_location();
        assert_eq!(location.city, "Atlanta");
        assert_eq!(location.county, "Fulton");
        assert_eq!(location.state, "GA");
    }

    #[test]
    fn missing_components_are_empty() {
        let result = GeocodeMatch {
            formatted_address: "Georgia, USA".to_string(),
            geometry: Geometry {
                location: LatLng {
                    lat: 32.16,
                    lng: -82.9,
                },
            },
            address_components: vec![component("Georgia", "GA", "administrative_area_level_1")],
        };
        let location = result.into_location();
        assert_eq!(location.city, "");
        assert_eq!(location.county, "");
        assert_eq!(location.state, "GA");
    }
}
