//! `LocationIQ` forward geocoding adapter.
//!
//! `LocationIQ` answers with a free-text `display_name` only, so city, county
//! and state come from the [`crate::extract`] heuristics.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::error::GeocodeError;
use crate::extract::{extract_city, extract_county, extract_state};
use crate::provider::{
    build_client, credential, endpoint_url, GeoProvider, GeocodedLocation, ProviderOutcome,
};

const DEFAULT_BASE_URL: &str = "https://us1.locationiq.com";
const SEARCH_PATH: &str = "v1/search.php";
const NAME: &str = "locationiq";

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

/// Client for the `LocationIQ` search endpoint.
///
/// Use [`LocationIqClient::new`] for production or
/// [`LocationIqClient::with_base_url`] to point at a mock server in tests.
pub struct LocationIqClient {
    client: Client,
    access_token: Option<String>,
    search_url: Url,
}

impl LocationIqClient {
    /// Creates a client for the production `LocationIQ` API.
    ///
    /// A `None` or blank token yields a client that reports
    /// [`ProviderOutcome::Unconfigured`] without sending requests.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: Option<&str>, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(access_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the client cannot be constructed, or
    /// [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        access_token: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            access_token: credential(access_token),
            search_url: endpoint_url(base_url, SEARCH_PATH)?,
        })
    }

    fn build_url(&self, token: &str, address: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("key", token)
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("countrycodes", "us");
        url
    }

    /// Looks up `address`, returning the first match if any.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status other than 404.
    /// - [`GeocodeError::Deserialize`] or [`GeocodeError::InvalidCoordinate`]
    ///   if the body does not have the expected shape.
    async fn lookup(
        &self,
        token: &str,
        address: &str,
    ) -> Result<Option<GeocodedLocation>, GeocodeError> {
        let url = self.build_url(token, address);
        let response = self.client.get(url).send().await?;

        // LocationIQ reports "Unable to geocode" as a 404.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                provider: NAME,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let places: Vec<Place> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("{NAME} search"),
                source: e,
            })?;

        places.into_iter().next().map(place_to_location).transpose()
    }
}

fn parse_coordinate(value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            provider: NAME,
            value: value.to_string(),
        })
}

fn place_to_location(place: Place) -> Result<GeocodedLocation, GeocodeError> {
    Ok(GeocodedLocation {
        latitude: parse_coordinate(&place.lat)?,
        longitude: parse_coordinate(&place.lon)?,
        city: extract_city(&place.display_name),
        county: extract_county(&place.display_name),
        state: extract_state(&place.display_name),
        formatted_address: place.display_name,
    })
}

#[async_trait]
impl GeoProvider for LocationIqClient {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn attempt_geocode(&self, address: &str) -> ProviderOutcome {
        let Some(token) = self.access_token.as_deref() else {
            return ProviderOutcome::Unconfigured;
        };
        ProviderOutcome::from_result(self.lookup(token, address).await)
    }
}
