//! The provider capability shared by every upstream geocoding service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::GeocodeError;

/// User agent sent with every provider request.
const USER_AGENT: &str = "permitdb/0.1 (permit-office-locator)";

/// A normalized location from one provider, before it is tagged with its
/// position in the provider chain.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
    pub city: String,
    pub county: String,
    pub state: String,
}

/// Result of a single provider attempt.
///
/// Only `Found` carries a location. Every other variant tells the resolver to
/// move on to the next provider.
#[derive(Debug)]
pub enum ProviderOutcome {
    Found(GeocodedLocation),
    /// The call succeeded but matched nothing.
    NoMatch,
    /// No credential is configured, so no request was sent.
    Unconfigured,
    Failed(GeocodeError),
}

impl ProviderOutcome {
    /// Converts a fallible lookup into an outcome, absorbing the error.
    pub(crate) fn from_result(result: Result<Option<GeocodedLocation>, GeocodeError>) -> Self {
        match result {
            Ok(Some(location)) => Self::Found(location),
            Ok(None) => Self::NoMatch,
            Err(e) => Self::Failed(e),
        }
    }
}

/// One upstream geocoding service.
///
/// Implementations issue at most one request per call and never return an
/// error; faults are reported as [`ProviderOutcome::Failed`].
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    async fn attempt_geocode(&self, address: &str) -> ProviderOutcome;
}

/// Builds the HTTP client used by a provider adapter.
pub(crate) fn build_client(timeout_secs: u64) -> Result<Client, GeocodeError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Parses `base_url` and joins `path` onto it.
///
/// Trailing slashes on the base are ignored so a mock server URI and a
/// production host join the same way.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> Result<Url, GeocodeError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| GeocodeError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// Treats a blank credential the same as a missing one.
pub(crate) fn credential(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let url = endpoint_url("http://127.0.0.1:9000/", "/v1/search.php").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/v1/search.php");
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "v1/search.php").unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn blank_credential_is_missing() {
        assert_eq!(credential(Some("  ")), None);
        assert_eq!(credential(None), None);
        assert_eq!(credential(Some(" pk.abc ")), Some("pk.abc".to_string()));
    }

    #[test]
    fn outcome_from_result() {
        assert!(matches!(
            ProviderOutcome::from_result(Ok(None)),
            ProviderOutcome::NoMatch
        ));
        let failed = ProviderOutcome::from_result(Err(GeocodeError::UnexpectedStatus {
            provider: "test",
            status: 500,
        }));
        assert!(matches!(
            failed,
            ProviderOutcome::Failed(GeocodeError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
