use thiserror::Error;

/// Failures from a single geocoding provider call.
///
/// These never leave the provider boundary as errors; the resolver sees them
/// wrapped in [`crate::ProviderOutcome::Failed`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    ///
    /// The request URL is stripped on conversion; it carries the provider key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} returned HTTP {status}")]
    UnexpectedStatus {
        provider: &'static str,
        status: u16,
    },

    /// The provider answered 2xx but reported an error in its payload.
    #[error("{provider} API error: {status}: {message}")]
    ProviderStatus {
        provider: &'static str,
        status: String,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A coordinate in the response was not a finite number.
    #[error("invalid coordinate {value:?} from {provider}")]
    InvalidCoordinate {
        provider: &'static str,
        value: String,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

/// Terminal failures of [`crate::GeocodeResolver::resolve`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The address was absent or blank; no provider was called.
    #[error("Address is required")]
    MissingAddress,

    /// Every provider was tried and none produced a location.
    #[error("Could not geocode address")]
    NotFound,
}
