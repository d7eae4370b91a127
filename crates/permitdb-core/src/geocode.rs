//! Geocoding result types shared by the geocoder and its callers.

use serde::{Deserialize, Serialize};

/// Which position in the provider chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Primary,
    Secondary,
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderId::Primary => write!(f, "primary"),
            ProviderId::Secondary => write!(f, "secondary"),
        }
    }
}

/// A geocoded address with its administrative locality.
///
/// `city`, `county` and `state` are best-effort and may be empty strings,
/// which callers treat as "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
    pub city: String,
    pub county: String,
    pub state: String,
    #[serde(rename = "source")]
    pub provider_id: ProviderId,
}
