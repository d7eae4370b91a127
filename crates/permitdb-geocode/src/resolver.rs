//! Ordered provider chain returning the first successful location.

use permitdb_core::{AppConfig, GeocodeResult, ProviderId};

use crate::error::{GeocodeError, ResolveError};
use crate::google::GoogleGeocoder;
use crate::locationiq::LocationIqClient;
use crate::provider::{GeoProvider, ProviderOutcome};

/// Tries providers one at a time in priority order.
///
/// A later provider is only called when every earlier one produced no
/// location, so the common case costs a single request.
pub struct GeocodeResolver {
    providers: Vec<(ProviderId, Box<dyn GeoProvider>)>,
}

impl GeocodeResolver {
    #[must_use]
    pub fn new(primary: Box<dyn GeoProvider>, secondary: Box<dyn GeoProvider>) -> Self {
        Self {
            providers: vec![
                (ProviderId::Primary, primary),
                (ProviderId::Secondary, secondary),
            ],
        }
    }

    /// `LocationIQ` first, then Google, with credentials from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if an HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        let primary = LocationIqClient::new(
            config.locationiq_access_token.as_deref(),
            config.geocode_timeout_secs,
        )?;
        let secondary = GoogleGeocoder::new(
            config.google_maps_api_key.as_deref(),
            config.geocode_timeout_secs,
        )?;
        Ok(Self::new(Box::new(primary), Box::new(secondary)))
    }

    /// Resolves `address` to a location tagged with the provider that found it.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::MissingAddress`] if `address` is blank.
    /// - [`ResolveError::NotFound`] if no provider produced a location.
    pub async fn resolve(&self, address: &str) -> Result<GeocodeResult, ResolveError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ResolveError::MissingAddress);
        }

        for (provider_id, provider) in &self.providers {
            match provider.attempt_geocode(address).await {
                ProviderOutcome::Found(location) => {
                    tracing::info!(
                        provider = provider.name(),
                        source = %provider_id,
                        "address geocoded"
                    );
                    return Ok(GeocodeResult {
                        latitude: location.latitude,
                        longitude: location.longitude,
                        formatted_address: location.formatted_address,
                        city: location.city,
                        county: location.county,
                        state: location.state,
                        provider_id: *provider_id,
                    });
                }
                ProviderOutcome::NoMatch => {
                    tracing::debug!(provider = provider.name(), "provider found no match");
                }
                ProviderOutcome::Unconfigured => {
                    tracing::warn!(
                        provider = provider.name(),
                        "provider credential not configured"
                    );
                }
                ProviderOutcome::Failed(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider lookup failed"
                    );
                }
            }
        }

        Err(ResolveError::NotFound)
    }
}
