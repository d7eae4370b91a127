//! Address geocoding through a chain of upstream providers.

pub mod error;
pub mod extract;
pub mod google;
pub mod locationiq;
pub mod provider;
pub mod resolver;

pub use error::{GeocodeError, ResolveError};
pub use extract::{extract_city, extract_county, extract_state};
pub use google::GoogleGeocoder;
pub use locationiq::LocationIqClient;
pub use provider::{GeoProvider, GeocodedLocation, ProviderOutcome};
pub use resolver::GeocodeResolver;
