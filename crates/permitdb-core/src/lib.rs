pub mod app_config;
pub mod config;
pub mod distance;
pub mod fallback;
pub mod geocode;
pub mod memory;
pub mod offices;
pub mod search;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::{compare_distance, distance_miles, rank_offices, EARTH_RADIUS_MILES};
pub use geocode::{GeocodeResult, ProviderId};
pub use memory::MemoryOfficeStore;
pub use offices::{
    CrawlFrequency, DataSource, GeoPoint, JurisdictionType, OfficeType, PermitOffice, RankedOffice,
};
pub use search::{
    OfficeFilters, OfficeQuery, OfficeSearch, OfficeStore, SearchOutcome, SearchSource, StoreError,
    DEFAULT_SEARCH_LIMIT, DEFAULT_STATE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },
}
