//! Geocode and office search commands. Both print JSON to stdout.

use std::sync::Arc;

use permitdb_core::{
    AppConfig, GeoPoint, OfficeFilters, OfficeSearch, OfficeStore, RankedOffice, SearchSource,
};
use permitdb_db::PgOfficeStore;
use permitdb_geocode::GeocodeResolver;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SearchReport {
    offices: Vec<RankedOffice>,
    count: usize,
    source: SearchSource,
}

/// Resolve `address` and print the tagged result.
///
/// # Errors
///
/// Returns an error if the HTTP clients cannot be built or no provider
/// resolves the address.
pub(crate) async fn run_geocode(config: &AppConfig, address: &str) -> anyhow::Result<()> {
    let resolver = GeocodeResolver::from_config(config)?;
    let result = resolver.resolve(address).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Search offices, falling back to the built-in dataset when the database is
/// missing, unreachable, or has no matching rows.
///
/// # Errors
///
/// Returns an error only if the report cannot be serialized.
pub(crate) async fn run_search(
    config: &AppConfig,
    filters: &OfficeFilters,
    point: Option<GeoPoint>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let search = OfficeSearch::new(connect_store(config).await)
        .with_default_state(&config.default_state)
        .with_limit(config.search_limit);
    let outcome = search
        .search_with_limit(filters, point, limit.unwrap_or(config.search_limit))
        .await;

    let report = SearchReport {
        count: outcome.count(),
        source: outcome.source,
        offices: outcome.offices,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn connect_store(config: &AppConfig) -> Option<Arc<dyn OfficeStore>> {
    config.database_url.as_ref()?;
    match permitdb_db::connect_pool_from_config(config).await {
        Ok(pool) => Some(Arc::new(PgOfficeStore::new(pool))),
        Err(e) => {
            tracing::warn!(error = %e, "database unavailable; searching the fallback dataset");
            None
        }
    }
}
