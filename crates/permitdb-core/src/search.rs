//! Permit office search: store query with an embedded-dataset fallback,
//! ranked by distance from an optional point.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::rank_offices;
use crate::fallback;
use crate::offices::{GeoPoint, PermitOffice, RankedOffice};

/// Row cap for the store path.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Jurisdiction searched when the caller gives no state.
pub const DEFAULT_STATE: &str = "GA";

/// A failure reading from the office store.
#[derive(Debug, Error)]
#[error("office store query failed: {0}")]
pub struct StoreError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// Normalized filters handed to an [`OfficeStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeQuery {
    /// Uppercased two-letter code, matched exactly.
    pub state: String,
    /// Case-insensitive substring of `city`.
    pub city: Option<String>,
    /// Case-insensitive substring of `county`.
    pub county: Option<String>,
    pub limit: usize,
}

/// Read access to the external permit office store.
///
/// Implementations return only `active` offices matching every filter,
/// ordered by `jurisdiction_type` then `city`, at most `query.limit` rows.
#[async_trait]
pub trait OfficeStore: Send + Sync {
    async fn search_offices(&self, query: &OfficeQuery) -> Result<Vec<PermitOffice>, StoreError>;
}

/// Raw search filters as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OfficeFilters {
    pub state: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
}

impl OfficeFilters {
    fn to_query(&self, default_state: &str, limit: usize) -> OfficeQuery {
        OfficeQuery {
            state: non_blank(self.state.as_deref())
                .unwrap_or(default_state)
                .to_uppercase(),
            city: non_blank(self.city.as_deref()).map(str::to_string),
            county: non_blank(self.county.as_deref()).map(str::to_string),
            limit,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Where a search's offices came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Database,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub offices: Vec<RankedOffice>,
    pub source: SearchSource,
}

impl SearchOutcome {
    #[must_use]
    pub fn count(&self) -> usize {
        self.offices.len()
    }
}

/// Office search over an optional store, falling back to the embedded
/// dataset.
///
/// With no store configured every search takes the fallback path.
pub struct OfficeSearch {
    store: Option<Arc<dyn OfficeStore>>,
    default_state: String,
    limit: usize,
}

impl OfficeSearch {
    #[must_use]
    pub fn new(store: Option<Arc<dyn OfficeStore>>) -> Self {
        Self {
            store,
            default_state: DEFAULT_STATE.to_string(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    #[must_use]
    pub fn with_default_state(mut self, state: &str) -> Self {
        self.default_state = state.to_uppercase();
        self
    }

    /// Sets the store-path row cap. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Search with the configured row cap.
    pub async fn search(&self, filters: &OfficeFilters, point: Option<GeoPoint>) -> SearchOutcome {
        self.search_with_limit(filters, point, self.limit).await
    }

    /// Search the store, or the embedded dataset when the store fails or
    /// has no matching rows, then rank by distance from `point`.
    ///
    /// Store failures never surface to the caller.
    pub async fn search_with_limit(
        &self,
        filters: &OfficeFilters,
        point: Option<GeoPoint>,
        limit: usize,
    ) -> SearchOutcome {
        let query = filters.to_query(&self.default_state, limit.max(1));

        if let Some(offices) = self.query_store(&query).await {
            return SearchOutcome {
                offices: rank_offices(offices, point),
                source: SearchSource::Database,
            };
        }

        let offices = fallback::matching_offices(query.city.as_deref(), query.county.as_deref());
        tracing::debug!(
            count = offices.len(),
            city = query.city.as_deref(),
            county = query.county.as_deref(),
            "serving offices from fallback dataset"
        );
        SearchOutcome {
            offices: rank_offices(offices, point),
            source: SearchSource::Fallback,
        }
    }

    /// Returns `None` when the fallback dataset should be used instead.
    async fn query_store(&self, query: &OfficeQuery) -> Option<Vec<PermitOffice>> {
        let Some(store) = self.store.as_ref() else {
            tracing::debug!("no office store configured");
            return None;
        };

        match store.search_offices(query).await {
            Ok(mut offices) => {
                offices.retain(|o| o.active);
                offices.truncate(query.limit);
                if offices.is_empty() {
                    tracing::info!(
                        state = %query.state,
                        city = query.city.as_deref(),
                        county = query.county.as_deref(),
                        "office store returned no rows; using fallback dataset"
                    );
                    None
                } else {
                    Some(offices)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "office store query failed; using fallback dataset");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
