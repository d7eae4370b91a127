//! In-process [`OfficeStore`] over a fixed set of offices.

use async_trait::async_trait;

use crate::fallback::contains_ignore_case;
use crate::offices::PermitOffice;
use crate::search::{OfficeQuery, OfficeStore, StoreError};

/// Applies the same filter, ordering and limit rules as the Postgres store.
#[derive(Debug, Clone, Default)]
pub struct MemoryOfficeStore {
    offices: Vec<PermitOffice>,
}

impl MemoryOfficeStore {
    #[must_use]
    pub fn new(offices: Vec<PermitOffice>) -> Self {
        Self { offices }
    }
}

#[async_trait]
impl OfficeStore for MemoryOfficeStore {
    async fn search_offices(&self, query: &OfficeQuery) -> Result<Vec<PermitOffice>, StoreError> {
        let mut rows: Vec<PermitOffice> = self
            .offices
            .iter()
            .filter(|o| o.active && o.state == query.state)
            .filter(|o| {
                query
                    .city
                    .as_deref()
                    .is_none_or(|c| contains_ignore_case(&o.city, c))
            })
            .filter(|o| {
                query
                    .county
                    .as_deref()
                    .is_none_or(|c| contains_ignore_case(&o.county, c))
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            (a.jurisdiction_type.as_str(), a.city.as_str())
                .cmp(&(b.jurisdiction_type.as_str(), b.city.as_str()))
        });
        rows.truncate(query.limit);
        Ok(rows)
    }
}
