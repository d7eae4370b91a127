use async_trait::async_trait;
use permitdb_core::{OfficeQuery, OfficeStore, PermitOffice, StoreError};
use sqlx::PgPool;

use crate::offices::search_permit_offices;

/// [`OfficeStore`] backed by the `permit_offices` table.
#[derive(Debug, Clone)]
pub struct PgOfficeStore {
    pool: PgPool,
}

impl PgOfficeStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfficeStore for PgOfficeStore {
    async fn search_offices(&self, query: &OfficeQuery) -> Result<Vec<PermitOffice>, StoreError> {
        let rows = search_permit_offices(&self.pool, query)
            .await
            .map_err(StoreError::new)?;

        rows.into_iter()
            .map(|row| PermitOffice::try_from(row).map_err(StoreError::new))
            .collect()
    }
}
