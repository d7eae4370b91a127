//! Row types for the `permit_offices` table.

use chrono::{DateTime, Utc};
use permitdb_core::PermitOffice;
use uuid::Uuid;

use crate::DbError;

/// A row from the `permit_offices` table.
///
/// Enum columns are stored as text and validated when converting into a
/// [`PermitOffice`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PermitOfficeRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub city: String,
    pub county: String,
    pub state: String,
    pub jurisdiction_type: String,
    pub department_name: String,
    pub office_type: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours_monday: Option<String>,
    pub hours_tuesday: Option<String>,
    pub hours_wednesday: Option<String>,
    pub hours_thursday: Option<String>,
    pub hours_friday: Option<String>,
    pub hours_saturday: Option<String>,
    pub hours_sunday: Option<String>,
    pub building_permits: bool,
    pub electrical_permits: bool,
    pub plumbing_permits: bool,
    pub mechanical_permits: bool,
    pub zoning_permits: bool,
    pub planning_review: bool,
    pub inspections: bool,
    pub online_applications: bool,
    pub online_payments: bool,
    pub permit_tracking: bool,
    pub online_portal_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub service_area_bounds: Option<serde_json::Value>,
    pub data_source: String,
    pub last_verified: Option<DateTime<Utc>>,
    pub crawl_frequency: String,
    pub active: bool,
}

impl TryFrom<PermitOfficeRow> for PermitOffice {
    type Error = DbError;

    fn try_from(row: PermitOfficeRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid = |source| DbError::InvalidRow { id, source };

        Ok(PermitOffice {
            jurisdiction_type: row.jurisdiction_type.parse().map_err(invalid)?,
            office_type: row.office_type.parse().map_err(invalid)?,
            data_source: row.data_source.parse().map_err(invalid)?,
            crawl_frequency: row.crawl_frequency.parse().map_err(invalid)?,
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            city: row.city,
            county: row.county,
            state: row.state,
            department_name: row.department_name,
            address: row.address,
            phone: row.phone,
            email: row.email,
            website: row.website,
            hours_monday: row.hours_monday,
            hours_tuesday: row.hours_tuesday,
            hours_wednesday: row.hours_wednesday,
            hours_thursday: row.hours_thursday,
            hours_friday: row.hours_friday,
            hours_saturday: row.hours_saturday,
            hours_sunday: row.hours_sunday,
            building_permits: row.building_permits,
            electrical_permits: row.electrical_permits,
            plumbing_permits: row.plumbing_permits,
            mechanical_permits: row.mechanical_permits,
            zoning_permits: row.zoning_permits,
            planning_review: row.planning_review,
            inspections: row.inspections,
            online_applications: row.online_applications,
            online_payments: row.online_payments,
            permit_tracking: row.permit_tracking,
            online_portal_url: row.online_portal_url,
            latitude: row.latitude,
            longitude: row.longitude,
            service_area_bounds: row.service_area_bounds,
            last_verified: row.last_verified,
            active: row.active,
        })
    }
}
