//! Write operations for the `permit_offices` table.

use permitdb_core::PermitOffice;
use sqlx::PgPool;

use crate::DbError;

/// Upsert offices keyed on `(city, county, department_name)`.
///
/// Returns the number of offices processed. All upserts run inside a single
/// transaction; if any fails the whole batch is rolled back. Existing rows
/// keep their `id` and `created_at`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn upsert_permit_offices(
    pool: &PgPool,
    offices: &[PermitOffice],
) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;

    for office in offices {
        sqlx::query(
            "INSERT INTO permit_offices ( \
                 id, city, county, state, jurisdiction_type, department_name, office_type, \
                 address, phone, email, website, \
                 hours_monday, hours_tuesday, hours_wednesday, hours_thursday, \
                 hours_friday, hours_saturday, hours_sunday, \
                 building_permits, electrical_permits, plumbing_permits, mechanical_permits, \
                 zoning_permits, planning_review, inspections, \
                 online_applications, online_payments, permit_tracking, online_portal_url, \
                 latitude, longitude, service_area_bounds, \
                 data_source, last_verified, crawl_frequency, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                     $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, \
                     $31, $32, $33, $34, $35, $36) \
             ON CONFLICT (city, county, department_name) DO UPDATE SET \
                 state = EXCLUDED.state, \
                 jurisdiction_type = EXCLUDED.jurisdiction_type, \
                 office_type = EXCLUDED.office_type, \
                 address = EXCLUDED.address, \
                 phone = EXCLUDED.phone, \
                 email = EXCLUDED.email, \
                 website = EXCLUDED.website, \
                 hours_monday = EXCLUDED.hours_monday, \
                 hours_tuesday = EXCLUDED.hours_tuesday, \
                 hours_wednesday = EXCLUDED.hours_wednesday, \
                 hours_thursday = EXCLUDED.hours_thursday, \
                 hours_friday = EXCLUDED.hours_friday, \
                 hours_saturday = EXCLUDED.hours_saturday, \
                 hours_sunday = EXCLUDED.hours_sunday, \
                 building_permits = EXCLUDED.building_permits, \
                 electrical_permits = EXCLUDED.electrical_permits, \
                 plumbing_permits = EXCLUDED.plumbing_permits, \
                 mechanical_permits = EXCLUDED.mechanical_permits, \
                 zoning_permits = EXCLUDED.zoning_permits, \
                 planning_review = EXCLUDED.planning_review, \
                 inspections = EXCLUDED.inspections, \
                 online_applications = EXCLUDED.online_applications, \
                 online_payments = EXCLUDED.online_payments, \
                 permit_tracking = EXCLUDED.permit_tracking, \
                 online_portal_url = EXCLUDED.online_portal_url, \
                 latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 service_area_bounds = EXCLUDED.service_area_bounds, \
                 data_source = EXCLUDED.data_source, \
                 last_verified = EXCLUDED.last_verified, \
                 crawl_frequency = EXCLUDED.crawl_frequency, \
                 active = EXCLUDED.active, \
                 updated_at = NOW()",
        )
        .bind(office.id)
        .bind(&office.city)
        .bind(&office.county)
        .bind(&office.state)
        .bind(office.jurisdiction_type.as_str())
        .bind(&office.department_name)
        .bind(office.office_type.as_str())
        .bind(&office.address)
        .bind(&office.phone)
        .bind(&office.email)
        .bind(&office.website)
        .bind(&office.hours_monday)
        .bind(&office.hours_tuesday)
        .bind(&office.hours_wednesday)
        .bind(&office.hours_thursday)
        .bind(&office.hours_friday)
        .bind(&office.hours_saturday)
        .bind(&office.hours_sunday)
        .bind(office.building_permits)
        .bind(office.electrical_permits)
        .bind(office.plumbing_permits)
        .bind(office.mechanical_permits)
        .bind(office.zoning_permits)
        .bind(office.planning_review)
        .bind(office.inspections)
        .bind(office.online_applications)
        .bind(office.online_payments)
        .bind(office.permit_tracking)
        .bind(&office.online_portal_url)
        .bind(office.latitude)
        .bind(office.longitude)
        .bind(&office.service_area_bounds)
        .bind(office.data_source.as_str())
        .bind(office.last_verified)
        .bind(office.crawl_frequency.as_str())
        .bind(office.active)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::debug!(count = offices.len(), "permit offices upserted");
    Ok(offices.len())
}
