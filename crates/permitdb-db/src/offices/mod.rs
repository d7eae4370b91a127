//! Database operations for the `permit_offices` table.

mod read;
mod types;
mod write;

pub use read::search_permit_offices;
pub use types::PermitOfficeRow;
pub use write::upsert_permit_offices;

/// Column list shared by every `permit_offices` read.
const OFFICE_COLUMNS: &str = "id, created_at, updated_at, \
     city, county, state, jurisdiction_type, department_name, office_type, \
     address, phone, email, website, \
     hours_monday, hours_tuesday, hours_wednesday, hours_thursday, \
     hours_friday, hours_saturday, hours_sunday, \
     building_permits, electrical_permits, plumbing_permits, mechanical_permits, \
     zoning_permits, planning_review, inspections, \
     online_applications, online_payments, permit_tracking, online_portal_url, \
     latitude, longitude, service_area_bounds, \
     data_source, last_verified, crawl_frequency, active";
