//! Embedded Georgia permit office dataset.
//!
//! Read-only mirror used when the office store is unreachable or has no rows
//! for a search. Every record is a `const`, so the table needs no
//! initialization and is safe to read from any thread.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::offices::{CrawlFrequency, DataSource, JurisdictionType, OfficeType, PermitOffice};

/// Jurisdiction covered by the embedded dataset.
pub const FALLBACK_STATE: &str = "GA";

/// Unix timestamp of the last manual review of the table (2025-01-15 UTC).
const DATASET_VERIFIED_AT: i64 = 1_736_899_200;

const WEEKDAYS_8_TO_5: &str = "8:00 AM - 5:00 PM";
const WEEKDAYS_8_TO_430: &str = "8:00 AM - 4:30 PM";

#[derive(Debug, Clone, Copy)]
struct Services {
    building: bool,
    electrical: bool,
    plumbing: bool,
    mechanical: bool,
    zoning: bool,
    planning: bool,
    inspections: bool,
}

const FULL_SERVICE: Services = Services {
    building: true,
    electrical: true,
    plumbing: true,
    mechanical: true,
    zoning: true,
    planning: true,
    inspections: true,
};

const TRADE_PERMITS: Services = Services {
    building: true,
    electrical: true,
    plumbing: true,
    mechanical: true,
    zoning: false,
    planning: false,
    inspections: true,
};

const LAND_USE: Services = Services {
    building: false,
    electrical: false,
    plumbing: false,
    mechanical: false,
    zoning: true,
    planning: true,
    inspections: false,
};

#[derive(Debug, Clone, Copy)]
struct Online {
    applications: bool,
    payments: bool,
    tracking: bool,
    portal_url: Option<&'static str>,
}

const NO_PORTAL: Online = Online {
    applications: false,
    payments: false,
    tracking: false,
    portal_url: None,
};

#[derive(Debug, Clone, Copy)]
struct StaticOffice {
    id: u128,
    city: &'static str,
    county: &'static str,
    jurisdiction_type: JurisdictionType,
    department_name: &'static str,
    office_type: OfficeType,
    address: &'static str,
    website: Option<&'static str>,
    weekday_hours: &'static str,
    services: Services,
    online: Online,
    latitude: f64,
    longitude: f64,
}

const GEORGIA_OFFICES: &[StaticOffice] = &[
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0001,
        city: "Alpharetta",
        county: "Fulton",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Community Development Department",
        office_type: OfficeType::Combined,
        address: "2 Park Plaza, Alpharetta, GA 30009",
        website: Some("https://www.alpharetta.ga.us"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: FULL_SERVICE,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: None,
        },
        latitude: 34.0754,
        longitude: -84.2941,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0002,
        city: "Atlanta",
        county: "Fulton",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Office of Buildings",
        office_type: OfficeType::Building,
        address: "55 Trinity Ave SW, Suite 3900, Atlanta, GA 30303",
        website: Some("https://www.atlantaga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: TRADE_PERMITS,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: Some("https://aca-prod.accela.com/ATLANTA_GA"),
        },
        latitude: 33.7488,
        longitude: -84.3915,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0003,
        city: "Atlanta",
        county: "Fulton",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Office of Zoning and Development",
        office_type: OfficeType::Zoning,
        address: "55 Trinity Ave SW, Suite 3350, Atlanta, GA 30303",
        website: Some("https://www.atlantaga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: LAND_USE,
        online: Online {
            applications: true,
            payments: false,
            tracking: true,
            portal_url: Some("https://aca-prod.accela.com/ATLANTA_GA"),
        },
        latitude: 33.7488,
        longitude: -84.3915,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0004,
        city: "Augusta",
        county: "Richmond",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Planning and Development Department",
        office_type: OfficeType::Combined,
        address: "535 Telfair St, Augusta, GA 30901",
        website: Some("https://www.augustaga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: FULL_SERVICE,
        online: NO_PORTAL,
        latitude: 33.4735,
        longitude: -81.9640,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0005,
        city: "Columbus",
        county: "Muscogee",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Inspections and Code Enforcement",
        office_type: OfficeType::Building,
        address: "420 10th St, Columbus, GA 31901",
        website: Some("https://www.columbusga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: TRADE_PERMITS,
        online: NO_PORTAL,
        latitude: 32.4660,
        longitude: -84.9880,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0006,
        city: "Sandy Springs",
        county: "Fulton",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Community Development Department",
        office_type: OfficeType::Combined,
        address: "1 Galambos Way, Sandy Springs, GA 30328",
        website: Some("https://www.sandyspringsga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: FULL_SERVICE,
        online: Online {
            applications: true,
            payments: true,
            tracking: false,
            portal_url: None,
        },
        latitude: 33.9310,
        longitude: -84.3790,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0007,
        city: "Savannah",
        county: "Chatham",
        jurisdiction_type: JurisdictionType::City,
        department_name: "Development Services",
        office_type: OfficeType::Building,
        address: "5515 Abercorn St, Savannah, GA 31405",
        website: Some("https://www.savannahga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: TRADE_PERMITS,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: None,
        },
        latitude: 32.0240,
        longitude: -81.1105,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0008,
        city: "Athens",
        county: "Clarke",
        jurisdiction_type: JurisdictionType::County,
        department_name: "Building Permits and Inspections",
        office_type: OfficeType::Building,
        address: "120 W Dougherty St, Athens, GA 30601",
        website: Some("https://www.accgov.com"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: TRADE_PERMITS,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: None,
        },
        latitude: 33.9609,
        longitude: -83.3780,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_0009,
        city: "Decatur",
        county: "DeKalb",
        jurisdiction_type: JurisdictionType::County,
        department_name: "Department of Planning and Sustainability",
        office_type: OfficeType::Combined,
        address: "178 Sams St, Decatur, GA 30030",
        website: Some("https://www.dekalbcountyga.gov"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: FULL_SERVICE,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: None,
        },
        latitude: 33.7735,
        longitude: -84.2870,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_000a,
        city: "Lawrenceville",
        county: "Gwinnett",
        jurisdiction_type: JurisdictionType::County,
        department_name: "Planning and Development",
        office_type: OfficeType::Combined,
        address: "446 W Crogan St, Lawrenceville, GA 30046",
        website: Some("https://www.gwinnettcounty.com"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: FULL_SERVICE,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: None,
        },
        latitude: 33.9526,
        longitude: -83.9960,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_000b,
        city: "Macon",
        county: "Bibb",
        jurisdiction_type: JurisdictionType::County,
        department_name: "Business Development Services",
        office_type: OfficeType::Combined,
        address: "200 Cherry St, Macon, GA 31201",
        website: Some("https://www.maconbibb.us"),
        weekday_hours: WEEKDAYS_8_TO_430,
        services: FULL_SERVICE,
        online: NO_PORTAL,
        latitude: 32.8370,
        longitude: -83.6300,
    },
    StaticOffice {
        id: 0x5f1e_0c3a_7d2b_4e61_9a0c_6b1d_0000_000c,
        city: "Marietta",
        county: "Cobb",
        jurisdiction_type: JurisdictionType::County,
        department_name: "Community Development Agency",
        office_type: OfficeType::Combined,
        address: "1150 Powder Springs St, Marietta, GA 30064",
        website: Some("https://www.cobbcounty.org"),
        weekday_hours: WEEKDAYS_8_TO_5,
        services: FULL_SERVICE,
        online: Online {
            applications: true,
            payments: true,
            tracking: true,
            portal_url: None,
        },
        latitude: 33.9400,
        longitude: -84.5620,
    },
];

impl StaticOffice {
    fn matches(&self, city: Option<&str>, county: Option<&str>) -> bool {
        city.is_none_or(|c| contains_ignore_case(self.city, c))
            && county.is_none_or(|c| contains_ignore_case(self.county, c))
    }

    fn to_office(self) -> PermitOffice {
        let verified_at = DateTime::<Utc>::from_timestamp(DATASET_VERIFIED_AT, 0).unwrap_or_default();
        let weekday = Some(self.weekday_hours.to_string());

        PermitOffice {
            id: Uuid::from_u128(self.id),
            created_at: verified_at,
            updated_at: verified_at,
            city: self.city.to_string(),
            county: self.county.to_string(),
            state: FALLBACK_STATE.to_string(),
            jurisdiction_type: self.jurisdiction_type,
            department_name: self.department_name.to_string(),
            office_type: self.office_type,
            address: self.address.to_string(),
            phone: None,
            email: None,
            website: self.website.map(str::to_string),
            hours_monday: weekday.clone(),
            hours_tuesday: weekday.clone(),
            hours_wednesday: weekday.clone(),
            hours_thursday: weekday.clone(),
            hours_friday: weekday,
            hours_saturday: None,
            hours_sunday: None,
            building_permits: self.services.building,
            electrical_permits: self.services.electrical,
            plumbing_permits: self.services.plumbing,
            mechanical_permits: self.services.mechanical,
            zoning_permits: self.services.zoning,
            planning_review: self.services.planning,
            inspections: self.services.inspections,
            online_applications: self.online.applications,
            online_payments: self.online.payments,
            permit_tracking: self.online.tracking,
            online_portal_url: self.online.portal_url.map(str::to_string),
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            service_area_bounds: None,
            data_source: DataSource::Manual,
            last_verified: Some(verified_at),
            crawl_frequency: CrawlFrequency::Monthly,
            active: true,
        }
    }
}

/// Case-insensitive infix match, the same semantics as SQL `ILIKE '%needle%'`.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Every office in the embedded dataset, in dataset order
/// (jurisdiction type, then city).
#[must_use]
pub fn offices() -> Vec<PermitOffice> {
    GEORGIA_OFFICES.iter().map(|o| o.to_office()).collect()
}

/// Offices whose city and county contain the given filters, ignoring case.
///
/// A `None` filter matches every office.
#[must_use]
pub fn matching_offices(city: Option<&str>, county: Option<&str>) -> Vec<PermitOffice> {
    GEORGIA_OFFICES
        .iter()
        .filter(|o| o.matches(city, county))
        .map(|o| o.to_office())
        .collect()
}
