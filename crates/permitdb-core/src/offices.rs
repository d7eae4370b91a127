//! Permit office records as held by the office store.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

/// Generates `as_str`, `Display` and `FromStr` for a unit enum stored as text.
macro_rules! text_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(CoreError::InvalidEnumValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Government level that issues the permits.
///
/// Variant order matches the text ordering used by the store's
/// `ORDER BY jurisdiction_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionType {
    City,
    County,
    SpecialDistrict,
    State,
}

text_enum!(JurisdictionType, "jurisdiction_type", {
    City => "city",
    County => "county",
    SpecialDistrict => "special_district",
    State => "state",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficeType {
    Building,
    Planning,
    Zoning,
    Combined,
    Other,
}

text_enum!(OfficeType, "office_type", {
    Building => "building",
    Planning => "planning",
    Zoning => "zoning",
    Combined => "combined",
    Other => "other",
});

/// How the record entered the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Crawled,
    Api,
    Manual,
}

text_enum!(DataSource, "data_source", {
    Crawled => "crawled",
    Api => "api",
    Manual => "manual",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlFrequency {
    Daily,
    Weekly,
    Monthly,
}

text_enum!(CrawlFrequency, "crawl_frequency", {
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
});

/// A government office that issues building-related permits.
///
/// Hours are free text exactly as published by the office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermitOffice {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub city: String,
    pub county: String,
    pub state: String,
    pub jurisdiction_type: JurisdictionType,

    pub department_name: String,
    pub office_type: OfficeType,

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
    /// `GeoJSON` polygon. Not used for ranking.
    pub service_area_bounds: Option<serde_json::Value>,

    pub data_source: DataSource,
    pub last_verified: Option<DateTime<Utc>>,
    pub crawl_frequency: CrawlFrequency,
    pub active: bool,
}

impl PermitOffice {
    /// Office coordinates, when both are known.
    #[must_use]
    pub fn point(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A permit office with its distance from the search point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOffice {
    #[serde(flatten)]
    pub office: PermitOffice,
    /// Great-circle distance in miles; `None` when the search had no point
    /// or the office has no coordinates.
    #[serde(rename = "distance")]
    pub distance_miles: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_type_round_trips_through_text() {
        let parsed: JurisdictionType = "special_district".parse().expect("parse");
        assert_eq!(parsed, JurisdictionType::SpecialDistrict);
        assert_eq!(parsed.to_string(), "special_district");
    }

    #[test]
    fn jurisdiction_type_order_matches_text_order() {
        let mut texts = ["state", "special_district", "county", "city"];
        texts.sort_unstable();
        let mut variants = [
            JurisdictionType::State,
            JurisdictionType::SpecialDistrict,
            JurisdictionType::County,
            JurisdictionType::City,
        ];
        variants.sort();
        let from_variants: Vec<&str> = variants.iter().map(JurisdictionType::as_str).collect();
        assert_eq!(from_variants, texts);
    }

    #[test]
    fn unknown_office_type_is_rejected() {
        let err = "permits".parse::<OfficeType>().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidEnumValue { field: "office_type", ref value } if value == "permits"
        ));
    }

    #[test]
    fn office_enums_serialize_as_store_text() {
        assert_eq!(
            serde_json::to_string(&JurisdictionType::SpecialDistrict).unwrap(),
            "\"special_district\""
        );
        assert_eq!(serde_json::to_string(&DataSource::Api).unwrap(), "\"api\"");
        assert_eq!(
            serde_json::to_string(&CrawlFrequency::Monthly).unwrap(),
            "\"monthly\""
        );
    }
}
