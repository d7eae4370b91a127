//! Great-circle distance and distance ranking.

use std::cmp::Ordering;

use crate::offices::{GeoPoint, PermitOffice, RankedOffice};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance in miles between two points given in decimal degrees.
#[must_use]
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Ascending order with unknown distances after every known one.
#[must_use]
pub fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Attach distances from `point` and sort nearest first.
///
/// Without a point the input order is kept and every distance is `None`.
/// The sort is stable, so offices at equal (or unknown) distance keep their
/// relative input order.
#[must_use]
pub fn rank_offices(offices: Vec<PermitOffice>, point: Option<GeoPoint>) -> Vec<RankedOffice> {
    let mut ranked: Vec<RankedOffice> = offices
        .into_iter()
        .map(|office| {
            let distance = point
                .zip(office.point())
                .map(|(from, to)| distance_miles(from.lat, from.lng, to.lat, to.lng));
            RankedOffice {
                office,
                distance_miles: distance,
            }
        })
        .collect();

    if point.is_some() {
        ranked.sort_by(|a, b| compare_distance(a.distance_miles, b.distance_miles));
    }

    ranked
}
