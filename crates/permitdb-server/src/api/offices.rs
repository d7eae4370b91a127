use axum::{
    extract::{Query, State},
    Json,
};
use permitdb_core::{GeoPoint, OfficeFilters, RankedOffice, SearchSource};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Raw query string. Every field is text so a malformed coordinate degrades
/// to "no point" instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub(super) struct OfficeSearchParams {
    lat: Option<String>,
    lng: Option<String>,
    city: Option<String>,
    county: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct OfficeSearchResponse {
    success: bool,
    offices: Vec<RankedOffice>,
    count: usize,
    source: SearchSource,
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl OfficeSearchParams {
    /// A point only when both coordinates parse.
    fn point(&self) -> Option<GeoPoint> {
        let lat = parse_coordinate(self.lat.as_deref())?;
        let lng = parse_coordinate(self.lng.as_deref())?;
        Some(GeoPoint { lat, lng })
    }

    fn into_filters(self) -> OfficeFilters {
        OfficeFilters {
            state: self.state,
            city: self.city,
            county: self.county,
        }
    }
}

/// `GET /api/permit-offices`.
pub(super) async fn search_offices(
    State(state): State<AppState>,
    Query(params): Query<OfficeSearchParams>,
) -> Json<OfficeSearchResponse> {
    let point = params.point();
    let filters = params.into_filters();
    let outcome = state.search.search(&filters, point).await;

    Json(OfficeSearchResponse {
        success: true,
        count: outcome.count(),
        source: outcome.source,
        offices: outcome.offices,
    })
}
