use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use permitdb_core::GeocodeResult;
use permitdb_geocode::ResolveError;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct GeocodeRequest {
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct GeocodeResponse {
    success: bool,
    #[serde(flatten)]
    result: GeocodeResult,
}

/// `POST /api/geocode`. An unreadable body counts as a missing address.
pub(super) async fn geocode_address(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(
                request_id = %req_id.0,
                error = %rejection,
                "unreadable geocode body"
            );
            GeocodeRequest::default()
        }
    };
    let address = request.address.unwrap_or_default();

    match state.geocoder.resolve(&address).await {
        Ok(result) => Ok(Json(GeocodeResponse {
            success: true,
            result,
        })),
        Err(e @ ResolveError::MissingAddress) => Err(ApiError::bad_request(e.to_string())),
        Err(e @ ResolveError::NotFound) => {
            tracing::info!(request_id = %req_id.0, "address could not be geocoded");
            Err(ApiError::not_found(e.to_string()))
        }
    }
}
