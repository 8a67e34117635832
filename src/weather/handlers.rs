use crate::app_context::AppContext;
use crate::http::errors::ApiError;
use crate::http::query_params::{self, LatLonQueryParams};
use crate::places::google::GooglePlacesClient;
use crate::weather::format;
use crate::weather::responses::WeatherReport;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;

const FETCH_FAILED: &str = "Failed to fetch weather data";

#[axum::debug_handler]
pub async fn weather(
    query: Result<Query<LatLonQueryParams>, QueryRejection>,
    State(app_context): State<AppContext<GooglePlacesClient>>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Query(params) = query.map_err(query_params::rejected)?;
    let at = query_params::coordinates(
        params.lat.as_deref(),
        params.lon.as_deref(),
        "Latitude and longitude parameters are required",
    )?;
    let conditions = app_context
        .weather
        .current_conditions(at)
        .await
        .map_err(ApiError::upstream(FETCH_FAILED))?;
    let geocoding = app_context
        .weather
        .reverse_geocode(at)
        .await
        .map_err(ApiError::upstream(FETCH_FAILED))?;
    Ok(Json(format::report(at, conditions, geocoding)))
}
