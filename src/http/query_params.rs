use crate::http::errors::ApiError;
use crate::map::models::Coordinates;
use axum::extract::rejection::QueryRejection;
use serde::{Deserialize, Serialize};

// Every parameter is optional at the extractor level so that a missing value yields a
// JSON `{"error": ...}` body instead of axum's plain-text rejection.

#[derive(Serialize, Deserialize)]
pub struct LatLngQueryParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LatLonQueryParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceIdQueryParam {
    pub place_id: Option<String>,
}

pub const NOT_A_NUMBER_MESSAGE: &str = "Latitude and longitude must be numbers";
pub const MALFORMED_QUERY_MESSAGE: &str = "Malformed query string";

pub fn rejected(rejection: QueryRejection) -> ApiError {
    tracing::debug!(%rejection, "Rejecting query string.");
    ApiError::Validation(MALFORMED_QUERY_MESSAGE)
}

pub fn required<'a>(
    value: Option<&'a str>,
    missing_message: &'static str,
) -> Result<&'a str, ApiError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(ApiError::Validation(missing_message))
}

pub fn coordinates(
    lat: Option<&str>,
    lng: Option<&str>,
    missing_message: &'static str,
) -> Result<Coordinates, ApiError> {
    let lat = required(lat, missing_message)?;
    let lng = required(lng, missing_message)?;
    Ok(Coordinates::new(parse_degrees(lat)?, parse_degrees(lng)?))
}

fn parse_degrees(raw: &str) -> Result<f64, ApiError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or(ApiError::Validation(NOT_A_NUMBER_MESSAGE))
}
