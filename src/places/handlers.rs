use crate::app_context::AppContext;
use crate::http::errors::ApiError;
use crate::http::query_params::{self, LatLngQueryParams, PlaceIdQueryParam};
use crate::places::google::GooglePlacesClient;
use crate::places::lookup;
use crate::places::models::PlaceId;
use crate::places::photos::{PhotoError, PhotoResolver};
use crate::places::responses::{ImageResponse, PlaceResponse};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn place(
    query: Result<Query<LatLngQueryParams>, QueryRejection>,
    State(app_context): State<AppContext<GooglePlacesClient>>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let Query(params) = query.map_err(query_params::rejected)?;
    let at = query_params::coordinates(
        params.lat.as_deref(),
        params.lng.as_deref(),
        "Latitude and longitude are required",
    )?;
    let place_id = lookup::nearest_place(&app_context.places, at)
        .await
        .map_err(ApiError::upstream("Failed to find place"))?
        .ok_or(ApiError::NotFound("No place found at this location"))?;
    tracing::info!(%place_id, "Found a place for the coordinates.");
    Ok(Json(PlaceResponse {
        place_id: place_id.into_inner(),
    }))
}

#[axum::debug_handler]
pub async fn images(
    query: Result<Query<PlaceIdQueryParam>, QueryRejection>,
    State(app_context): State<AppContext<GooglePlacesClient>>,
) -> Result<Json<ImageResponse>, ApiError> {
    let Query(params) = query.map_err(query_params::rejected)?;
    let place_id = query_params::required(params.place_id.as_deref(), "Place ID is required")?;
    let photo = PhotoResolver::new(&app_context.places, &app_context.photo_urls)
        .resolve(&PlaceId::new(place_id))
        .await
        .map_err(|err| match err {
            PhotoError::NoPhotoOrLocation => {
                ApiError::NotFound("No photos or location data found for this place")
            }
            PhotoError::NoPhotosInArea => ApiError::NotFound("No photos found in this area"),
            PhotoError::Upstream(source) => ApiError::Upstream {
                message: "Failed to fetch place photo",
                source,
            },
        })?;
    Ok(Json(photo.into()))
}
