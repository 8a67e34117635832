use crate::map::models::Coordinates;
use crate::places::interface::PlacesDirectory;
use crate::places::models::PlaceId;
use crate::upstream::UpstreamError;

pub const LOOKUP_RADIUS_METERS: f64 = 100.0;

/// The single most prominent place around `at`, if the directory knows any.
pub async fn nearest_place<PD: PlacesDirectory>(
    directory: &PD,
    at: Coordinates,
) -> Result<Option<PlaceId>, UpstreamError> {
    let places = directory
        .search_nearby(at, LOOKUP_RADIUS_METERS, 1)
        .await?;
    Ok(places.into_iter().next().map(|place| place.id))
}
