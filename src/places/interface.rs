use crate::map::models::Coordinates;
use crate::places::models::{NearbyPlace, PlaceDetails, PlaceId};
use crate::upstream::UpstreamError;

pub trait PlacesDirectory {
    /// Photos and location of a single place.
    async fn place_details(&self, place_id: &PlaceId) -> Result<PlaceDetails, UpstreamError>;

    /// Places inside the circle, in the order the directory ranks them.
    async fn search_nearby(
        &self,
        center: Coordinates,
        radius_meters: f64,
        max_results: u32,
    ) -> Result<Vec<NearbyPlace>, UpstreamError>;
}
