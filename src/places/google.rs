use crate::map::models::Coordinates;
use crate::places::interface::PlacesDirectory;
use crate::places::models::{NearbyPlace, PlaceDetails, PlaceId, PlacePhotoRef};
use crate::places::requests::SearchNearbyRequest;
use crate::places::responses::{PlaceDetailsPayload, SearchNearbyPayload};
use crate::places::PlacesConfig;
use crate::upstream::{self, UpstreamError};
use reqwest::Client;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Client for the Places API (v1), authenticated with an API key header.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    http: Client,
    config: PlacesConfig,
}

impl GooglePlacesClient {
    const UPSTREAM: &'static str = "places directory";
    const DETAILS_FIELD_MASK: &'static str = "photos,location";
    const NEARBY_FIELD_MASK: &'static str = "places.id,places.displayName";

    pub fn new(http: Client, config: PlacesConfig) -> Self {
        Self { http, config }
    }
}

impl PlacesDirectory for GooglePlacesClient {
    async fn place_details(&self, place_id: &PlaceId) -> Result<PlaceDetails, UpstreamError> {
        tracing::debug!(upstream = Self::UPSTREAM, %place_id, "Fetching place details.");
        let response = self
            .http
            .get(self.config.endpoint(["v1", "places", place_id.as_ref()]))
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(FIELD_MASK_HEADER, Self::DETAILS_FIELD_MASK)
            .send()
            .await?;
        let payload: PlaceDetailsPayload = upstream::decode_json(Self::UPSTREAM, response).await?;
        Ok(PlaceDetails {
            photos: payload
                .photos
                .into_iter()
                .map(|photo| PlacePhotoRef::new(photo.name))
                .collect(),
            location: payload.location,
        })
    }

    async fn search_nearby(
        &self,
        center: Coordinates,
        radius_meters: f64,
        max_results: u32,
    ) -> Result<Vec<NearbyPlace>, UpstreamError> {
        tracing::debug!(
            upstream = Self::UPSTREAM,
            latitude = center.latitude,
            longitude = center.longitude,
            radius_meters,
            "Searching nearby places."
        );
        let response = self
            .http
            .post(self.config.endpoint(["v1", "places:searchNearby"]))
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(FIELD_MASK_HEADER, Self::NEARBY_FIELD_MASK)
            .json(&SearchNearbyRequest::new(center, radius_meters, max_results))
            .send()
            .await?;
        let payload: SearchNearbyPayload = upstream::decode_json(Self::UPSTREAM, response).await?;
        Ok(payload
            .places
            .into_iter()
            .map(|place| NearbyPlace {
                id: PlaceId::new(place.id),
                display_name: place.display_name.map(|name| name.text),
            })
            .collect())
    }
}
