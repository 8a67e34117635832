use crate::map::models::Coordinates;
use crate::places::models::ResolvedPhoto;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    pub place_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_place_name: Option<String>,
}

impl From<ResolvedPhoto> for ImageResponse {
    fn from(photo: ResolvedPhoto) -> Self {
        Self {
            photo_url: photo.photo_url,
            source_place_name: photo.source_place_name,
        }
    }
}

// Wire shapes returned by the places directory.

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsPayload {
    #[serde(default)]
    pub photos: Vec<PhotoPayload>,
    pub location: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoPayload {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchNearbyPayload {
    #[serde(default)]
    pub places: Vec<NearbyPlacePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlacePayload {
    pub id: String,
    pub display_name: Option<LocalizedText>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}
