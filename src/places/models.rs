use crate::map::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PlaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resource name of a place photo, e.g. `places/<id>/photos/<ref>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacePhotoRef(String);

impl PlacePhotoRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<str> for PlacePhotoRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub photos: Vec<PlacePhotoRef>,
    pub location: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPlace {
    pub id: PlaceId,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPhoto {
    pub photo_url: String,
    /// Set only when the photo belongs to a place other than the requested one.
    pub source_place_name: Option<String>,
}
