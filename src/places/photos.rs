use crate::places::interface::PlacesDirectory;
use crate::places::models::{PlaceId, PlacePhotoRef, ResolvedPhoto};
use crate::places::PlacesConfig;
use crate::upstream::UpstreamError;

/// Nearby search radii, tried in order until some place has a photo.
pub const SEARCH_RADII_METERS: [f64; 3] = [200.0, 500.0, 1000.0];
pub const MAX_NEARBY_CANDIDATES: u32 = 10;
pub const PHOTO_MAX_HEIGHT_PX: u32 = 1080;
pub const PHOTO_MAX_WIDTH_PX: u32 = 1920;

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("the place has neither photos nor a location")]
    NoPhotoOrLocation,
    #[error("no photos found in this area")]
    NoPhotosInArea,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Builds the media URL for a photo reference. Pure: same reference, same URL.
#[derive(Debug, Clone)]
pub struct PhotoUrlBuilder {
    config: PlacesConfig,
}

impl PhotoUrlBuilder {
    pub fn new(config: PlacesConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, photo: &PlacePhotoRef) -> String {
        let mut url = self.config.endpoint(
            std::iter::once("v1")
                .chain(photo.as_ref().split('/'))
                .chain(std::iter::once("media")),
        );
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key)
            .append_pair("maxHeightPx", &PHOTO_MAX_HEIGHT_PX.to_string())
            .append_pair("maxWidthPx", &PHOTO_MAX_WIDTH_PX.to_string());
        url.into()
    }
}

pub struct PhotoResolver<'a, PD: PlacesDirectory> {
    directory: &'a PD,
    urls: &'a PhotoUrlBuilder,
}

impl<'a, PD> PhotoResolver<'a, PD>
where
    PD: PlacesDirectory,
{
    pub fn new(directory: &'a PD, urls: &'a PhotoUrlBuilder) -> Self {
        Self { directory, urls }
    }

    /// Photo of the target place, or of the closest neighbour that has one.
    ///
    /// Neighbours are probed one by one in search order; a wider radius is only
    /// searched once every candidate of the narrower one came up empty.
    pub async fn resolve(&self, target: &PlaceId) -> Result<ResolvedPhoto, PhotoError> {
        let details = self.directory.place_details(target).await?;
        if let Some(photo) = details.photos.first() {
            tracing::info!(place_id = %target, "Found a photo of the requested place.");
            return Ok(ResolvedPhoto {
                photo_url: self.urls.build(photo),
                source_place_name: None,
            });
        }
        let Some(location) = details.location else {
            tracing::info!(place_id = %target, "The place has no photos and no location.");
            return Err(PhotoError::NoPhotoOrLocation);
        };

        for radius in SEARCH_RADII_METERS {
            tracing::info!(place_id = %target, radius, "Searching nearby places for a photo.");
            let candidates = self
                .directory
                .search_nearby(location, radius, MAX_NEARBY_CANDIDATES)
                .await?;
            for candidate in candidates.iter().filter(|place| &place.id != target) {
                let details = self.directory.place_details(&candidate.id).await?;
                if let Some(photo) = details.photos.first() {
                    let source_place_name = candidate
                        .display_name
                        .clone()
                        .unwrap_or_else(|| candidate.id.to_string());
                    tracing::info!(
                        place_id = %target,
                        source = %source_place_name,
                        radius,
                        "Found a photo of a nearby place."
                    );
                    return Ok(ResolvedPhoto {
                        photo_url: self.urls.build(photo),
                        source_place_name: Some(source_place_name),
                    });
                }
            }
        }

        tracing::info!(place_id = %target, "No photos found in any nearby place.");
        Err(PhotoError::NoPhotosInArea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::models::Coordinates;
    use crate::places::models::{NearbyPlace, PlaceDetails};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use url::Url;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Details(String),
        Nearby(f64),
    }

    #[derive(Default)]
    struct InMemoryDirectory {
        details: HashMap<String, PlaceDetails>,
        nearby: HashMap<u64, Vec<NearbyPlace>>,
        calls: Mutex<Vec<Call>>,
    }

    impl InMemoryDirectory {
        fn with_place(mut self, id: &str, photos: &[&str], location: Option<Coordinates>) -> Self {
            self.details.insert(
                id.to_string(),
                PlaceDetails {
                    photos: photos.iter().map(|name| PlacePhotoRef::new(*name)).collect(),
                    location,
                },
            );
            self
        }

        fn with_nearby(mut self, radius: u64, ids: &[&str]) -> Self {
            let places = ids
                .iter()
                .map(|id| NearbyPlace {
                    id: PlaceId::new(*id),
                    display_name: Some(format!("{} name", id)),
                })
                .collect();
            self.nearby.insert(radius, places);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn nearby_radii(&self) -> Vec<f64> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::Nearby(radius) => Some(radius),
                    Call::Details(_) => None,
                })
                .collect()
        }
    }

    impl PlacesDirectory for InMemoryDirectory {
        async fn place_details(&self, place_id: &PlaceId) -> Result<PlaceDetails, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Details(place_id.to_string()));
            Ok(self
                .details
                .get(place_id.as_ref())
                .cloned()
                .unwrap_or_default())
        }

        async fn search_nearby(
            &self,
            _center: Coordinates,
            radius_meters: f64,
            max_results: u32,
        ) -> Result<Vec<NearbyPlace>, UpstreamError> {
            assert_eq!(max_results, MAX_NEARBY_CANDIDATES);
            self.calls.lock().unwrap().push(Call::Nearby(radius_meters));
            Ok(self
                .nearby
                .get(&(radius_meters as u64))
                .cloned()
                .unwrap_or_default())
        }
    }

    fn urls() -> PhotoUrlBuilder {
        PhotoUrlBuilder::new(PlacesConfig {
            api_key: String::from("secret"),
            base_url: Url::parse("https://places.example.com/").unwrap(),
        })
    }

    fn here() -> Option<Coordinates> {
        Some(Coordinates::new(40.7, -74.0))
    }

    #[test]
    fn photo_url_embeds_reference_key_and_dimensions() {
        let url = urls().build(&PlacePhotoRef::new("places/abc/photos/p1"));
        assert_eq!(
            url,
            "https://places.example.com/v1/places/abc/photos/p1/media\
            ?key=secret&maxHeightPx=1080&maxWidthPx=1920"
        );
        assert_eq!(url, urls().build(&PlacePhotoRef::new("places/abc/photos/p1")));
    }

    #[tokio::test]
    async fn own_photo_wins_without_nearby_search() {
        let directory = InMemoryDirectory::default().with_place(
            "target",
            &["places/target/photos/a", "places/target/photos/b"],
            here(),
        );
        let urls = urls();

        let photo = PhotoResolver::new(&directory, &urls)
            .resolve(&PlaceId::new("target"))
            .await
            .unwrap();

        assert_eq!(photo.photo_url, urls.build(&PlacePhotoRef::new("places/target/photos/a")));
        assert_eq!(photo.source_place_name, None);
        assert_eq!(directory.calls(), vec![Call::Details(String::from("target"))]);
    }

    #[tokio::test]
    async fn no_photo_and_no_location_is_not_found() {
        let directory = InMemoryDirectory::default().with_place("target", &[], None);
        let urls = urls();

        let result = PhotoResolver::new(&directory, &urls)
            .resolve(&PlaceId::new("target"))
            .await;

        assert!(matches!(result, Err(PhotoError::NoPhotoOrLocation)));
        assert!(directory.nearby_radii().is_empty());
    }

    #[tokio::test]
    async fn radii_widen_until_a_neighbour_has_a_photo() {
        let directory = InMemoryDirectory::default()
            .with_place("target", &[], here())
            .with_place("bare", &[], here())
            .with_place("cafe", &["places/cafe/photos/c"], here())
            .with_place("museum", &["places/museum/photos/m"], here())
            .with_nearby(200, &["target", "bare"])
            .with_nearby(500, &["target", "bare", "cafe", "museum"])
            .with_nearby(1000, &["museum"]);
        let urls = urls();

        let photo = PhotoResolver::new(&directory, &urls)
            .resolve(&PlaceId::new("target"))
            .await
            .unwrap();

        assert_eq!(photo.photo_url, urls.build(&PlacePhotoRef::new("places/cafe/photos/c")));
        assert_eq!(photo.source_place_name.as_deref(), Some("cafe name"));
        assert_eq!(
            directory.calls(),
            vec![
                Call::Details(String::from("target")),
                Call::Nearby(200.0),
                Call::Details(String::from("bare")),
                Call::Nearby(500.0),
                Call::Details(String::from("bare")),
                Call::Details(String::from("cafe")),
            ]
        );
    }

    #[tokio::test]
    async fn exhausted_radii_are_not_found() {
        let directory = InMemoryDirectory::default()
            .with_place("target", &[], here())
            .with_nearby(200, &["target"])
            .with_nearby(1000, &["bare"]);
        let urls = urls();

        let result = PhotoResolver::new(&directory, &urls)
            .resolve(&PlaceId::new("target"))
            .await;

        assert!(matches!(result, Err(PhotoError::NoPhotosInArea)));
        assert_eq!(directory.nearby_radii(), vec![200.0, 500.0, 1000.0]);
    }

    #[tokio::test]
    async fn neighbour_without_display_name_is_named_by_id() {
        let mut directory = InMemoryDirectory::default()
            .with_place("target", &[], here())
            .with_place("nameless", &["places/nameless/photos/n"], here());
        directory.nearby.insert(
            200,
            vec![NearbyPlace {
                id: PlaceId::new("nameless"),
                display_name: None,
            }],
        );
        let urls = urls();

        let photo = PhotoResolver::new(&directory, &urls)
            .resolve(&PlaceId::new("target"))
            .await
            .unwrap();

        assert_eq!(photo.source_place_name.as_deref(), Some("nameless"));
    }
}
