use crate::cli::ServeArgs;
use crate::upstream;
use url::Url;

pub mod google;
pub mod handlers;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod photos;
pub mod requests;
pub mod responses;

/// Places directory settings, resolved once at startup and handed to whoever needs them.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: Url,
}

impl PlacesConfig {
    pub fn endpoint<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Url {
        upstream::endpoint(&self.base_url, segments)
    }
}

pub fn init(args: &ServeArgs) -> PlacesConfig {
    if args.google_maps_api_key.trim().is_empty() {
        tracing::warn!("The Google Maps API key is empty. Place and image lookups won't work.");
    }
    PlacesConfig {
        api_key: args.google_maps_api_key.clone(),
        base_url: args.places_api_url.clone(),
    }
}
