use crate::cli::ServeArgs;
use crate::places::google::GooglePlacesClient;
use crate::places::interface::PlacesDirectory;
use crate::places::photos::PhotoUrlBuilder;
use crate::upstream::{self, UpstreamError};
use crate::weather::client::WeatherClient;
use crate::{places, weather};
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext<PD: PlacesDirectory> {
    pub places: PD,
    pub photo_urls: PhotoUrlBuilder,
    pub weather: WeatherClient,
}

pub fn init(args: &ServeArgs) -> Result<AppContext<GooglePlacesClient>, UpstreamError> {
    let http = upstream::client(Duration::from_secs(args.upstream_timeout_secs))?;
    let places_config = places::init(args);
    Ok(AppContext {
        places: GooglePlacesClient::new(http.clone(), places_config.clone()),
        photo_urls: PhotoUrlBuilder::new(places_config),
        weather: weather::init(args, http),
    })
}
