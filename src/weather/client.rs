use crate::map::models::Coordinates;
use crate::upstream::{self, UpstreamError};
use crate::weather::models::{CurrentConditions, ForecastPayload, ReverseGeocoding};
use reqwest::Client;
use url::Url;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    forecast_url: Url,
    geocoding_url: Url,
}

impl WeatherClient {
    const CURRENT_FIELDS: &'static str = "temperature_2m,wind_speed_10m,relative_humidity_2m";

    pub fn new(http: Client, forecast_url: Url, geocoding_url: Url) -> Self {
        Self {
            http,
            forecast_url,
            geocoding_url,
        }
    }

    pub async fn current_conditions(
        &self,
        at: Coordinates,
    ) -> Result<CurrentConditions, UpstreamError> {
        const UPSTREAM: &str = "weather forecast";
        tracing::debug!(upstream = UPSTREAM, ?at, "Fetching current weather.");
        let response = self
            .http
            .get(upstream::endpoint(&self.forecast_url, ["v1", "forecast"]))
            .query(&[
                ("latitude", at.latitude.to_string()),
                ("longitude", at.longitude.to_string()),
                ("current", Self::CURRENT_FIELDS.to_string()),
                ("timezone", String::from("auto")),
                ("wind_speed_unit", String::from("ms")),
            ])
            .send()
            .await?;
        let payload: ForecastPayload = upstream::decode_json(UPSTREAM, response).await?;
        Ok(payload.current)
    }

    pub async fn reverse_geocode(
        &self,
        at: Coordinates,
    ) -> Result<ReverseGeocoding, UpstreamError> {
        const UPSTREAM: &str = "reverse geocoder";
        tracing::debug!(upstream = UPSTREAM, ?at, "Reverse geocoding.");
        let response = self
            .http
            .get(upstream::endpoint(&self.geocoding_url, ["reverse"]))
            .query(&[
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("format", String::from("json")),
            ])
            .send()
            .await?;
        upstream::decode_json(UPSTREAM, response).await
    }
}
