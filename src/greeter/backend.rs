use crate::map::models::Coordinates;
use crate::places::responses::{ImageResponse, PlaceResponse};
use crate::upstream;
use crate::weather::responses::{LocationInfo, WeatherInfo, WeatherReport};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum GreeterClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub name: String,
    pub weather: WeatherInfo,
    pub location: LocationInfo,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// What a greeter session needs from the outside world.
#[async_trait]
pub trait GreeterBackend: Send + Sync + 'static {
    async fn weather(&self, at: Coordinates) -> Result<WeatherReport, GreeterClientError>;

    /// `Ok(None)` when the server knows no place or no photo for the point.
    async fn background_photo(
        &self,
        at: Coordinates,
    ) -> Result<Option<String>, GreeterClientError>;

    async fn greeting(&self, request: &ChatRequest) -> Result<String, GreeterClientError>;
}

pub struct HttpGreeterBackend {
    http: Client,
    server_url: Url,
    chat_url: Url,
}

impl HttpGreeterBackend {
    pub fn new(http: Client, server_url: Url, chat_url: Option<Url>) -> Self {
        let chat_url = chat_url.unwrap_or_else(|| api_url(&server_url, "chat"));
        Self {
            http,
            server_url,
            chat_url,
        }
    }

    async fn place_id(&self, at: Coordinates) -> Result<Option<String>, GreeterClientError> {
        let response = self
            .http
            .get(api_url(&self.server_url, "places"))
            .query(&[("lat", at.latitude.to_string()), ("lng", at.longitude.to_string())])
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "No place found at this location.");
            return Ok(None);
        }
        Ok(Some(response.json::<PlaceResponse>().await?.place_id))
    }
}

#[async_trait]
impl GreeterBackend for HttpGreeterBackend {
    async fn weather(&self, at: Coordinates) -> Result<WeatherReport, GreeterClientError> {
        let response = self
            .http
            .get(api_url(&self.server_url, "weather"))
            .query(&[("lat", at.latitude.to_string()), ("lon", at.longitude.to_string())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GreeterClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn background_photo(
        &self,
        at: Coordinates,
    ) -> Result<Option<String>, GreeterClientError> {
        let Some(place_id) = self.place_id(at).await? else {
            return Ok(None);
        };
        let response = self
            .http
            .get(api_url(&self.server_url, "images"))
            .query(&[("placeId", &place_id)])
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::debug!(
                %place_id,
                status = %response.status(),
                "No photo available for place."
            );
            return Ok(None);
        }
        Ok(Some(response.json::<ImageResponse>().await?.photo_url))
    }

    async fn greeting(&self, request: &ChatRequest) -> Result<String, GreeterClientError> {
        let response = self
            .http
            .post(self.chat_url.clone())
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GreeterClientError::Status(response.status()));
        }
        Ok(response.json::<ChatResponse>().await?.message)
    }
}

fn api_url(server_url: &Url, endpoint: &str) -> Url {
    upstream::endpoint(server_url, ["api", endpoint])
}
