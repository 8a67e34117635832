use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const USER_AGENT: &str = "WeatherGreeterServer/0.1.0";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{upstream} responded with {status}")]
    Status {
        upstream: &'static str,
        status: StatusCode,
    },
    #[error("failed to decode {upstream} response: {source}")]
    Decode {
        upstream: &'static str,
        source: reqwest::Error,
    },
}

pub fn client(timeout: Duration) -> Result<Client, UpstreamError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Rejects non-success statuses and decodes the JSON body.
pub async fn decode_json<T: DeserializeOwned>(
    upstream: &'static str,
    response: Response,
) -> Result<T, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { upstream, status });
    }
    response
        .json::<T>()
        .await
        .map_err(|source| UpstreamError::Decode { upstream, source })
}

/// Appends path segments to a base URL, percent-encoding each one.
pub fn endpoint<'s>(base: &Url, segments: impl IntoIterator<Item = &'s str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
