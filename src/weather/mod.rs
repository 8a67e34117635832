use crate::cli::ServeArgs;
use client::WeatherClient;
use reqwest::Client;

pub mod client;
pub mod format;
pub mod handlers;
pub mod models;
pub mod responses;

pub fn init(args: &ServeArgs, http: Client) -> WeatherClient {
    WeatherClient::new(
        http,
        args.weather_api_url.clone(),
        args.geocoding_api_url.clone(),
    )
}
