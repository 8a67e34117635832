use clap::{Args as ClapArgs, Parser, Subcommand};
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Drive a greeter session against a running server from the terminal.
    Greet(GreetArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServeArgs {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long, env = "GOOGLE_MAPS_API_KEY")]
    pub google_maps_api_key: String,
    #[arg(long)]
    #[arg(default_value = "https://places.googleapis.com/")]
    pub places_api_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://api.open-meteo.com/")]
    pub weather_api_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://nominatim.openstreetmap.org/")]
    pub geocoding_api_url: Url,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value_t = 10)]
    pub upstream_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GreetArgs {
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:3030/")]
    pub server_url: Url,
    /// Defaults to `<server-url>/api/chat`.
    #[arg(long)]
    pub chat_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value = "")]
    pub name: String,
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// Start as if the user refused to share their location.
    #[arg(long, conflicts_with = "lat")]
    pub deny_location: bool,
    #[arg(long)]
    #[arg(default_value_t = 500)]
    pub debounce_ms: u64,
}
