use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    pub temperature_2m: f64,
    pub wind_speed_10m: f64,
    pub relative_humidity_2m: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocoding {
    pub display_name: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
}
