use crate::map::models::Coordinates;
use crate::weather::models::{Address, CurrentConditions, ReverseGeocoding};
use crate::weather::responses::{LocationInfo, WeatherInfo, WeatherReport};

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

pub fn report(
    at: Coordinates,
    conditions: CurrentConditions,
    geocoding: ReverseGeocoding,
) -> WeatherReport {
    WeatherReport {
        location: LocationInfo {
            coordinates: at,
            city: city_name(geocoding.address.as_ref()),
            display_name: geocoding.display_name,
        },
        weather: WeatherInfo {
            temperature: temperature(conditions.temperature_2m),
            wind_speed: format!("{} m/s", conditions.wind_speed_10m),
            humidity: format!("{}%", conditions.relative_humidity_2m),
        },
        timestamp: conditions.time,
    }
}

/// Whole degrees Celsius, halves rounded up (`-2.5` becomes `-2`).
pub fn temperature(celsius: f64) -> String {
    format!("{}°C", (celsius + 0.5).floor() as i64)
}

/// First non-empty of city, town, village and suburb.
pub fn city_name(address: Option<&Address>) -> String {
    address
        .and_then(|address| {
            [
                &address.city,
                &address.town,
                &address.village,
                &address.suburb,
            ]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned()
        })
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(
        city: Option<&str>,
        town: Option<&str>,
        village: Option<&str>,
        suburb: Option<&str>,
    ) -> Address {
        Address {
            city: city.map(String::from),
            town: town.map(String::from),
            village: village.map(String::from),
            suburb: suburb.map(String::from),
        }
    }

    #[test]
    fn temperature_is_rounded_to_whole_degrees() {
        assert_eq!(temperature(21.6), "22°C");
        assert_eq!(temperature(21.4), "21°C");
        assert_eq!(temperature(21.5), "22°C");
        assert_eq!(temperature(-2.5), "-2°C");
        assert_eq!(temperature(-0.4), "0°C");
    }

    #[test]
    fn city_prefers_city_then_town_then_village_then_suburb() {
        let full = address(Some("Paris"), Some("t"), Some("v"), Some("s"));
        assert_eq!(city_name(Some(&full)), "Paris");
        let village = address(None, Some(""), Some("Giverny"), Some("s"));
        assert_eq!(city_name(Some(&village)), "Giverny");
        let suburb = address(None, None, None, Some("Montmartre"));
        assert_eq!(city_name(Some(&suburb)), "Montmartre");
    }

    #[test]
    fn missing_place_names_fall_back_to_unknown() {
        assert_eq!(city_name(None), UNKNOWN_LOCATION);
        let empty = address(None, Some(""), None, None);
        assert_eq!(city_name(Some(&empty)), UNKNOWN_LOCATION);
    }

    #[test]
    fn report_suffixes_units() {
        let conditions = CurrentConditions {
            time: String::from("2024-05-01T12:00"),
            temperature_2m: 21.6,
            wind_speed_10m: 3.4,
            relative_humidity_2m: 65.0,
        };
        let report = report(Coordinates::new(1.0, 2.0), conditions, ReverseGeocoding::default());
        assert_eq!(
            report.weather,
            WeatherInfo {
                temperature: String::from("22°C"),
                wind_speed: String::from("3.4 m/s"),
                humidity: String::from("65%"),
            }
        );
        assert_eq!(report.location.city, UNKNOWN_LOCATION);
        assert_eq!(report.timestamp, "2024-05-01T12:00");
    }
}
