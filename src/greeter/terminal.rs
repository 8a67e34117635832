use crate::cli::GreetArgs;
use crate::greeter::backend::HttpGreeterBackend;
use crate::greeter::session::{GeolocationError, GreeterSession, PageState};
use crate::map::models::Coordinates;
use crate::upstream;
use anyhow::Context;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, PartialEq)]
pub enum TerminalCommand {
    Name(String),
    Click(Coordinates),
    Greet,
    Show,
    Quit,
}

pub fn parse(line: &str) -> Result<TerminalCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));
    match word {
        "name" => Ok(TerminalCommand::Name(rest.to_string())),
        "click" => {
            let mut parts = rest.split_whitespace().map(str::parse::<f64>);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(Ok(lat)), Some(Ok(lng)), None) => {
                    Ok(TerminalCommand::Click(Coordinates::new(lat, lng)))
                }
                _ => Err(String::from("usage: click <lat> <lng>")),
            }
        }
        "greet" => Ok(TerminalCommand::Greet),
        "show" | "" => Ok(TerminalCommand::Show),
        "quit" | "exit" => Ok(TerminalCommand::Quit),
        other => Err(format!(
            "unknown command `{}`, expected one of: name, click, greet, show, quit",
            other
        )),
    }
}

pub fn render(state: &PageState) -> String {
    let mut lines = Vec::new();
    match (&state.location_error, &state.location, &state.weather) {
        (Some(error), _, _) => lines.push(format!("! {}", error)),
        (None, Some(location), Some(weather)) => {
            lines.push(format!(
                "{} ({:.4}, {:.4})",
                location.city, location.coordinates.latitude, location.coordinates.longitude
            ));
            lines.push(format!(
                "{} | wind {} | humidity {}",
                weather.temperature, weather.wind_speed, weather.humidity
            ));
        }
        _ => lines.push(String::from("Waiting for a location...")),
    }
    lines.push(format!(
        "background: {}",
        state.background_image.as_deref().unwrap_or("gradient")
    ));
    lines.push(match (&state.greeting, state.is_loading) {
        (_, true) => String::from("greeting: generating..."),
        (Some(greeting), false) => format!("greeting: {}", greeting),
        (None, false) => String::from("greeting: enter your name and pick a location"),
    });
    lines.join("\n")
}

fn initial_position(args: &GreetArgs) -> Result<Coordinates, GeolocationError> {
    if args.deny_location {
        return Err(GeolocationError::Denied);
    }
    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
        _ => Err(GeolocationError::Unsupported),
    }
}

pub async fn run(args: GreetArgs) -> anyhow::Result<()> {
    let position = initial_position(&args);
    let http = upstream::client(REQUEST_TIMEOUT).context("Failed to build the HTTP client.")?;
    let backend = HttpGreeterBackend::new(http, args.server_url, args.chat_url);
    let session = GreeterSession::new(backend, Duration::from_millis(args.debounce_ms));

    session.set_name(args.name).await;
    session.geolocation_resolved(position).await;
    println!("{}", render(&session.state().await));

    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    while let Some(line) = lines.next().await {
        let line = line.context("Failed to read from stdin.")?;
        match parse(&line) {
            Ok(TerminalCommand::Quit) => break,
            Ok(TerminalCommand::Name(name)) => session.set_name(name).await,
            Ok(TerminalCommand::Click(at)) => session.select_location(at).await,
            Ok(TerminalCommand::Greet) => {
                let outcome = session.generate_greeting().await;
                tracing::debug!(?outcome, "Manual greeting finished.");
            }
            Ok(TerminalCommand::Show) => {}
            Err(usage) => {
                eprintln!("{}", usage);
                continue;
            }
        }
        println!("{}", render(&session.state().await));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::responses::{LocationInfo, WeatherInfo};

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse("name  Ada Lovelace "),
            Ok(TerminalCommand::Name(String::from("Ada Lovelace")))
        );
        assert_eq!(
            parse("click 40.7 -74.0"),
            Ok(TerminalCommand::Click(Coordinates::new(40.7, -74.0)))
        );
        assert_eq!(parse("greet"), Ok(TerminalCommand::Greet));
        assert_eq!(parse(""), Ok(TerminalCommand::Show));
        assert_eq!(parse("exit"), Ok(TerminalCommand::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(parse("click 40.7").is_err());
        assert!(parse("click north south").is_err());
        assert!(parse("click 1 2 3").is_err());
        assert!(parse("dance").is_err());
    }

    #[test]
    fn renders_loaded_state() {
        let state = PageState {
            name: String::from("Ada"),
            location: Some(LocationInfo {
                coordinates: Coordinates::new(40.7, -74.0),
                city: String::from("Hoboken"),
                display_name: None,
            }),
            weather: Some(WeatherInfo {
                temperature: String::from("22°C"),
                wind_speed: String::from("3.4 m/s"),
                humidity: String::from("65%"),
            }),
            greeting: Some(String::from("Hello Ada")),
            ..PageState::default()
        };

        assert_eq!(
            render(&state),
            "Hoboken (40.7000, -74.0000)\n\
            22°C | wind 3.4 m/s | humidity 65%\n\
            background: gradient\n\
            greeting: Hello Ada"
        );
    }

    #[test]
    fn renders_visible_errors() {
        let state = PageState {
            location_error: Some(String::from("Failed to fetch weather data")),
            ..PageState::default()
        };

        assert!(render(&state).starts_with("! Failed to fetch weather data\n"));
    }

    #[test]
    fn denied_location_wins_over_missing_coordinates() {
        let args = |deny_location, lat, lng| GreetArgs {
            server_url: url::Url::parse("http://127.0.0.1:3030/").expect("valid url"),
            chat_url: None,
            name: String::new(),
            lat,
            lng,
            deny_location,
            debounce_ms: 500,
        };

        assert_eq!(initial_position(&args(true, None, None)), Err(GeolocationError::Denied));
        assert_eq!(initial_position(&args(false, None, None)), Err(GeolocationError::Unsupported));
        assert_eq!(
            initial_position(&args(false, Some(1.5), Some(-2.0))),
            Ok(Coordinates::new(1.5, -2.0))
        );
    }
}
