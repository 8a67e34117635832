use crate::greeter::backend::{ChatRequest, GreeterBackend};
use crate::greeter::slot::RequestSlot;
use crate::map::models::Coordinates;
use crate::weather::responses::{LocationInfo, WeatherInfo};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const WEATHER_FAILURE_MESSAGE: &str = "Failed to fetch weather data";
pub const LOCATION_DENIED_MESSAGE: &str =
    "Please enable location access to see weather information";
pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    Denied,
    Unsupported,
}

/// Everything the page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub name: String,
    pub location: Option<LocationInfo>,
    pub weather: Option<WeatherInfo>,
    /// Visible error; weather failures end up here, photo failures never do.
    pub location_error: Option<String>,
    /// `None` renders the gradient background.
    pub background_image: Option<String>,
    pub greeting: Option<String>,
    pub is_loading: bool,
}

impl PageState {
    fn greeting_request(&self) -> Option<ChatRequest> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(ChatRequest {
            name: self.name.clone(),
            weather: self.weather.clone()?,
            location: self.location.clone()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingOutcome {
    Generated,
    FellBack,
    /// Not enough input yet, or a manual request while another one is in flight.
    Skipped,
    /// A newer request started while this one was in flight; its result was dropped.
    Superseded,
}

pub fn fallback_greeting(request: &ChatRequest) -> String {
    format!(
        "Welcome to {}, {}! It's {} outside.",
        request.location.city, request.name, request.weather.temperature
    )
}

/// One user's page: a single active location, a name and the greeting derived from both.
pub struct GreeterSession<B: GreeterBackend> {
    inner: Arc<SessionInner<B>>,
}

struct SessionInner<B> {
    backend: B,
    state: RwLock<PageState>,
    debounce: Duration,
    location_requests: RequestSlot,
    debounce_timers: RequestSlot,
    greeting_requests: RequestSlot,
}

impl<B: GreeterBackend> Clone for GreeterSession<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: GreeterBackend> GreeterSession<B> {
    pub fn new(backend: B, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                backend,
                state: RwLock::new(PageState::default()),
                debounce,
                location_requests: RequestSlot::default(),
                debounce_timers: RequestSlot::default(),
                greeting_requests: RequestSlot::default(),
            }),
        }
    }

    pub async fn state(&self) -> PageState {
        self.inner.state.read().await.clone()
    }

    pub async fn geolocation_resolved(&self, position: Result<Coordinates, GeolocationError>) {
        match position {
            Ok(at) => self.select_location(at).await,
            Err(err) => {
                tracing::warn!(?err, "Geolocation is not available.");
                // Pending location requests must not resurrect a background either.
                self.inner.location_requests.begin();
                let mut state = self.inner.state.write().await;
                state.location_error = Some(
                    match err {
                        GeolocationError::Denied => LOCATION_DENIED_MESSAGE,
                        GeolocationError::Unsupported => GEOLOCATION_UNSUPPORTED_MESSAGE,
                    }
                    .to_string(),
                );
                state.background_image = None;
            }
        }
    }

    /// Weather first, then the background photo. Requests superseded by a newer
    /// location never touch the state.
    pub async fn select_location(&self, at: Coordinates) {
        let ticket = self.inner.location_requests.begin();

        let report = self.inner.backend.weather(at).await;
        {
            let mut state = self.inner.state.write().await;
            if !self.inner.location_requests.is_current(ticket) {
                return;
            }
            match report {
                Ok(report) => {
                    state.location = Some(report.location);
                    state.weather = Some(report.weather);
                    state.location_error = None;
                }
                Err(err) => {
                    tracing::warn!(error = %err, ?at, "Failed to fetch weather.");
                    state.location_error = Some(WEATHER_FAILURE_MESSAGE.to_string());
                    return;
                }
            }
        }
        self.schedule_greeting();

        let photo = self.inner.backend.background_photo(at).await;
        let mut state = self.inner.state.write().await;
        if !self.inner.location_requests.is_current(ticket) {
            return;
        }
        state.background_image = match photo {
            Ok(photo) => photo,
            Err(err) => {
                tracing::warn!(error = %err, ?at, "Failed to fetch background photo.");
                None
            }
        };
    }

    pub async fn set_name(&self, name: impl Into<String>) {
        self.inner.state.write().await.name = name.into();
        self.schedule_greeting();
    }

    /// Manual trigger: no debounce, but never overlaps a greeting in flight.
    pub async fn generate_greeting(&self) -> GreetingOutcome {
        self.run_greeting(true).await
    }

    /// Restarts the quiet period; only the latest timer gets to fire.
    fn schedule_greeting(&self) {
        let timer = self.inner.debounce_timers.begin();
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(session.inner.debounce).await;
            if session.inner.debounce_timers.is_current(timer) {
                session.run_greeting(false).await;
            }
        });
    }

    async fn run_greeting(&self, manual: bool) -> GreetingOutcome {
        let (request, ticket) = {
            let mut state = self.inner.state.write().await;
            let Some(request) = state.greeting_request() else {
                return GreetingOutcome::Skipped;
            };
            if manual && state.is_loading {
                return GreetingOutcome::Skipped;
            }
            state.is_loading = true;
            (request, self.inner.greeting_requests.begin())
        };

        let result = self.inner.backend.greeting(&request).await;

        let mut state = self.inner.state.write().await;
        if !self.inner.greeting_requests.is_current(ticket) {
            return GreetingOutcome::Superseded;
        }
        state.is_loading = false;
        match result {
            Ok(message) => {
                state.greeting = Some(message);
                GreetingOutcome::Generated
            }
            Err(err) => {
                tracing::warn!(error = %err, "Greeting generation failed, using the fallback.");
                state.greeting = Some(fallback_greeting(&request));
                GreetingOutcome::FellBack
            }
        }
    }
}
