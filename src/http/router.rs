use crate::app_context::AppContext;
use crate::cli::ServeArgs;
use crate::http::{cors, middleware};
use crate::places::google::GooglePlacesClient;
use crate::{health, places, weather};
use axum::{routing::get, Router};
use http::header::InvalidHeaderValue;
use tower::ServiceBuilder;

pub fn new(
    args: &ServeArgs,
    app_context: AppContext<GooglePlacesClient>,
) -> Result<Router, InvalidHeaderValue> {
    let cors_policy = cors::layer(args)?;
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let api_routes = Router::new()
        .route("/places", get(places::handlers::place))
        .route("/images", get(places::handlers::images))
        .route("/weather", get(weather::handlers::weather));

    Ok(Router::new()
        .nest("/health", health_routes)
        .nest("/api", api_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        ))
}
