use crate::cli::ServeArgs;
use http::header::{HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &ServeArgs) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = args
        .allowed_origins
        .iter()
        .map(|origin| origin.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]))
}
