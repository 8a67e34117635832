use crate::logging::consts::DEFAULT_CLIENT_IP;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .unwrap_or(DEFAULT_CLIENT_IP)
        .to_string();
    let request_id = Uuid::new_v4();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed().as_micros();

    tracing::info!(
        task = "http_request",
        request_id = %request_id,
        http_method = %method,
        endpoint = %path,
        status = response.status().as_u16(),
        client_ip = %client_ip,
        processing_time_us = elapsed_time,
    );

    response
}
