use crate::upstream::UpstreamError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything an `/api` handler can fail with. Upstream failures carry the endpoint's
/// generic message; the underlying cause is only logged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl ApiError {
    pub fn upstream(message: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| Self::Upstream { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            Self::NotFound(message) => tracing::info!("{}", message),
            Self::Validation(_) => {}
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
