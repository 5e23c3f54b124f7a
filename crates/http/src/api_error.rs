//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into plain-text HTTP responses. Internal failures
//! are logged with full detail; the client only sees a short message.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use frame_usage_core::CodecError;
use frame_usage_render::RenderError;
use frame_usage_service::ServiceError;

pub const IMAGE_ERROR: &str = "Error generating image";
pub const HUB_ERROR: &str = "Error fetching user data";
pub const NO_HUB: &str = "No Hub to talk to";

/// API error with HTTP status code and human-readable message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller.
    BadRequest(String),
    /// 405 Method Not Allowed, with the methods the route does accept.
    MethodNotAllowed { method: Method, allow: &'static str },
    /// 500 Internal Server Error — `message` is sent, `source` is only logged.
    Internal { message: &'static str, source: anyhow::Error },
}

impl ApiError {
    pub fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal { message, source: source.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "bad request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            },
            Self::MethodNotAllowed { method, allow } => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, allow)],
                format!("Method {method} Not Allowed"),
            )
                .into_response(),
            Self::Internal { message, source } => {
                tracing::error!(error = ?source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            },
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ValidationFailure(msg) => {
                Self::BadRequest(format!("Failed to validate message: {msg}"))
            },
            ServiceError::UpstreamUnavailable(_) => Self::internal(HUB_ERROR, err),
        }
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        Self::internal(IMAGE_ERROR, err)
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        Self::internal(IMAGE_ERROR, err)
    }
}
