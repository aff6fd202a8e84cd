//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::services::{Endpoint, FailureMode, ServiceError};

/// API error rendered as `{"detail": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.message }))).into_response()
    }
}

/// Apply the endpoint's failure policy to a service result.
///
/// Invalid input is always a 400. Other failures become either a 500 with
/// the endpoint's detail message or the endpoint's fallback value. Only
/// endpoints whose policy is [`FailureMode::Fallback`] pass a fallback.
pub fn resolve<T>(
    endpoint: Endpoint,
    result: Result<T, ServiceError>,
    fallback: Option<fn() -> T>,
) -> Result<T, ApiError> {
    match result {
        Ok(value) => Ok(value),
        Err(ServiceError::InvalidInput(msg)) => Err(ApiError::bad_request(msg)),
        Err(e) => match endpoint.failure_mode() {
            FailureMode::ServerError(detail) => {
                error!("{} failed: {}", endpoint.name(), e);
                Err(ApiError::internal(detail))
            }
            FailureMode::Fallback => match fallback {
                Some(fallback) => {
                    warn!("{} failed, returning fallback: {}", endpoint.name(), e);
                    Ok(fallback())
                }
                None => {
                    error!("{} failed with no fallback available: {}", endpoint.name(), e);
                    Err(ApiError::internal("Internal server error"))
                }
            },
        },
    }
}
