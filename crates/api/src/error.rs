//! Error types for the API surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coordination::CoordinationError;
use geocode::GeocodeError;
use thiserror::Error;

/// Errors that can occur while handling an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lifecycle operation failed.
    #[error(transparent)]
    Coordination(#[from] CoordinationError),

    /// Geocoding gateway failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Coordination(err) => match err {
                CoordinationError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
                CoordinationError::Validation { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
                CoordinationError::Database(_) => {
                    tracing::error!("Database error: {}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                }
            },
            ApiError::Geocode(err) => {
                tracing::error!("Geocode error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
