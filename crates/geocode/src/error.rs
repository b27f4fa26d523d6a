//! Error types for the geocoding gateway.

use thiserror::Error;

/// Errors that can occur while reverse-geocoding.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The gateway is not usable as configured (e.g. missing credential).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream call failed: transport error or non-success response.
    #[error("Geocoding gateway error: {0}")]
    Gateway(String),
}

/// Result type for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodeError>;
