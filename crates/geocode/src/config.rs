//! Configuration for the geocoding gateway.

use std::env;

use crate::error::GeocodeError;

/// Default provider base URL.
pub const DEFAULT_API_URL: &str = "https://us1.locationiq.com";

/// Configuration for [`GeocodeClient`](crate::GeocodeClient).
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Provider base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,
}

impl GeocodeConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEOCODE_API_KEY` - provider API key
    ///
    /// Optional environment variables:
    /// - `GEOCODE_API_URL` - provider base URL (default: <https://us1.locationiq.com>)
    pub fn from_env() -> Result<Self, GeocodeError> {
        let api_key = env::var("GEOCODE_API_KEY")
            .map_err(|_| GeocodeError::Configuration("GEOCODE_API_KEY not set".to_string()))?;

        let api_url = env::var("GEOCODE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self { api_url, api_key })
    }
}
