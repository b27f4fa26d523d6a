//! HTTP client for the reverse-geocoding provider.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::GeocodeConfig;
use crate::error::GeocodeError;

/// Client for the reverse-geocoding provider.
///
/// The provider's response body is returned verbatim; this gateway does not
/// translate it.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    config: GeocodeConfig,
}

impl GeocodeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeocodeError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!("Geocode client initialized for {}", config.api_url);

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`GeocodeConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, GeocodeError> {
        Self::new(GeocodeConfig::from_env()?)
    }

    /// Reverse-geocode a coordinate pair.
    ///
    /// Returns the provider's JSON body unmodified. Transport failures and
    /// non-success upstream responses both surface as [`GeocodeError::Gateway`].
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Value, GeocodeError> {
        let url = format!("{}/v1/reverse", self.config.api_url);
        let lat = lat.to_string();
        let lon = lon.to_string();

        debug!(%lat, %lon, "Sending reverse-geocode request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Gateway(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Gateway(format!(
                "Upstream error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GeocodeError::Gateway(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_config() {
        let client = GeocodeClient::new(GeocodeConfig {
            api_url: "https://geocode.example.com".to_string(),
            api_key: "test-key".to_string(),
        });
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_reverse_surfaces_transport_failure_as_gateway_error() {
        // Nothing listens on this address; the request must fail.
        let client = GeocodeClient::new(GeocodeConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
        })
        .unwrap();

        let result = client.reverse(40.7484, -73.9857).await;
        assert!(matches!(result, Err(GeocodeError::Gateway(_))));
    }
}
