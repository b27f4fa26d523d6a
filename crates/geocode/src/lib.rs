//! Reverse-geocoding gateway for Beacon.
//!
//! Forwards a coordinate pair to a third-party reverse-geocoding provider
//! and hands the provider's JSON body back unmodified. The gateway fails
//! with a configuration error when no credential is set, and a gateway
//! error when the upstream call fails; nothing is retried or translated.
//!
//! # Example
//!
//! ```no_run
//! use geocode::GeocodeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads GEOCODE_API_KEY (required) and GEOCODE_API_URL (optional)
//!     let client = GeocodeClient::from_env()?;
//!
//!     let place = client.reverse(40.7484, -73.9857).await?;
//!     println!("{place}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::GeocodeClient;
pub use config::{GeocodeConfig, DEFAULT_API_URL};
pub use error::{GeocodeError, Result};
