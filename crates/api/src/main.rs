//! Beacon aid-request coordination API server.
//!
//! Exposes the request and volunteer lifecycles plus the reverse-geocoding
//! gateway as a JSON HTTP API.

mod config;
mod error;
mod routes;
mod state;

use coordination::{RequestCoordinator, VolunteerCoordinator};
use database::Database;
use geocode::GeocodeClient;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Beacon API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build the lifecycle coordinators
    let requests = RequestCoordinator::new(db.clone());
    let volunteers = VolunteerCoordinator::new(db, requests.clone());

    // Geocoding is optional: without a credential the endpoint reports a
    // configuration error instead of the server refusing to start.
    let geocode = match GeocodeClient::from_env() {
        Ok(client) => Some(client),
        Err(err) => {
            warn!(error = %err, "Geocoding disabled");
            None
        }
    };

    // Build application state
    let state = AppState::new(requests, volunteers, geocode);

    // Build router
    let app = routes::router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Beacon API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
