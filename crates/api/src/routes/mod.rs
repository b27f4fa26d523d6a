//! Route handlers for the API server.

pub mod geocode;
pub mod health;
pub mod requests;
pub mod volunteers;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Aid requests
        .route(
            "/api/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route("/api/requests/:id", patch(requests::update_request))
        // Volunteers
        .route(
            "/api/volunteers",
            get(volunteers::list_volunteers).post(volunteers::claim_request),
        )
        .route("/api/volunteers/:id", patch(volunteers::update_volunteer))
        // Geocoding
        .route("/api/geocode", post(geocode::reverse_geocode))
}
