//! Application state shared across handlers.

use coordination::{RequestCoordinator, VolunteerCoordinator};
use geocode::GeocodeClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Aid request lifecycle.
    pub requests: RequestCoordinator,
    /// Volunteer lifecycle.
    pub volunteers: VolunteerCoordinator,
    /// Geocoding gateway, absent when no credential is configured.
    pub geocode: Option<GeocodeClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        requests: RequestCoordinator,
        volunteers: VolunteerCoordinator,
        geocode: Option<GeocodeClient>,
    ) -> Self {
        Self {
            requests,
            volunteers,
            geocode,
        }
    }
}
