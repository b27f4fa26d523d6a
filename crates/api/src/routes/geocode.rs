//! Reverse-geocoding route.

use axum::extract::State;
use axum::Json;
use geocode::GeocodeError;
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Coordinate pair to reverse-geocode.
#[derive(Deserialize)]
pub struct GeocodeBody {
    pub lat: f64,
    pub lon: f64,
}

/// Forward a coordinate pair to the geocoding provider and return its JSON
/// body verbatim.
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Json(body): Json<GeocodeBody>,
) -> Result<Json<serde_json::Value>> {
    let Some(client) = state.geocode.as_ref() else {
        return Err(GeocodeError::Configuration("GEOCODE_API_KEY not set".to_string()).into());
    };

    let place = client.reverse(body.lat, body.lon).await?;
    Ok(Json(place))
}
