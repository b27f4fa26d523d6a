//! Volunteer routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use coordination::VolunteerUpdate;
use database::{NewVolunteer, Volunteer};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Body for claiming a request. Omitted fields default to empty strings;
/// status is server-assigned.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimBody {
    pub volunteer_name: String,
    pub volunteer_phone: String,
    pub request_id: String,
    pub request_location: String,
}

/// Body for updating an existing volunteer record.
#[derive(Deserialize)]
pub struct UpdateVolunteerBody {
    pub status: Option<String>,
}

/// List all volunteer records, newest first.
pub async fn list_volunteers(State(state): State<AppState>) -> Result<Json<Vec<Volunteer>>> {
    let volunteers = state.volunteers.list().await?;
    Ok(Json(volunteers))
}

/// Record a volunteer's claim on a request.
///
/// Returns 201 even when the referenced request does not exist; the claim
/// stands on its own and the request-side cascade is best-effort.
pub async fn claim_request(
    State(state): State<AppState>,
    Json(body): Json<ClaimBody>,
) -> Result<(StatusCode, Json<Volunteer>)> {
    let volunteer = state
        .volunteers
        .claim(NewVolunteer {
            volunteer_name: body.volunteer_name,
            volunteer_phone: body.volunteer_phone,
            request_id: body.request_id,
            request_location: body.request_location,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(volunteer)))
}

/// Update a volunteer's status. Writing `completed` also completes the
/// linked request when it still exists.
pub async fn update_volunteer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateVolunteerBody>,
) -> Result<Json<Volunteer>> {
    let volunteer = state
        .volunteers
        .apply_update(&id, VolunteerUpdate { status: body.status })
        .await?;

    Ok(Json(volunteer))
}
