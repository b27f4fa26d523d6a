//! Aid request routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use coordination::RequestUpdate;
use database::{AidRequest, NewRequest};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Body for filing a new aid request.
///
/// Omitted text fields default to empty strings. Status and the claim list
/// are server-assigned; unknown keys in the body (including caller-supplied
/// `status` or `volunteers`) are ignored.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub reporter_name: String,
    pub reporter_phone: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,
    pub urgency: String,
    pub image: Option<String>,
}

/// Body for updating an existing request. `volunteers` carries a single
/// name to append to the claim list.
#[derive(Deserialize)]
pub struct UpdateRequestBody {
    pub status: Option<String>,
    pub volunteers: Option<String>,
}

/// List all aid requests, newest first.
pub async fn list_requests(State(state): State<AppState>) -> Result<Json<Vec<AidRequest>>> {
    let requests = state.requests.list().await?;
    Ok(Json(requests))
}

/// File a new aid request.
pub async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<CreateRequestBody>,
) -> Result<(StatusCode, Json<AidRequest>)> {
    let request = state
        .requests
        .create(NewRequest {
            reporter_name: body.reporter_name,
            reporter_phone: body.reporter_phone,
            location: body.location,
            latitude: body.latitude,
            longitude: body.longitude,
            description: body.description,
            urgency: body.urgency,
            image: body.image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Update a request's status and/or append a volunteer name.
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateRequestBody>,
) -> Result<Json<AidRequest>> {
    let request = state
        .requests
        .apply_update(
            &id,
            RequestUpdate {
                status: body.status,
                volunteer: body.volunteers,
            },
        )
        .await?;

    Ok(Json(request))
}
