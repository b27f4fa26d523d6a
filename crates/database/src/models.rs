//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// An aid request submitted by a reporter.
///
/// Serializes with camelCase keys to match the JSON wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AidRequest {
    /// Server-assigned UUID.
    pub id: String,
    /// Name of the person reporting the request.
    pub reporter_name: String,
    /// Contact phone for the reporter.
    pub reporter_phone: String,
    /// Free-text location label.
    pub location: String,
    /// Latitude, present only together with longitude.
    pub latitude: Option<f64>,
    /// Longitude, present only together with latitude.
    pub longitude: Option<f64>,
    /// What help is needed.
    pub description: String,
    /// Free-text urgency category.
    pub urgency: String,
    /// Current status. Defaults to `pending`; any string may be written.
    pub status: String,
    /// Opaque image reference, if any.
    pub image: Option<String>,
    /// Volunteer names in claim order. Append-only, duplicates retained.
    pub volunteers: Vec<String>,
    /// Creation timestamp, assigned at insert.
    pub created_at: String,
}

// The volunteers column is stored as a JSON array, so the row mapping is by hand.
impl<'r> FromRow<'r, SqliteRow> for AidRequest {
    fn from_row(row: &'r SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        let volunteers: String = row.try_get("volunteers")?;
        let volunteers =
            serde_json::from_str(&volunteers).map_err(|err| sqlx::Error::ColumnDecode {
                index: "volunteers".to_string(),
                source: Box::new(err),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            reporter_name: row.try_get("reporter_name")?,
            reporter_phone: row.try_get("reporter_phone")?,
            location: row.try_get("location")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            description: row.try_get("description")?,
            urgency: row.try_get("urgency")?,
            status: row.try_get("status")?,
            image: row.try_get("image")?,
            volunteers,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Insert shape for a new aid request.
///
/// Status, volunteers, and the timestamp are schema-assigned; caller
/// values for them never reach storage.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub reporter_name: String,
    pub reporter_phone: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,
    pub urgency: String,
    pub image: Option<String>,
}

/// A volunteer's claim on one aid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    /// Server-assigned UUID.
    pub id: String,
    /// Volunteer display name.
    pub volunteer_name: String,
    /// Contact phone for the volunteer.
    pub volunteer_phone: String,
    /// Weak reference to the claimed request; may dangle.
    pub request_id: String,
    /// Snapshot of the request's location at claim time.
    pub request_location: String,
    /// Current status. Defaults to `helping`; any string may be written.
    pub status: String,
    /// Creation timestamp, assigned at insert.
    pub created_at: String,
}

/// Insert shape for a new volunteer record. Status and timestamp are
/// schema-assigned.
#[derive(Debug, Clone)]
pub struct NewVolunteer {
    pub volunteer_name: String,
    pub volunteer_phone: String,
    pub request_id: String,
    pub request_location: String,
}
