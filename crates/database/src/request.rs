//! Aid request persistence operations.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{AidRequest, NewRequest};

/// Insert a new aid request and return the stored record.
///
/// The id is assigned here; status, volunteers, and created_at come from the
/// schema defaults, so the returned record is re-read after the insert.
pub async fn create_request(pool: &SqlitePool, new: &NewRequest) -> Result<AidRequest> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO requests (
            id, reporter_name, reporter_phone, location,
            latitude, longitude, description, urgency, image
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.reporter_name)
    .bind(&new.reporter_phone)
    .bind(&new.location)
    .bind(new.latitude)
    .bind(new.longitude)
    .bind(&new.description)
    .bind(&new.urgency)
    .bind(&new.image)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::from_write("Request", e))?;

    get_request(pool, &id).await
}

/// Get an aid request by ID.
pub async fn get_request(pool: &SqlitePool, id: &str) -> Result<AidRequest> {
    sqlx::query_as::<_, AidRequest>(
        r#"
        SELECT id, reporter_name, reporter_phone, location,
               latitude, longitude, description, urgency,
               status, image, volunteers, created_at
        FROM requests
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Request",
        id: id.to_string(),
    })
}

/// Persist the mutable fields of an aid request.
pub async fn update_request(pool: &SqlitePool, request: &AidRequest) -> Result<()> {
    let volunteers = serde_json::to_string(&request.volunteers)?;

    let result = sqlx::query(
        r#"
        UPDATE requests
        SET status = ?, volunteers = ?
        WHERE id = ?
        "#,
    )
    .bind(&request.status)
    .bind(&volunteers)
    .bind(&request.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Request",
            id: request.id.clone(),
        });
    }

    Ok(())
}

/// List all aid requests, most recent first.
pub async fn list_requests(pool: &SqlitePool) -> Result<Vec<AidRequest>> {
    let requests = sqlx::query_as::<_, AidRequest>(
        r#"
        SELECT id, reporter_name, reporter_phone, location,
               latitude, longitude, description, urgency,
               status, image, volunteers, created_at
        FROM requests
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(requests)
}
