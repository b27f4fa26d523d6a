//! Volunteer record persistence operations.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{NewVolunteer, Volunteer};

/// Insert a new volunteer record and return the stored record.
pub async fn create_volunteer(pool: &SqlitePool, new: &NewVolunteer) -> Result<Volunteer> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO volunteers (id, volunteer_name, volunteer_phone, request_id, request_location)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.volunteer_name)
    .bind(&new.volunteer_phone)
    .bind(&new.request_id)
    .bind(&new.request_location)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::from_write("Volunteer", e))?;

    get_volunteer(pool, &id).await
}

/// Get a volunteer record by ID.
pub async fn get_volunteer(pool: &SqlitePool, id: &str) -> Result<Volunteer> {
    sqlx::query_as::<_, Volunteer>(
        r#"
        SELECT id, volunteer_name, volunteer_phone, request_id,
               request_location, status, created_at
        FROM volunteers
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Volunteer",
        id: id.to_string(),
    })
}

/// Persist the mutable fields of a volunteer record.
pub async fn update_volunteer(pool: &SqlitePool, volunteer: &Volunteer) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE volunteers
        SET status = ?
        WHERE id = ?
        "#,
    )
    .bind(&volunteer.status)
    .bind(&volunteer.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Volunteer",
            id: volunteer.id.clone(),
        });
    }

    Ok(())
}

/// List all volunteer records, most recent first.
pub async fn list_volunteers(pool: &SqlitePool) -> Result<Vec<Volunteer>> {
    let volunteers = sqlx::query_as::<_, Volunteer>(
        r#"
        SELECT id, volunteer_name, volunteer_phone, request_id,
               request_location, status, created_at
        FROM volunteers
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(volunteers)
}
