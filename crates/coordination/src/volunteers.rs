//! The volunteer lifecycle and its cascade into the request lifecycle.

use database::{volunteer, Database, NewVolunteer, Volunteer};
use tracing::{info, warn};

use crate::error::Result;
use crate::requests::RequestCoordinator;
use crate::status::Status;

/// Fields a caller may change on an existing volunteer record.
#[derive(Debug, Clone, Default)]
pub struct VolunteerUpdate {
    /// New status, written verbatim.
    pub status: Option<String>,
}

/// Owns the volunteer lifecycle: claims, listing, and status updates, plus
/// the cascades that push the linked request along.
#[derive(Debug, Clone)]
pub struct VolunteerCoordinator {
    db: Database,
    requests: RequestCoordinator,
}

impl VolunteerCoordinator {
    /// Create a coordinator backed by the given database, cascading into
    /// the given request coordinator.
    pub fn new(db: Database, requests: RequestCoordinator) -> Self {
        Self { db, requests }
    }

    /// Record a volunteer's claim on a request.
    ///
    /// The volunteer record starts at `helping` regardless of caller input.
    /// Once it is durably created, the referenced request is moved to
    /// `helping`. The two writes are independent: a dangling request id
    /// leaves the claim in place, and a failed request write never fails
    /// the claim.
    pub async fn claim(&self, new: NewVolunteer) -> Result<Volunteer> {
        let volunteer = volunteer::create_volunteer(self.db.pool(), &new).await?;
        info!(
            id = %volunteer.id,
            request_id = %volunteer.request_id,
            "volunteer claimed request"
        );

        if let Err(err) = self
            .requests
            .set_status(&volunteer.request_id, Status::Helping)
            .await
        {
            warn!(
                request_id = %volunteer.request_id,
                error = %err,
                "claim cascade failed"
            );
        }

        Ok(volunteer)
    }

    /// List all volunteer records, most recent first.
    pub async fn list(&self) -> Result<Vec<Volunteer>> {
        Ok(volunteer::list_volunteers(self.db.pool()).await?)
    }

    /// Apply a caller-driven update to a volunteer record.
    ///
    /// A supplied status overwrites unconditionally. Writing exactly
    /// `completed` also completes the linked request; the cascade's outcome
    /// is not reflected in the returned record.
    pub async fn apply_update(&self, id: &str, update: VolunteerUpdate) -> Result<Volunteer> {
        let mut volunteer = volunteer::get_volunteer(self.db.pool(), id).await?;

        if let Some(status) = update.status.clone() {
            volunteer.status = status;
        }

        volunteer::update_volunteer(self.db.pool(), &volunteer).await?;

        if let Some(status) = &update.status {
            if status.parse() == Ok(Status::Completed) {
                if let Err(err) = self
                    .requests
                    .set_status(&volunteer.request_id, Status::Completed)
                    .await
                {
                    warn!(
                        request_id = %volunteer.request_id,
                        error = %err,
                        "completion cascade failed"
                    );
                }
            }
        }

        Ok(volunteer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinationError;
    use database::{request, NewRequest};

    async fn test_db() -> Database {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn coordinators(db: &Database) -> (RequestCoordinator, VolunteerCoordinator) {
        let requests = RequestCoordinator::new(db.clone());
        let volunteers = VolunteerCoordinator::new(db.clone(), requests.clone());
        (requests, volunteers)
    }

    async fn file_request(requests: &RequestCoordinator) -> String {
        requests
            .create(NewRequest {
                reporter_name: "Ana".to_string(),
                reporter_phone: "+15550001111".to_string(),
                location: "5th Ave".to_string(),
                latitude: None,
                longitude: None,
                description: "flood".to_string(),
                urgency: "high".to_string(),
                image: None,
            })
            .await
            .unwrap()
            .id
    }

    fn new_volunteer(request_id: &str) -> NewVolunteer {
        NewVolunteer {
            volunteer_name: "Lee".to_string(),
            volunteer_phone: "+15550002222".to_string(),
            request_id: request_id.to_string(),
            request_location: "5th Ave".to_string(),
        }
    }

    #[tokio::test]
    async fn test_claim_sets_helping_and_cascades() {
        let db = test_db().await;
        let (requests, volunteers) = coordinators(&db);
        let request_id = file_request(&requests).await;

        let volunteer = volunteers.claim(new_volunteer(&request_id)).await.unwrap();
        assert_eq!(volunteer.status, "helping");
        assert_eq!(volunteer.request_location, "5th Ave");

        let request = request::get_request(db.pool(), &request_id).await.unwrap();
        assert_eq!(request.status, "helping");
    }

    #[tokio::test]
    async fn test_claim_with_dangling_request_still_succeeds() {
        let db = test_db().await;
        let (_, volunteers) = coordinators(&db);

        let volunteer = volunteers
            .claim(new_volunteer("no-such-request"))
            .await
            .unwrap();
        assert_eq!(volunteer.status, "helping");

        let listed = volunteers.list().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_completion_cascades_to_request() {
        let db = test_db().await;
        let (requests, volunteers) = coordinators(&db);
        let request_id = file_request(&requests).await;

        let volunteer = volunteers.claim(new_volunteer(&request_id)).await.unwrap();
        let updated = volunteers
            .apply_update(
                &volunteer.id,
                VolunteerUpdate {
                    status: Some("completed".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, "completed");

        let request = request::get_request(db.pool(), &request_id).await.unwrap();
        assert_eq!(request.status, "completed");
    }

    #[tokio::test]
    async fn test_completion_with_dangling_reference_still_succeeds() {
        let db = test_db().await;
        let (_, volunteers) = coordinators(&db);

        let volunteer = volunteers
            .claim(new_volunteer("no-such-request"))
            .await
            .unwrap();
        let updated = volunteers
            .apply_update(
                &volunteer.id,
                VolunteerUpdate {
                    status: Some("completed".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, "completed");
    }

    #[tokio::test]
    async fn test_non_completed_status_does_not_cascade() {
        let db = test_db().await;
        let (requests, volunteers) = coordinators(&db);
        let request_id = file_request(&requests).await;

        let volunteer = volunteers.claim(new_volunteer(&request_id)).await.unwrap();
        volunteers
            .apply_update(
                &volunteer.id,
                VolunteerUpdate {
                    status: Some("paused".to_string()),
                },
            )
            .await
            .unwrap();

        // The claim cascade already moved the request to helping; an
        // arbitrary volunteer status leaves it alone.
        let request = request::get_request(db.pool(), &request_id).await.unwrap();
        assert_eq!(request.status, "helping");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = test_db().await;
        let (_, volunteers) = coordinators(&db);

        let result = volunteers
            .apply_update(
                "no-such-id",
                VolunteerUpdate {
                    status: Some("completed".to_string()),
                },
            )
            .await;
        assert!(matches!(result, Err(CoordinationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let db = test_db().await;
        let (requests, volunteers) = coordinators(&db);
        let request_id = file_request(&requests).await;

        let first = volunteers.claim(new_volunteer(&request_id)).await.unwrap();
        let second = volunteers.claim(new_volunteer(&request_id)).await.unwrap();

        let listed = volunteers.list().await.unwrap();
        let ids: Vec<_> = listed.into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
