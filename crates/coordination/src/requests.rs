//! The aid request lifecycle.

use database::{request, AidRequest, Database, DatabaseError, NewRequest};
use tracing::{debug, info};

use crate::error::Result;
use crate::status::Status;

/// Fields a caller may change on an existing request.
#[derive(Debug, Clone, Default)]
pub struct RequestUpdate {
    /// New status, written verbatim. No transition guard exists: any string
    /// overwrites any other.
    pub status: Option<String>,
    /// A volunteer name to append to the claim list.
    pub volunteer: Option<String>,
}

/// Owns the request lifecycle: creation, listing, and status/claim updates.
#[derive(Debug, Clone)]
pub struct RequestCoordinator {
    db: Database,
}

impl RequestCoordinator {
    /// Create a coordinator backed by the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// File a new aid request.
    ///
    /// Status starts at `pending` with an empty claim list regardless of
    /// caller input; the returned record carries the server-assigned id and
    /// timestamp.
    pub async fn create(&self, new: NewRequest) -> Result<AidRequest> {
        let request = request::create_request(self.db.pool(), &new).await?;
        info!(id = %request.id, urgency = %request.urgency, "created aid request");
        Ok(request)
    }

    /// List all requests, most recent first.
    pub async fn list(&self) -> Result<Vec<AidRequest>> {
        Ok(request::list_requests(self.db.pool()).await?)
    }

    /// Apply a caller-driven update to a request.
    ///
    /// Fetches, mutates, and writes back. Two overlapping updates to the
    /// same id can lose one of the writes; that race is accepted.
    pub async fn apply_update(&self, id: &str, update: RequestUpdate) -> Result<AidRequest> {
        let mut request = request::get_request(self.db.pool(), id).await?;

        if let Some(status) = update.status {
            request.status = status;
        }
        if let Some(name) = update.volunteer {
            request.volunteers.push(name);
        }

        request::update_request(self.db.pool(), &request).await?;
        Ok(request)
    }

    /// Overwrite a request's status on behalf of a cascade.
    ///
    /// Best-effort: a request that no longer exists is skipped silently.
    pub(crate) async fn set_status(&self, id: &str, status: Status) -> Result<()> {
        let mut request = match request::get_request(self.db.pool(), id).await {
            Ok(request) => request,
            Err(DatabaseError::NotFound { .. }) => {
                debug!(id, "request not found, skipping status cascade");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        request.status = status.as_str().to_string();
        request::update_request(self.db.pool(), &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinationError;

    async fn test_db() -> Database {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn new_request(reporter: &str) -> NewRequest {
        NewRequest {
            reporter_name: reporter.to_string(),
            reporter_phone: "+15550001111".to_string(),
            location: "5th Ave".to_string(),
            latitude: None,
            longitude: None,
            description: "flood".to_string(),
            urgency: "high".to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_forces_pending_and_empty_volunteers() {
        let coordinator = RequestCoordinator::new(test_db().await);

        let request = coordinator.create(new_request("Ana")).await.unwrap();
        assert_eq!(request.status, "pending");
        assert!(request.volunteers.is_empty());
        assert!(!request.id.is_empty());
        assert!(!request.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_lone_coordinate() {
        let coordinator = RequestCoordinator::new(test_db().await);

        let mut partial = new_request("Ana");
        partial.latitude = Some(40.7484);

        let result = coordinator.create(partial).await;
        assert!(matches!(result, Err(CoordinationError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let coordinator = RequestCoordinator::new(test_db().await);

        let first = coordinator.create(new_request("Ana")).await.unwrap();
        let second = coordinator.create(new_request("Bob")).await.unwrap();
        let third = coordinator.create(new_request("Cam")).await.unwrap();

        let listed = coordinator.list().await.unwrap();
        let ids: Vec<_> = listed.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_apply_update_overwrites_status_verbatim() {
        let coordinator = RequestCoordinator::new(test_db().await);
        let request = coordinator.create(new_request("Ana")).await.unwrap();

        // No guard: arbitrary strings are stored as-is
        for status in ["helping", "completed", "on-hold", "pending"] {
            let updated = coordinator
                .apply_update(
                    &request.id,
                    RequestUpdate {
                        status: Some(status.to_string()),
                        volunteer: None,
                    },
                )
                .await
                .unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[tokio::test]
    async fn test_apply_update_appends_volunteers() {
        let coordinator = RequestCoordinator::new(test_db().await);
        let request = coordinator.create(new_request("Ana")).await.unwrap();

        for name in ["Lee", "Mia", "Lee"] {
            coordinator
                .apply_update(
                    &request.id,
                    RequestUpdate {
                        status: None,
                        volunteer: Some(name.to_string()),
                    },
                )
                .await
                .unwrap();
        }

        let fetched = request::get_request(coordinator.db.pool(), &request.id)
            .await
            .unwrap();
        // Append-only: order preserved, duplicates retained
        assert_eq!(fetched.volunteers, vec!["Lee", "Mia", "Lee"]);
        // Status untouched by claim-list appends
        assert_eq!(fetched.status, "pending");
    }

    #[tokio::test]
    async fn test_apply_update_unknown_id_is_not_found() {
        let coordinator = RequestCoordinator::new(test_db().await);

        let result = coordinator
            .apply_update(
                "no-such-id",
                RequestUpdate {
                    status: Some("helping".to_string()),
                    volunteer: None,
                },
            )
            .await;
        assert!(matches!(result, Err(CoordinationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_set_status_missing_request_is_a_noop() {
        let coordinator = RequestCoordinator::new(test_db().await);

        coordinator
            .set_status("no-such-id", Status::Completed)
            .await
            .unwrap();
    }
}
