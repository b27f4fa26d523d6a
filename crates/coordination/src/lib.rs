//! Request and volunteer lifecycle coordination for Beacon.
//!
//! This crate owns the two lifecycle models and the linkage between them:
//!
//! - [`RequestCoordinator`] - aid requests, their status, and their claim list
//! - [`VolunteerCoordinator`] - volunteer claims, whose status changes
//!   cascade onto the linked request (`claim` pushes it to `helping`,
//!   completion pushes it to `completed`)
//!
//! Status transitions are caller-driven and unchecked; the cascades are
//! best-effort and never fail the operation that triggered them. The
//! database handle is injected through the constructors, so tests run
//! against in-memory SQLite.
//!
//! # Example
//!
//! ```no_run
//! use coordination::{RequestCoordinator, VolunteerCoordinator};
//! use database::{Database, NewRequest, NewVolunteer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite:beacon.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let requests = RequestCoordinator::new(db.clone());
//!     let volunteers = VolunteerCoordinator::new(db, requests.clone());
//!
//!     let request = requests
//!         .create(NewRequest {
//!             reporter_name: "Ana".to_string(),
//!             reporter_phone: "+15550001111".to_string(),
//!             location: "5th Ave".to_string(),
//!             latitude: None,
//!             longitude: None,
//!             description: "flood".to_string(),
//!             urgency: "high".to_string(),
//!             image: None,
//!         })
//!         .await?;
//!
//!     volunteers
//!         .claim(NewVolunteer {
//!             volunteer_name: "Lee".to_string(),
//!             volunteer_phone: "+15550002222".to_string(),
//!             request_id: request.id,
//!             request_location: request.location,
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod error;
mod requests;
mod status;
mod volunteers;

pub use error::{CoordinationError, Result};
pub use requests::{RequestCoordinator, RequestUpdate};
pub use status::{Status, UnknownStatus};
pub use volunteers::{VolunteerCoordinator, VolunteerUpdate};
