//! Error types for lifecycle operations.

use database::DatabaseError;
use thiserror::Error;

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Error)]
pub enum CoordinationError {
    /// The referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The payload was rejected at the storage boundary.
    #[error("invalid {entity}: {message}")]
    Validation { entity: &'static str, message: String },

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[source] DatabaseError),
}

impl From<DatabaseError> for CoordinationError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, id } => Self::NotFound { entity, id },
            DatabaseError::Constraint { entity, message } => Self::Validation { entity, message },
            other => Self::Database(other),
        }
    }
}

/// Result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, CoordinationError>;
