//! Database error types.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Write rejected by a schema constraint
    #[error("{entity} rejected by storage: {message}")]
    Constraint { entity: &'static str, message: String },

    /// Column serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl DatabaseError {
    /// Map a write error, folding constraint violations into [`DatabaseError::Constraint`].
    pub(crate) fn from_write(entity: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return DatabaseError::Constraint {
                        entity,
                        message: db_err.message().to_string(),
                    };
                }
                _ => {}
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
