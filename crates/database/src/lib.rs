//! SQLite persistence layer for Beacon.
//!
//! This crate provides async database operations for aid requests and
//! volunteer records using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{models::NewRequest, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:beacon.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // File a request
//!     let request = database::request::create_request(
//!         db.pool(),
//!         &NewRequest {
//!             reporter_name: "Ana".to_string(),
//!             reporter_phone: "+15550001111".to_string(),
//!             location: "5th Ave".to_string(),
//!             latitude: None,
//!             longitude: None,
//!             description: "flood".to_string(),
//!             urgency: "high".to_string(),
//!             image: None,
//!         },
//!     )
//!     .await?;
//!     println!("created {}", request.id);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod request;
pub mod volunteer;

pub use error::{DatabaseError, Result};
pub use models::{AidRequest, NewRequest, NewVolunteer, Volunteer};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/beacon.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing; use a pool size of 1 so every
    /// // query sees the same memory database)
    /// let db = database::Database::connect_with_pool_size("sqlite::memory:", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
