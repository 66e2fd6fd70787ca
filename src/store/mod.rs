//! Persistence Binding
//!
//! This module owns the SQLite connection pool shared by every handler and
//! applies the embedded schema (`migrations/`) when the pool is opened.
//! Entity queries live next to their domain module (`product::repository`,
//! `category::repository`, `cart::repository`) and borrow a [`Store`].

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// URL of a private, process-local database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying the embedded schema failed.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Handle to the relational store.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the store at `database_url` and make sure the schema exists.
    ///
    /// In-memory URLs are pinned to a single connection that is never
    /// recycled, since the database lives exactly as long as its connection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the URL is invalid or the connection
    /// cannot be established, `StoreError::Migrate` if the schema cannot be
    /// applied.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .connect_with(options)
                .await?
        };

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(database_url, "Store schema is up to date");

        Ok(Self { pool })
    }

    /// Open a fresh, isolated in-memory store.
    ///
    /// # Errors
    ///
    /// See [`Store::connect`].
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(IN_MEMORY_URL, 1).await
    }

    /// The underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trip a trivial statement to prove the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the statement fails.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
