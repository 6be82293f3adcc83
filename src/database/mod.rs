// ABOUTME: Database management for the booking service
// ABOUTME: Owns the SQLite pool, runs schema migration and hosts the catalog, ledger, engine and analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! # Database Management
//!
//! This module provides the `SQLite`-backed storage for the booking service.
//! Schema migration runs at startup; the per-domain submodules implement the
//! class catalog, the booking ledger, the booking transaction engine and the
//! analytics aggregator on top of the shared pool.

mod analytics;
mod bookings;
mod classes;
mod engine;
/// In-memory test database helpers used by the integration tests
pub mod test_utils;
mod transactions;

pub use classes::ClassSpec;
pub use transactions::{retry_transaction, TransactionGuard};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Writer contention deadline before SQLite reports a busy error
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database manager for classes and bookings
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if missing) the database and run schema migration
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the pool cannot be
    /// established, or migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let mut options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::config(format!("Invalid database URL '{database_url}': {e}"))
            })?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);

        // WAL is only meaningful for file-backed databases
        if !database_url.contains("memory") {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS classes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                datetime TEXT NOT NULL,
                instructor TEXT NOT NULL,
                slots INTEGER NOT NULL CHECK (slots >= 0)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create classes table: {e}")))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                class_id INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
                client_name TEXT NOT NULL,
                client_email TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create bookings table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookings_class_id ON bookings(class_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create booking index: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bookings_client_email ON bookings(client_email)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create email index: {e}")))?;

        Ok(())
    }
}
