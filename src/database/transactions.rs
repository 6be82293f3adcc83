// ABOUTME: Transaction management with an RAII rollback guard and bounded retry for SQLite writes
// ABOUTME: Guarantees a booking either commits whole or leaves no observable state behind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Transaction management for multi-row, multi-table writes.
//!
//! - `TransactionGuard`: RAII wrapper ensuring automatic rollback if not committed
//! - `retry_transaction`: exponential backoff for transient `SQLite` lock errors
//!
//! The booking engine is the only component performing multi-table writes; it
//! wraps each booking in a guard so a failure at any step rolls the whole unit
//! of work back. Domain failures (unknown class, exhausted capacity) are never
//! retried — only lock contention and timeouts are.

use std::future::Future;
use std::time::Duration;

use sqlx::{Sqlite, Transaction};
use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::errors::{AppError, AppResult};

/// Retry a transactional operation if it fails due to lock contention
///
/// Non-retryable errors (domain failures, constraint violations, invalid data)
/// are propagated immediately without retry; the caller decides whether to
/// retry those.
///
/// # Errors
///
/// Returns the last error if the operation failed after `max_retries`
/// attempts, or the first non-retryable error.
pub async fn retry_transaction<F, Fut, T>(mut f: F, max_retries: u32) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempts = 0;
    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                attempts += 1;
                if attempts >= max_retries {
                    error!(
                        attempts = attempts,
                        error = %e,
                        "Transaction failed after max retries"
                    );
                    return Err(e);
                }

                if is_retryable_error(&e.message) {
                    // Exponential backoff: 10ms, 20ms, 40ms, ...
                    let backoff_ms = 10 * (1 << attempts);
                    warn!(
                        attempt = attempts,
                        backoff_ms = backoff_ms,
                        error = %e,
                        "Transaction hit transient lock error, retrying after backoff"
                    );
                    sleep(Duration::from_millis(backoff_ms)).await;
                } else {
                    return Err(e);
                }
            }
        }
    }
}

/// Check whether a database error message indicates transient contention
///
/// `SQLite` reports writer contention as "database is locked" or "busy";
/// constraint violations and domain errors are never retryable.
fn is_retryable_error(error_msg: &str) -> bool {
    let error_lower = error_msg.to_lowercase();

    if error_lower.contains("constraint") {
        return false;
    }

    error_lower.contains("database is locked")
        || error_lower.contains("locked")
        || error_lower.contains("busy")
        || error_lower.contains("timed out")
        || error_lower.contains("timeout")
}

/// RAII guard for database transactions ensuring automatic rollback on drop
///
/// Wraps a `SQLx` transaction and provides:
/// - automatic rollback if the guard is dropped without calling `commit()`
/// - type-safe commit that consumes the guard (prevents double-commit)
pub struct TransactionGuard<'c> {
    transaction: Option<Transaction<'c, Sqlite>>,
    committed: bool,
}

impl<'c> TransactionGuard<'c> {
    /// Create a new guard from a transaction obtained via `pool.begin()`
    #[must_use]
    pub fn new(transaction: Transaction<'c, Sqlite>) -> Self {
        Self {
            transaction: Some(transaction),
            committed: false,
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails or the transaction was already
    /// consumed.
    pub async fn commit(mut self) -> AppResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.commit()
                    .await
                    .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;
                self.committed = true;
                debug!("Transaction committed");
                Ok(())
            }
            None => Err(AppError::internal(
                "Transaction already consumed - cannot commit",
            )),
        }
    }

    /// Explicitly roll back the transaction and consume the guard
    ///
    /// Dropping the guard without committing also rolls back; this method
    /// surfaces rollback failures instead of swallowing them.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollback fails or the transaction was already
    /// consumed.
    pub async fn rollback(mut self) -> AppResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.rollback().await.map_err(|e| {
                    AppError::database(format!("Transaction rollback failed: {e}"))
                })?;
                debug!("Transaction rolled back explicitly");
                Ok(())
            }
            None => Err(AppError::internal(
                "Transaction already consumed - cannot rollback",
            )),
        }
    }

    /// Get the underlying connection for executing queries inside the transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was used after commit or rollback.
    pub fn executor(&mut self) -> AppResult<&mut sqlx::SqliteConnection> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            AppError::internal("Transaction already consumed - guard used after commit/rollback")
        })
    }
}

impl Drop for TransactionGuard<'_> {
    fn drop(&mut self) {
        if self.transaction.is_some() && !self.committed {
            // SQLx rolls the transaction back when it is dropped; log for observability
            warn!("TransactionGuard dropped without commit - transaction will be rolled back");
        }
    }
}
