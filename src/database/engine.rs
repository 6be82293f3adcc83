// ABOUTME: Booking transaction engine: atomic check-decrement-insert with clean failure
// ABOUTME: The only component performing multi-table writes; protects the no-over-booking invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Booking transaction engine.
//!
//! A booking is one committed unit of work: the slot decrement and the ledger
//! insert either both apply or neither does. The decrement is a conditional
//! UPDATE (`slots = slots - 1 WHERE id = ? AND slots > 0`) so the availability
//! check and the decrement execute as a single serialized statement — two
//! concurrent bookings against a class with one remaining slot can never both
//! succeed.
//!
//! Domain failures are reported as distinct recoverable conditions and are
//! never retried here; only transient `SQLite` lock contention is retried with
//! bounded exponential backoff.

use super::{retry_transaction, Database, TransactionGuard};
use crate::errors::{AppError, AppResult};
use crate::models::{Booking, ClientEmail};

/// Maximum attempts when the write lock is contended
const MAX_LOCK_RETRIES: u32 = 3;

impl Database {
    /// Book one slot on a class for a client
    ///
    /// # Errors
    ///
    /// - `AppError::ResourceNotFound` if no class exists with `class_id`
    /// - `AppError::NoSlotsAvailable` if the class has no remaining capacity
    /// - `AppError::DatabaseError` on persistence failure; no partial state
    ///   is ever left behind
    pub async fn book_class(
        &self,
        class_id: i64,
        client_name: &str,
        client_email: &ClientEmail,
    ) -> AppResult<Booking> {
        retry_transaction(
            || self.try_book(class_id, client_name, client_email),
            MAX_LOCK_RETRIES,
        )
        .await
    }

    async fn try_book(
        &self,
        class_id: i64,
        client_name: &str,
        client_email: &ClientEmail,
    ) -> AppResult<Booking> {
        let tx = self.pool().begin().await.map_err(|e| {
            AppError::database(format!("Failed to begin booking transaction: {e}"))
        })?;
        let mut guard = TransactionGuard::new(tx);

        // Check and decrement in one statement; rows_affected == 0 means the
        // class is either missing or already at zero slots.
        let decremented =
            sqlx::query("UPDATE classes SET slots = slots - 1 WHERE id = ?1 AND slots > 0")
                .bind(class_id)
                .execute(guard.executor()?)
                .await
                .map_err(|e| {
                    AppError::database(format!(
                        "Failed to decrement slots for class {class_id}: {e}"
                    ))
                })?
                .rows_affected();

        if decremented == 0 {
            let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE id = ?1")
                .bind(class_id)
                .fetch_one(guard.executor()?)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to check class {class_id}: {e}"))
                })?;

            guard.rollback().await?;

            return Err(if exists == 0 {
                AppError::not_found(format!("Class {class_id}"))
            } else {
                AppError::no_slots_available(format!("No slots available for class {class_id}"))
            });
        }

        let booking_id = sqlx::query(
            "INSERT INTO bookings (class_id, client_name, client_email) VALUES (?1, ?2, ?3)",
        )
        .bind(class_id)
        .bind(client_name)
        .bind(client_email.as_str())
        .execute(guard.executor()?)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to insert booking for class {class_id}: {e}"))
        })?
        .last_insert_rowid();

        guard.commit().await?;

        tracing::info!(
            booking.id = booking_id,
            class.id = class_id,
            "Booking confirmed"
        );

        Ok(Booking {
            id: booking_id,
            class_id,
            client_name: client_name.to_owned(),
            client_email: client_email.as_str().to_owned(),
        })
    }
}
