// ABOUTME: Booking ledger read operations
// ABOUTME: Ledger rows are written only by the transaction engine and removed only by class cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Booking ledger.
//!
//! Read-only from the outside: inserts happen inside the booking transaction
//! engine and deletions only as a cascade from class deletion.

use sqlx::{sqlite::SqliteRow, Row};

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::Booking;

pub(super) fn booking_from_row(row: &SqliteRow) -> Booking {
    Booking {
        id: row.get("id"),
        class_id: row.get("class_id"),
        client_name: row.get("client_name"),
        client_email: row.get("client_email"),
    }
}

impl Database {
    /// List all bookings made with a given client email, oldest first
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn list_bookings_by_email(&self, email: &str) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query(
            "SELECT id, class_id, client_name, client_email FROM bookings \
             WHERE client_email = ?1 ORDER BY id",
        )
        .bind(email)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list bookings for {email}: {e}")))?;

        Ok(rows.iter().map(booking_from_row).collect())
    }

    /// List every booking in the ledger, oldest first
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn list_all_bookings(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query(
            "SELECT id, class_id, client_name, client_email FROM bookings ORDER BY id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list bookings: {e}")))?;

        Ok(rows.iter().map(booking_from_row).collect())
    }
}
