// ABOUTME: Analytics aggregator deriving summary statistics from the catalog and ledger
// ABOUTME: Read-only point-in-time scan; top class ties break deterministically by lowest id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Analytics aggregator.
//!
//! Reads some valid committed state; no transactional coordination with
//! concurrent bookings is required.

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::ClassSummary;

impl Database {
    /// Summarize class and booking counts plus the most-booked class
    ///
    /// `top_class` groups bookings by class, counts them, and picks the
    /// maximum; ties break on the lowest class id. `None` when the ledger is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn get_summary(&self) -> AppResult<ClassSummary> {
        let total_classes = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count classes: {e}")))?;

        let total_bookings = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count bookings: {e}")))?;

        let top_class = sqlx::query_scalar::<_, String>(
            r#"
            SELECT c.name
            FROM bookings b
            JOIN classes c ON c.id = b.class_id
            GROUP BY b.class_id
            ORDER BY COUNT(b.id) DESC, b.class_id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to compute top class: {e}")))?;

        Ok(ClassSummary {
            total_classes,
            total_bookings,
            top_class,
        })
    }
}
