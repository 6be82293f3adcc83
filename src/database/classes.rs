// ABOUTME: Class catalog operations: CRUD over fitness classes with the slots >= 0 invariant
// ABOUTME: Deletion cascades booking removal inside a single transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Class catalog.
//!
//! Pure CRUD over class records. The only invariant owned here is
//! `slots >= 0`, enforced at creation/update time and by the schema CHECK;
//! slot decrements during booking belong to the transaction engine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::{Database, TransactionGuard};
use crate::errors::{AppError, AppResult};
use crate::models::FitnessClass;

/// Field set for creating or fully replacing a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Display name, non-empty
    pub name: String,
    /// Scheduled time as ISO-8601 local-naive in the reference zone
    pub datetime: String,
    /// Instructor name
    pub instructor: String,
    /// Initial (or replacement) slot count, >= 0
    pub slots: i64,
}

impl ClassSpec {
    /// Validate field constraints before any write
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for an empty name, a negative slot
    /// count, or an unparseable schedule time.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("Class name must not be empty"));
        }
        if self.slots < 0 {
            return Err(AppError::invalid_input(format!(
                "Class slots must be >= 0, got {}",
                self.slots
            )));
        }
        if NaiveDateTime::parse_from_str(&self.datetime, "%Y-%m-%dT%H:%M:%S%.f").is_err() {
            return Err(AppError::invalid_input(format!(
                "Class time '{}' is not an ISO-8601 local datetime",
                self.datetime
            )));
        }
        Ok(())
    }
}

pub(super) fn class_from_row(row: &SqliteRow) -> FitnessClass {
    FitnessClass {
        id: row.get("id"),
        name: row.get("name"),
        datetime: row.get("datetime"),
        instructor: row.get("instructor"),
        slots: row.get("slots"),
    }
}

impl Database {
    /// Create a new class, assigning a fresh id
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for invalid fields, or a database
    /// error on persistence failure.
    pub async fn create_class(&self, spec: &ClassSpec) -> AppResult<FitnessClass> {
        spec.validate()?;

        let result = sqlx::query(
            "INSERT INTO classes (name, datetime, instructor, slots) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&spec.name)
        .bind(&spec.datetime)
        .bind(&spec.instructor)
        .bind(spec.slots)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create class: {e}")))?;

        let id = result.last_insert_rowid();
        tracing::info!(class.id = id, class.name = %spec.name, "Class created");

        self.get_class_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Class {id} missing after insert")))
    }

    /// Get a class by id, `None` if it does not exist
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn get_class_by_id(&self, id: i64) -> AppResult<Option<FitnessClass>> {
        let row = sqlx::query(
            "SELECT id, name, datetime, instructor, slots FROM classes WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch class {id}: {e}")))?;

        Ok(row.as_ref().map(class_from_row))
    }

    /// List all classes in id order
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn list_classes(&self) -> AppResult<Vec<FitnessClass>> {
        let rows =
            sqlx::query("SELECT id, name, datetime, instructor, slots FROM classes ORDER BY id")
                .fetch_all(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to list classes: {e}")))?;

        Ok(rows.iter().map(class_from_row).collect())
    }

    /// List classes that still have open slots
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn list_available_classes(&self) -> AppResult<Vec<FitnessClass>> {
        let rows = sqlx::query(
            "SELECT id, name, datetime, instructor, slots FROM classes WHERE slots > 0 ORDER BY id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list available classes: {e}")))?;

        Ok(rows.iter().map(class_from_row).collect())
    }

    /// Fully replace a class's fields, `None` if the id does not exist
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for invalid fields, or a database
    /// error on persistence failure.
    pub async fn update_class(
        &self,
        id: i64,
        spec: &ClassSpec,
    ) -> AppResult<Option<FitnessClass>> {
        spec.validate()?;

        let updated = sqlx::query(
            "UPDATE classes SET name = ?1, datetime = ?2, instructor = ?3, slots = ?4 WHERE id = ?5",
        )
        .bind(&spec.name)
        .bind(&spec.datetime)
        .bind(&spec.instructor)
        .bind(spec.slots)
        .bind(id)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to update class {id}: {e}")))?
        .rows_affected();

        if updated == 0 {
            return Ok(None);
        }

        self.get_class_by_id(id).await
    }

    /// Delete a class and cascade deletion of its bookings
    ///
    /// Both deletes run inside one transaction so no orphaned booking is ever
    /// observable. Returns whether a class row was actually removed.
    ///
    /// # Errors
    ///
    /// Returns a database error on persistence failure.
    pub async fn delete_class(&self, id: i64) -> AppResult<bool> {
        let tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin delete transaction: {e}")))?;
        let mut guard = TransactionGuard::new(tx);

        let bookings_removed = sqlx::query("DELETE FROM bookings WHERE class_id = ?1")
            .bind(id)
            .execute(guard.executor()?)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to cascade bookings for class {id}: {e}"))
            })?
            .rows_affected();

        let classes_removed = sqlx::query("DELETE FROM classes WHERE id = ?1")
            .bind(id)
            .execute(guard.executor()?)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete class {id}: {e}")))?
            .rows_affected();

        guard.commit().await?;

        if classes_removed > 0 {
            tracing::info!(
                class.id = id,
                bookings_removed = bookings_removed,
                "Class deleted with cascade"
            );
        }

        Ok(classes_removed > 0)
    }
}
