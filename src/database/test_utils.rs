// ABOUTME: Test utilities for creating isolated in-memory database instances
// ABOUTME: Named shared-cache memory databases so every pooled connection sees the same data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

use std::sync::atomic::{AtomicU64, Ordering};

use super::Database;
use crate::errors::AppResult;

static TEST_DB_SEQ: AtomicU64 = AtomicU64::new(0);

/// Create an isolated in-memory test database with the schema migrated
///
/// Each call gets a uniquely named shared-cache memory database, so pooled
/// connections within one test share state while separate tests stay isolated.
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> AppResult<Database> {
    let seq = TEST_DB_SEQ.fetch_add(1, Ordering::Relaxed);
    let database_url = format!("sqlite:file:zenith_test_{seq}?mode=memory&cache=shared");
    Database::new(&database_url).await
}
