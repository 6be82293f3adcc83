// ABOUTME: Library entry point for the ZenithFit booking service
// ABOUTME: Exposes the class catalog, booking ledger, transaction engine, analytics and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

#![deny(unsafe_code)]

//! # ZenithFit Booking Service
//!
//! Fitness-class scheduling and booking API backed by `SQLite`. The core of the
//! service is the booking transaction engine: a class's slot counter is only
//! decremented inside a committed transaction that also appends the ledger
//! entry, so a class can never be over-booked even under concurrent requests.
//!
//! ## Modules
//!
//! - **database**: class catalog, booking ledger, transaction engine and analytics
//! - **routes**: axum HTTP boundary translating domain errors to REST responses
//! - **timezone**: projection of stored class times into caller-requested zones
//! - **errors**: unified `AppError`/`ErrorCode` taxonomy with HTTP mapping

/// Environment-based server configuration
pub mod config;
/// Database access: catalog, ledger, booking engine and analytics
pub mod database;
/// Unified error handling with standard error codes and HTTP responses
pub mod errors;
/// Structured logging setup built on `tracing`
pub mod logging;
/// Core domain types (classes, bookings, validated email)
pub mod models;
/// HTTP route definitions organized by domain
pub mod routes;
/// Server assembly: shared resources and the axum serve loop
pub mod server;
/// Stateless time projection between the reference zone and display zones
pub mod timezone;
