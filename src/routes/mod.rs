// ABOUTME: Route module organization for the booking service HTTP endpoints
// ABOUTME: Route definitions grouped by domain with thin handlers delegating to the database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Route module for the booking service.
//!
//! Each domain module contains only route definitions and thin handler
//! functions; request validation happens here so the transaction engine never
//! sees malformed input.

/// Analytics summary routes
pub mod analytics;
/// Booking creation and ledger read routes
pub mod bookings;
/// Class catalog CRUD routes
pub mod classes;
/// Health check and system status routes
pub mod health;

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::ServerResources;

/// Assemble the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(classes::ClassRoutes::routes(resources.clone()))
        .merge(bookings::BookingRoutes::routes(resources.clone()))
        .merge(analytics::AnalyticsRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
