// ABOUTME: Route handler for the analytics summary endpoint
// ABOUTME: Exposes class/booking counts and the most-booked class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{errors::AppError, models::ClassSummary, server::ServerResources};

/// Response for the analytics summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Count of all classes
    pub total_classes: i64,
    /// Count of all bookings
    pub total_bookings: i64,
    /// Most-booked class name, absent when there are zero bookings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_class: Option<String>,
}

impl From<ClassSummary> for SummaryResponse {
    fn from(summary: ClassSummary) -> Self {
        Self {
            total_classes: summary.total_classes,
            total_bookings: summary.total_bookings,
            top_class: summary.top_class,
        }
    }
}

/// Analytics routes handler
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/analytics/summary", get(Self::handle_summary))
            .with_state(resources)
    }

    /// Handle GET /api/analytics/summary
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let summary = resources.database.get_summary().await?;

        let response: SummaryResponse = summary.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
