// ABOUTME: Route handlers for booking creation and ledger reads
// ABOUTME: Validates the client email at the boundary before it reaches the transaction engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Booking routes.
//!
//! The book endpoint constructs the validated email newtype first, so the
//! transaction engine only ever deals with not-found and capacity conditions.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    errors::AppError,
    models::{Booking, ClientEmail},
    server::ServerResources,
};

/// Response for a booking
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Unique identifier
    pub id: i64,
    /// Booked class
    pub class_id: i64,
    /// Client display name
    pub client_name: String,
    /// Client email
    pub client_email: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            class_id: booking.class_id,
            client_name: booking.client_name,
            client_email: booking.client_email,
        }
    }
}

/// Request body for booking a slot
#[derive(Debug, Deserialize)]
pub struct BookingBody {
    /// Class to book
    pub class_id: i64,
    /// Client display name
    pub client_name: String,
    /// Client email, validated before booking
    pub client_email: String,
}

/// Query parameters for listing bookings by client
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// Client email to fetch bookings for
    pub email: String,
}

/// Booking routes handler
pub struct BookingRoutes;

impl BookingRoutes {
    /// Create all booking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/bookings", post(Self::handle_book))
            .route("/api/bookings", get(Self::handle_list_by_email))
            .route("/api/bookings/all", get(Self::handle_list_all))
            .with_state(resources)
    }

    /// Handle POST /api/bookings - book a slot on a class
    async fn handle_book(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<BookingBody>,
    ) -> Result<Response, AppError> {
        let email = ClientEmail::parse(&body.client_email)?;

        let booking = resources
            .database
            .book_class(body.class_id, &body.client_name, &email)
            .await?;

        let response: BookingResponse = booking.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/bookings?email= - bookings for one client
    async fn handle_list_by_email(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListBookingsQuery>,
    ) -> Result<Response, AppError> {
        let bookings = resources.database.list_bookings_by_email(&query.email).await?;

        let response: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/bookings/all - the full ledger
    async fn handle_list_all(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let bookings = resources.database.list_all_bookings().await?;

        let response: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
