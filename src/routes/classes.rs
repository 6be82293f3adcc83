// ABOUTME: Route handlers for the class catalog REST API
// ABOUTME: CRUD endpoints plus timezone-projected listing of scheduled classes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Class catalog routes.
//!
//! Listing converts stored class times to the caller's requested timezone
//! (default: the reference zone) before returning them.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    database::ClassSpec,
    errors::AppError,
    models::FitnessClass,
    server::ServerResources,
    timezone::{self, REFERENCE_ZONE},
};

/// Response for a class
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassResponse {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Scheduled time, projected to the requested zone on list endpoints
    pub datetime: String,
    /// Instructor name
    pub instructor: String,
    /// Slots remaining
    pub slots: i64,
}

impl From<FitnessClass> for ClassResponse {
    fn from(class: FitnessClass) -> Self {
        Self {
            id: class.id,
            name: class.name,
            datetime: class.datetime,
            instructor: class.instructor,
            slots: class.slots,
        }
    }
}

/// Request body for creating or fully updating a class
#[derive(Debug, Deserialize)]
pub struct ClassBody {
    /// Display name
    pub name: String,
    /// Scheduled time, ISO-8601 local-naive in the reference zone
    pub datetime: String,
    /// Instructor name
    pub instructor: String,
    /// Slot count
    pub slots: i64,
}

impl From<ClassBody> for ClassSpec {
    fn from(body: ClassBody) -> Self {
        Self {
            name: body.name,
            datetime: body.datetime,
            instructor: body.instructor,
            slots: body.slots,
        }
    }
}

/// Query parameters for listing classes
#[derive(Debug, Deserialize, Default)]
pub struct ListClassesQuery {
    /// Timezone to project class times into (default: reference zone)
    pub timezone: Option<String>,
}

/// Class catalog routes handler
pub struct ClassRoutes;

impl ClassRoutes {
    /// Create all class catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/classes", get(Self::handle_list))
            .route("/api/classes", post(Self::handle_create))
            .route("/api/classes/available", get(Self::handle_available))
            .route("/api/classes/:id", get(Self::handle_get))
            .route("/api/classes/:id", put(Self::handle_update))
            .route("/api/classes/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/classes - list all classes with projected times
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListClassesQuery>,
    ) -> Result<Response, AppError> {
        let target = match query.timezone {
            Some(name) => timezone::parse_zone(&name)?,
            None => REFERENCE_ZONE,
        };

        let classes = resources.database.list_classes().await?;
        let projected = timezone::project_class_times(classes, target)?;

        let response: Vec<ClassResponse> = projected.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/classes - create a new class
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<ClassBody>,
    ) -> Result<Response, AppError> {
        let spec: ClassSpec = body.into();
        let class = resources.database.create_class(&spec).await?;

        let response: ClassResponse = class.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/classes/available - classes with open slots
    async fn handle_available(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let classes = resources.database.list_available_classes().await?;

        let response: Vec<ClassResponse> = classes.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/classes/:id - fetch a single class
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let class = resources
            .database
            .get_class_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Class {id}")))?;

        let response: ClassResponse = class.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/classes/:id - full replacement of class fields
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(body): Json<ClassBody>,
    ) -> Result<Response, AppError> {
        let spec: ClassSpec = body.into();
        let class = resources
            .database
            .update_class(id, &spec)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Class {id}")))?;

        let response: ClassResponse = class.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/classes/:id - delete a class, cascading its bookings
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_class(id).await?;

        if !deleted {
            return Err(AppError::not_found(format!("Class {id}")));
        }

        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
