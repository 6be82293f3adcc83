// ABOUTME: Unified error handling system with standard error codes and HTTP response formatting
// ABOUTME: Defines the AppError taxonomy shared by the catalog, ledger, engine and HTTP boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the booking
//! service. It defines standard error types, error codes, and HTTP response
//! formatting so every module reports failures through the same taxonomy:
//! not-found and no-capacity conditions raised by the core, validation errors
//! caught at the boundary, and storage errors surfaced as internal failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed input: empty class name, negative slot count, bad email
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Unrecognized IANA timezone identifier
    #[serde(rename = "INVALID_TIMEZONE")]
    InvalidTimezone,
    /// Referenced class or booking does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Business-rule violation: class has no remaining slots
    #[serde(rename = "NO_SLOTS_AVAILABLE")]
    NoSlotsAvailable,
    /// Unexpected persistence failure
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Internal server error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidTimezone => 400,
            Self::ResourceNotFound => 404,
            Self::NoSlotsAvailable => 409,
            Self::DatabaseError | Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidTimezone => "The requested timezone is not recognized",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::NoSlotsAvailable => "The class has no remaining slots",
            Self::DatabaseError => "Database operation failed",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found (unknown class or booking id)
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input data
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unrecognized timezone identifier
    pub fn invalid_timezone(zone: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidTimezone,
            format!("Invalid timezone: {}", zone.into()),
        )
    }

    /// Class capacity exhausted
    pub fn no_slots_available(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoSlotsAvailable, message)
    }

    /// Database operation failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, err.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error.code = ?self.code, error.message = %self.message, "Request failed");
        } else {
            tracing::debug!(error.code = ?self.code, error.message = %self.message, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
