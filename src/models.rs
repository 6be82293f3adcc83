// ABOUTME: Core domain types for the booking service
// ABOUTME: Fitness classes, booking ledger entries, analytics summary and the validated email newtype
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Core data models shared between the database layer and the HTTP boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// A scheduled fitness class with fixed capacity
///
/// `datetime` is an ISO-8601 local-naive string stored in the reference zone
/// (see [`crate::timezone::REFERENCE_ZONE`]); `slots` is the remaining bookable
/// capacity and is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessClass {
    /// Unique identifier assigned on creation
    pub id: i64,
    /// Display name, non-empty
    pub name: String,
    /// Scheduled time in the reference zone
    pub datetime: String,
    /// Instructor name
    pub instructor: String,
    /// Slots remaining, always >= 0
    pub slots: i64,
}

/// A client's reservation of one slot on a class
///
/// Created only by the booking transaction engine and immutable thereafter;
/// removed only when the parent class is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier assigned on creation
    pub id: i64,
    /// Parent class, guaranteed to exist at booking time
    pub class_id: i64,
    /// Client display name
    pub client_name: String,
    /// Client email, syntactically validated at the boundary
    pub client_email: String,
}

/// Point-in-time analytics summary over the catalog and ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Count of all classes
    pub total_classes: i64,
    /// Count of all bookings
    pub total_bookings: i64,
    /// Name of the most-booked class, ties broken by lowest class id;
    /// `None` when there are zero bookings
    pub top_class: Option<String>,
}

/// A syntactically valid client email address
///
/// Constructed once at the request boundary so the transaction engine never
/// sees an unvalidated address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEmail(String);

impl ClientEmail {
    /// Validate and wrap a raw email string
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the address is not of the form
    /// `local@domain` with a dotted domain part.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let email = raw.trim();

        let Some((local, domain)) = email.split_once('@') else {
            return Err(AppError::invalid_input(format!(
                "Invalid email address: {raw}"
            )));
        };

        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');

        if local.is_empty() || domain.is_empty() || !domain_ok || email.contains(char::is_whitespace)
        {
            return Err(AppError::invalid_input(format!(
                "Invalid email address: {raw}"
            )));
        }

        Ok(Self(email.to_owned()))
    }

    /// Borrow the validated address
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the newtype, returning the validated address
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClientEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
