// ABOUTME: Stateless projection of stored class times into caller-requested display zones
// ABOUTME: Stored times are local-naive in the reference zone (Asia/Kolkata) and rendered as RFC 3339
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Time projection for the read path.
//!
//! Class times are persisted as ISO-8601 local-naive strings interpreted in
//! the fixed reference zone. Projection reinterprets each stored time in the
//! reference zone, converts it to the requested zone, and replaces the time
//! field with the RFC 3339 rendering. Times that already carry a UTC offset
//! are honored as absolute instants, which makes projection round-trippable.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::errors::{AppError, AppResult};
use crate::models::FitnessClass;

/// The fixed zone in which class times are stored
pub const REFERENCE_ZONE: Tz = chrono_tz::Asia::Kolkata;

/// Parse an IANA zone identifier
///
/// # Errors
///
/// Returns `AppError::InvalidTimezone` citing the offending name.
pub fn parse_zone(name: &str) -> AppResult<Tz> {
    name.parse()
        .map_err(|_| AppError::invalid_timezone(name))
}

/// Project every class's stored time into `target`, leaving other fields unchanged
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if a stored time string cannot be parsed.
pub fn project_class_times(
    classes: Vec<FitnessClass>,
    target: Tz,
) -> AppResult<Vec<FitnessClass>> {
    classes
        .into_iter()
        .map(|class| project_class(class, target))
        .collect()
}

fn project_class(mut class: FitnessClass, target: Tz) -> AppResult<FitnessClass> {
    let projected = if let Ok(absolute) = DateTime::parse_from_rfc3339(&class.datetime) {
        absolute.with_timezone(&target)
    } else {
        let naive = NaiveDateTime::parse_from_str(&class.datetime, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|e| {
                AppError::invalid_input(format!(
                    "Class {} has unparseable time '{}': {e}",
                    class.id, class.datetime
                ))
            })?;

        let localized = match REFERENCE_ZONE.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => {
                return Err(AppError::invalid_input(format!(
                    "Class {} time '{}' does not exist in {}",
                    class.id, class.datetime, REFERENCE_ZONE
                )))
            }
        };

        localized.with_timezone(&target)
    };

    class.datetime = projected.to_rfc3339();
    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yoga(datetime: &str) -> FitnessClass {
        FitnessClass {
            id: 1,
            name: "Yoga".into(),
            datetime: datetime.into(),
            instructor: "Ana".into(),
            slots: 5,
        }
    }

    #[test]
    fn parses_known_zones() {
        assert!(parse_zone("UTC").is_ok());
        assert!(parse_zone("America/New_York").is_ok());
        assert!(parse_zone("Asia/Kolkata").is_ok());
    }

    #[test]
    fn rejects_unknown_zone() {
        let err = parse_zone("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidTimezone);
        assert!(err.message.contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn projects_reference_time_to_utc() {
        let projected =
            project_class_times(vec![yoga("2025-07-06T08:00:00")], chrono_tz::UTC).unwrap();
        assert_eq!(projected[0].datetime, "2025-07-06T02:30:00+00:00");
    }

    #[test]
    fn projection_preserves_other_fields() {
        let projected =
            project_class_times(vec![yoga("2025-07-06T08:00:00")], chrono_tz::UTC).unwrap();
        assert_eq!(projected[0].name, "Yoga");
        assert_eq!(projected[0].instructor, "Ana");
        assert_eq!(projected[0].slots, 5);
    }

    #[test]
    fn unparseable_time_is_rejected() {
        let err = project_class_times(vec![yoga("yesterday-ish")], chrono_tz::UTC).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }
}
