// ABOUTME: Pure validation of submitted workout payloads against active feature flags
// ABOUTME: Produces a normalized WorkoutRecord or a rejection reason, no side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Workout payload validation.
//!
//! [`validate`] is a pure function: it inspects an untyped JSON candidate,
//! the active [`FeatureFlags`], and the already-stored records, and returns
//! either a normalized [`WorkoutRecord`] or a [`ValidationError`]. Storage
//! insertion is the caller's responsibility and must happen inside the same
//! critical section as the duplicate check.

use serde_json::Value;
use thiserror::Error;

use crate::features::FeatureFlags;
use crate::models::WorkoutRecord;

/// Rejection reasons for a submitted workout payload.
///
/// Display strings are part of the API contract; they surface verbatim in
/// the `error` field of 400 responses.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Body parsed to something other than a JSON object
    #[error("Invalid or missing JSON body")]
    InvalidBody,
    /// `workout` missing or empty after trimming
    #[error("'workout' is required")]
    NameRequired,
    /// `workout` exceeds the active name length limit
    #[error("'workout' too long")]
    NameTooLong,
    /// `duration` absent, or not a JSON integer (floats and numeric
    /// strings both fail)
    #[error("'duration' must be an integer")]
    DurationNotInteger,
    /// `duration` is zero or negative
    #[error("'duration' must be > 0 minutes")]
    DurationNotPositive,
    /// `duration` exceeds the active duration limit
    #[error("'duration' too large")]
    DurationTooLarge,
    /// A stored record already has this name (trimmed, case-insensitive)
    #[error("workout already exists")]
    DuplicateName,
}

/// Normalize a workout name for duplicate comparison: trim + lowercase.
#[must_use]
pub fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Coerce a JSON value to its string form, the way lenient form handling
/// would: strings pass through, scalars render, absent values become empty.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Validate a candidate payload and produce the normalized record.
///
/// Checks run in a fixed order and all must pass: object shape, name
/// presence and length, duration type and range, duplicate name, and
/// finally the optional category (included only when the flags enable
/// categories and the caller supplied a non-empty value).
pub fn validate(
    candidate: &Value,
    flags: &FeatureFlags,
    existing: &[WorkoutRecord],
) -> Result<WorkoutRecord, ValidationError> {
    let body = candidate.as_object().ok_or(ValidationError::InvalidBody)?;

    let workout = coerce_string(body.get("workout")).trim().to_owned();
    if workout.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if workout.chars().count() > flags.max_name_len {
        return Err(ValidationError::NameTooLong);
    }

    // Strict integer check: serde_json keeps 30.0 as f64, so as_i64 fails
    // for floats as well as for strings and absent values.
    let duration = body
        .get("duration")
        .and_then(Value::as_i64)
        .ok_or(ValidationError::DurationNotInteger)?;
    if duration <= 0 {
        return Err(ValidationError::DurationNotPositive);
    }
    if duration > flags.max_duration {
        return Err(ValidationError::DurationTooLarge);
    }

    let normalized = normalized_name(&workout);
    if existing
        .iter()
        .any(|record| normalized_name(&record.workout) == normalized)
    {
        return Err(ValidationError::DuplicateName);
    }

    let category = if flags.categories {
        let raw = coerce_string(body.get("category"));
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    } else {
        None
    };

    Ok(WorkoutRecord {
        workout,
        duration,
        category,
    })
}
