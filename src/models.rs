// ABOUTME: Core data models for the ACEest Fitness API
// ABOUTME: Defines WorkoutRecord and the JSON payloads exchanged over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! # Data Models
//!
//! Core data structures used throughout the ACEest Fitness API.
//!
//! ## Design Principles
//!
//! - **Serializable**: all models are plain serde types matching the wire
//!   format exactly
//! - **Immutable records**: a [`WorkoutRecord`] is created by validation and
//!   never mutated or deleted afterwards

use serde::{Deserialize, Serialize};

use crate::features::FeatureFlags;

/// A single accepted, validated workout entry.
///
/// `category` is present only when the active feature flags enable
/// categories and the caller supplied a non-empty value; it is omitted from
/// the JSON output entirely otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Workout name, trimmed, unique under case-insensitive comparison
    pub workout: String,
    /// Duration in minutes, strictly positive
    pub duration: i64,
    /// Optional category label, trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response payload for `GET /workouts`
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutListResponse {
    /// Stored records in insertion order
    pub workouts: Vec<WorkoutRecord>,
}

/// Response payload for `GET /version`
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Currently active selection name
    pub selected: String,
    /// Flags derived from the selection
    pub features: FeatureFlags,
}

/// Request payload for `POST /admin/select-version`
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectVersionRequest {
    /// Configuration name to activate
    pub name: String,
}

/// Response payload for a successful `POST /admin/select-version`
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectVersionResponse {
    /// Always `true` on success
    pub ok: bool,
    /// Newly active selection name
    pub selected: String,
    /// Flags derived from the new selection
    pub features: FeatureFlags,
}
