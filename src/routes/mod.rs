// ABOUTME: Route module organization for the ACEest Fitness API HTTP endpoints
// ABOUTME: Assembles the router and provides lenient JSON body decoding shared by handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! HTTP route modules, organized by domain. Each module contains only
//! route definitions and thin handler functions that delegate to the
//! stores; all logic lives behind them.

use std::sync::Arc;

use axum::{body::Bytes, Router};
use serde_json::{Map, Value};

use crate::context::ServerResources;

/// Health check and welcome routes
pub mod health;
/// Version selection routes
pub mod version;
/// Workout submission and listing routes
pub mod workouts;

pub use health::HealthRoutes;
pub use version::VersionRoutes;
pub use workouts::WorkoutRoutes;

/// Build the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(VersionRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources))
}

/// Decode a request body leniently: absent or unparseable bodies become an
/// empty JSON object so validation owns the rejection, while a parseable
/// non-object value is passed through for the validator to refuse.
pub(crate) fn lenient_json(body: &Bytes) -> Value {
    if body.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}
