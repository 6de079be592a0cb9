// ABOUTME: Workout submission and listing route handlers
// ABOUTME: Thin handlers delegating to the workout store and active feature flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Workout routes
//!
//! `GET /workouts` lists all stored records in insertion order.
//! `POST /workouts` validates a submission against the active feature
//! flags and stores it; any validation failure returns 400 with a flat
//! `{"error": <reason>}` body and leaves the store unchanged.

use crate::{
    context::ServerResources, errors::AppError, models::WorkoutListResponse, routes::lenient_json,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/workouts", get(Self::handle_list_workouts))
            .route("/workouts", post(Self::handle_add_workout))
            .with_state(resources)
    }

    /// Handle listing all stored workouts
    async fn handle_list_workouts(State(resources): State<Arc<ServerResources>>) -> Response {
        let workouts = resources.workouts.list().await;
        (StatusCode::OK, Json(WorkoutListResponse { workouts })).into_response()
    }

    /// Handle a workout submission
    async fn handle_add_workout(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let candidate = lenient_json(&body);
        let flags = resources.version.flags().await;

        let record = resources.workouts.add(&candidate, &flags).await?;
        debug!(workout = %record.workout, duration = record.duration, "workout stored");

        Ok((StatusCode::CREATED, Json(record)).into_response())
    }
}
