// ABOUTME: Version selection route handlers and the plain-text index banner
// ABOUTME: Exposes the active selection and the admin endpoint that changes it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Version selection routes
//!
//! `GET /` renders a plain-text banner with the active selection and flags,
//! `GET /version` returns them as JSON, and `POST /admin/select-version`
//! activates a recognized configuration name and persists it.

use crate::{
    context::ServerResources,
    errors::AppError,
    models::{SelectVersionResponse, VersionResponse},
    routes::lenient_json,
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

/// Version routes implementation
pub struct VersionRoutes;

impl VersionRoutes {
    /// Create all version selection routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/version", get(Self::handle_get_version))
            .route("/admin/select-version", post(Self::handle_select_version))
            .with_state(resources)
    }

    /// Handle the plain-text index banner
    async fn handle_index(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let (selected, features) = resources.version.snapshot().await;
        let features = serde_json::to_string(&features)
            .map_err(|err| AppError::internal(format!("failed to render flags: {err}")))?;

        let banner =
            format!("ACEest Fitness API\nSelected version: {selected}\nFeatures: {features}");
        Ok((StatusCode::OK, banner).into_response())
    }

    /// Handle reading the active selection and flags
    async fn handle_get_version(State(resources): State<Arc<ServerResources>>) -> Response {
        let (selected, features) = resources.version.snapshot().await;
        (StatusCode::OK, Json(VersionResponse { selected, features })).into_response()
    }

    /// Handle an admin selection change
    async fn handle_select_version(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let payload = lenient_json(&body);
        let name = payload
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_owned();

        let features = resources.version.select(&name).await?;
        let response = SelectVersionResponse {
            ok: true,
            selected: name,
            features,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
