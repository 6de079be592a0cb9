// ABOUTME: Health check and welcome route handlers for service monitoring
// ABOUTME: Provides the /health liveness endpoint and the /api welcome payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Health check and welcome routes

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({"status": "ok"}))
        }

        async fn api_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "app": "ACEest Fitness",
                "message": "Welcome"
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/api", get(api_handler))
    }
}
