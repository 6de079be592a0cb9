// ABOUTME: Main library entry point for the ACEest Fitness API
// ABOUTME: Provides validated workout tracking over HTTP with version-selected feature flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

#![deny(unsafe_code)]

//! # ACEest Fitness API
//!
//! A small fitness-tracking HTTP service: clients submit named workout
//! entries with a duration, the server validates them against the currently
//! active feature flags and stores them in memory, and clients can list
//! stored entries. An admin "version selection" endpoint switches the
//! active configuration tier, which toggles validation limits and the
//! optional category field.
//!
//! ## Architecture
//!
//! - **Validator**: pure checks over a submitted payload ([`validator`])
//! - **Feature flags**: limits derived from the selection string ([`features`])
//! - **Version store**: env/file/default selection resolution and
//!   persistence ([`version`])
//! - **Workout store**: insertion-ordered in-memory records ([`store`])
//! - **HTTP layer**: thin axum route handlers ([`routes`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use aceest_fitness::config::ServerConfig;
//! use aceest_fitness::context::ServerResources;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config));
//!     let app = aceest_fitness::routes::router(resources);
//!     println!("router ready: {app:?}");
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Shared server resources for dependency injection
pub mod context;

/// Unified error handling and HTTP error rendering
pub mod errors;

/// Feature flag resolution from the selected version
pub mod features;

/// Structured logging setup
pub mod logging;

/// Core data models and wire payloads
pub mod models;

/// HTTP routes organized by domain
pub mod routes;

/// In-memory workout storage
pub mod store;

/// Pure workout payload validation
pub mod validator;

/// Version selection resolution and persistence
pub mod version;
