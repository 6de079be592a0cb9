// ABOUTME: Dependency injection context shared by all HTTP route handlers
// ABOUTME: Owns the configuration, version store, and workout store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Shared server resources.
//!
//! All mutable state is owned here and handed to route constructors as
//! `Arc<ServerResources>`, so handlers never reach for process globals and
//! tests can build isolated instances.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::WorkoutStore;
use crate::version::VersionStore;

/// Container for all shared server dependencies
#[derive(Debug)]
pub struct ServerResources {
    /// Resolved server configuration
    pub config: Arc<ServerConfig>,
    /// Active version selection and derived flags
    pub version: VersionStore,
    /// In-memory workout records
    pub workouts: WorkoutStore,
}

impl ServerResources {
    /// Build the full resource set from a resolved configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let version = VersionStore::bootstrap(&config);
        Self {
            config: Arc::new(config),
            version,
            workouts: WorkoutStore::new(),
        }
    }
}
