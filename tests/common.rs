// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides isolated server resources backed by a temporary directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness
#![allow(dead_code)]

//! Shared test utilities for `aceest_fitness`.
//!
//! Each test gets its own temporary directory holding the versions
//! registry and the persisted selection file, so tests never touch real
//! process state and can run in parallel.

use aceest_fitness::{config::ServerConfig, context::ServerResources};
use std::fs;
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Registry entries available to every test
pub const REGISTRY: &[&str] = &[
    "ACEest_Fitness-V1.0.py",
    "ACEest_Fitness-V1.1.py",
    "ACEest_Fitness-V1.2.py",
    "ACEest_Fitness-V1.3.py",
];

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Build a configuration rooted in a temporary directory, with the
/// standard registry entries created
pub fn test_config(dir: &TempDir) -> ServerConfig {
    let versions_dir = dir.path().join("versions");
    fs::create_dir_all(&versions_dir).expect("Failed to create versions dir");
    for name in REGISTRY {
        fs::write(versions_dir.join(name), "").expect("Failed to create registry entry");
    }

    ServerConfig {
        http_port: 0,
        version_file: dir.path().join("version.txt"),
        versions_dir,
        selection_override: None,
    }
}

/// Standard isolated resource setup; keep the returned `TempDir` alive for
/// the duration of the test
pub fn create_test_resources() -> (Arc<ServerResources>, TempDir) {
    init_test_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&dir);
    (Arc::new(ServerResources::new(config)), dir)
}
