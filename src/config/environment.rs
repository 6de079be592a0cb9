// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses port, version persistence paths, and selection overrides from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Environment-based configuration management.
//!
//! All runtime settings come from environment variables with sensible
//! defaults, so the binary runs with zero configuration in development.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable holding the HTTP listen port
pub const ENV_PORT: &str = "PORT";

/// Primary environment override for the active selection
pub const ENV_SELECTION: &str = "ACEEST_VERSION";

/// Legacy environment override for the active selection, checked second
pub const ENV_SELECTION_LEGACY: &str = "DESKTOP_VERSION";

/// Environment variable for the persisted selection file path
pub const ENV_VERSION_FILE: &str = "ACEEST_VERSION_FILE";

/// Environment variable for the versions registry directory
pub const ENV_VERSIONS_DIR: &str = "ACEEST_VERSIONS_DIR";

/// Server configuration resolved from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// File persisting the currently selected configuration name
    pub version_file: PathBuf,
    /// Directory of recognized configuration identifiers
    pub versions_dir: PathBuf,
    /// Selection override from the environment, if set and non-empty.
    /// Takes priority over the persisted file at startup.
    pub selection_override: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails only when `PORT` is present but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = env_or(ENV_PORT, "5000")
            .parse::<u16>()
            .with_context(|| format!("{ENV_PORT} must be a valid port number"))?;

        Ok(Self {
            http_port,
            version_file: PathBuf::from(env_or(ENV_VERSION_FILE, "version.txt")),
            versions_dir: PathBuf::from(env_or(ENV_VERSIONS_DIR, "versions")),
            selection_override: first_non_empty(&[ENV_SELECTION, ENV_SELECTION_LEGACY]),
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} version_file={} versions_dir={} selection_override={}",
            self.http_port,
            self.version_file.display(),
            self.versions_dir.display(),
            self.selection_override.as_deref().unwrap_or("(none)"),
        )
    }
}

/// Read an environment variable with a default fallback
fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// First non-empty value among the named environment variables
fn first_non_empty(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
}
