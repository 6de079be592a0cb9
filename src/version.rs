// ABOUTME: Version selection store with env/file/default resolution precedence
// ABOUTME: Persists admin-selected configuration names and derives active feature flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Version selection store.
//!
//! The active selection resolves at startup with three-tier precedence:
//! environment override, persisted file, hardcoded default. An admin update
//! validates the name against the versions registry directory, rewrites the
//! persisted file, and swaps the in-memory selection and derived flags; the
//! whole read-modify-write sequence runs under one write lock. File I/O is
//! synchronous and fully buffered; the persisted state is a single string.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::features::FeatureFlags;

/// Fallback selection when neither the environment nor the persisted file
/// provides one
pub const DEFAULT_SELECTION: &str = "ACEest_Fitness-V1.1.py";

#[derive(Debug)]
struct ActiveSelection {
    name: String,
    flags: FeatureFlags,
}

/// Process-wide active selection with file-backed persistence
#[derive(Debug)]
pub struct VersionStore {
    version_file: PathBuf,
    versions_dir: PathBuf,
    active: RwLock<ActiveSelection>,
}

impl VersionStore {
    /// Resolve the initial selection and build the store.
    ///
    /// Precedence: environment override, then the persisted file, then
    /// [`DEFAULT_SELECTION`]. An unreadable file falls through to the
    /// default rather than failing startup.
    #[must_use]
    pub fn bootstrap(config: &ServerConfig) -> Self {
        let name = Self::resolve_initial(config);
        let flags = FeatureFlags::for_selection(&name);
        info!("active version selection: {name}");

        Self {
            version_file: config.version_file.clone(),
            versions_dir: config.versions_dir.clone(),
            active: RwLock::new(ActiveSelection { name, flags }),
        }
    }

    fn resolve_initial(config: &ServerConfig) -> String {
        if let Some(selection) = &config.selection_override {
            return selection.clone();
        }
        match fs::read_to_string(&config.version_file) {
            Ok(contents) => {
                let persisted = contents.trim();
                if persisted.is_empty() {
                    DEFAULT_SELECTION.to_owned()
                } else {
                    persisted.to_owned()
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                DEFAULT_SELECTION.to_owned()
            }
            Err(err) => {
                warn!(
                    "failed to read {}: {err}, using default selection",
                    config.version_file.display()
                );
                DEFAULT_SELECTION.to_owned()
            }
        }
    }

    /// Currently active selection name
    pub async fn selected(&self) -> String {
        self.active.read().await.name.clone()
    }

    /// Flags derived from the current selection
    pub async fn flags(&self) -> FeatureFlags {
        self.active.read().await.flags.clone()
    }

    /// Current selection name and flags as one consistent pair
    pub async fn snapshot(&self) -> (String, FeatureFlags) {
        let active = self.active.read().await;
        (active.name.clone(), active.flags.clone())
    }

    /// Activate a new selection.
    ///
    /// The name must exist as an entry in the versions registry directory.
    /// On success the persisted file is rewritten wholesale and the
    /// in-memory selection and flags are swapped; on any failure both are
    /// left untouched.
    pub async fn select(&self, name: &str) -> AppResult<FeatureFlags> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("'name' is required"));
        }
        if !is_plain_file_name(name) || !self.versions_dir.join(name).exists() {
            return Err(AppError::invalid_input(
                "version file not found in versions/",
            ));
        }

        let mut active = self.active.write().await;
        fs::write(&self.version_file, name).map_err(|err| {
            AppError::storage(format!(
                "failed to persist selection to {}: {err}",
                self.version_file.display()
            ))
        })?;

        active.name = name.to_owned();
        active.flags = FeatureFlags::for_selection(name);
        info!("version selection changed: {name}");
        Ok(active.flags.clone())
    }
}

/// Registry entries are plain file names; reject anything that would
/// escape the versions directory.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
