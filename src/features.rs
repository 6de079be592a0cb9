// ABOUTME: Feature flag resolution derived from the selected configuration name
// ABOUTME: Maps version marker substrings to validation limits and optional features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Feature flags derived from the active version selection.
//!
//! The selection string is matched against fixed marker substrings ("V1.1",
//! "V1.2", "V1.3"). Markers are tested independently and applied cumulatively
//! in order, so a string containing several markers receives the union of
//! their overrides with later tiers winning on conflicting fields. This is a
//! simple tiering scheme, not a version-range parser; no numeric comparison
//! of version numbers occurs.

use serde::{Deserialize, Serialize};

/// Baseline cap on workout duration, in minutes (24 hours)
pub const DEFAULT_MAX_DURATION: i64 = 1440;

/// Baseline cap on workout name length, in characters
pub const DEFAULT_MAX_NAME_LEN: usize = 100;

/// Validation limits and feature toggles for the active selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Whether workout entries may carry an optional category
    pub categories: bool,
    /// Whether chart rendering is enabled
    pub charts: bool,
    /// Whether PDF export is enabled
    pub pdf_export: bool,
    /// Maximum accepted workout duration in minutes
    pub max_duration: i64,
    /// Maximum accepted workout name length in characters
    pub max_name_len: usize,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            categories: false,
            charts: false,
            pdf_export: false,
            max_duration: DEFAULT_MAX_DURATION,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl FeatureFlags {
    /// Resolve the flags for a selection string.
    ///
    /// Strips a trailing `.py` suffix (selections name desktop release
    /// files), then applies each matched tier's overrides cumulatively.
    #[must_use]
    pub fn for_selection(selection: &str) -> Self {
        let base = selection.trim();
        let base = base.strip_suffix(".py").unwrap_or(base);

        let mut flags = Self::default();
        if base.contains("V1.1") {
            flags.categories = true;
        }
        if base.contains("V1.2") {
            flags.categories = true;
            flags.charts = true;
        }
        if base.contains("V1.3") {
            flags.categories = true;
            flags.charts = true;
            flags.pdf_export = true;
            flags.max_name_len = 120;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_defaults() {
        let flags = FeatureFlags::for_selection("ACEest_Fitness-V1.0.py");
        assert!(!flags.categories);
        assert!(!flags.charts);
        assert!(!flags.pdf_export);
        assert_eq!(flags.max_duration, 1440);
        assert_eq!(flags.max_name_len, 100);
    }

    #[test]
    fn test_v1_1_enables_categories() {
        let flags = FeatureFlags::for_selection("ACEest_Fitness-V1.1.py");
        assert!(flags.categories);
        assert!(!flags.charts);
        assert!(!flags.pdf_export);
    }

    #[test]
    fn test_v1_2_3_matches_v1_2_tier() {
        // "V1.2.3" contains the "V1.2" marker but not "V1.3"
        let flags = FeatureFlags::for_selection("ACEest_Fitness-V1.2.3.py");
        assert!(flags.categories);
        assert!(flags.charts);
        assert!(!flags.pdf_export);
        assert_eq!(flags.max_name_len, 100);
    }

    #[test]
    fn test_v1_3_raises_name_limit() {
        let flags = FeatureFlags::for_selection("ACEest_Fitness-V1.3.py");
        assert!(flags.categories);
        assert!(flags.charts);
        assert!(flags.pdf_export);
        assert_eq!(flags.max_name_len, 120);
        assert_eq!(flags.max_duration, 1440);
    }

    #[test]
    fn test_multiple_markers_union() {
        // Markers are independent containment tests; crafted strings
        // receive the union of all matched tiers.
        let flags = FeatureFlags::for_selection("V1.1-and-V1.3");
        assert!(flags.categories);
        assert!(flags.charts);
        assert!(flags.pdf_export);
        assert_eq!(flags.max_name_len, 120);
    }

    #[test]
    fn test_suffix_stripped_before_matching() {
        let flags = FeatureFlags::for_selection("no-marker-here.py");
        assert_eq!(flags, FeatureFlags::default());
    }
}
