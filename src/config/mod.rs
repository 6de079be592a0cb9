// ABOUTME: Configuration module organization for the ACEest Fitness API
// ABOUTME: Exposes environment-based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
