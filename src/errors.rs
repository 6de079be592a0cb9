// ABOUTME: Unified error handling for the ACEest Fitness API
// ABOUTME: Defines error codes, HTTP status mapping, and JSON response rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! # Unified Error Handling
//!
//! Centralized error types for the ACEest Fitness API. Every failure that
//! crosses the HTTP boundary is an [`AppError`], which carries an
//! [`ErrorCode`] (driving the HTTP status) and a human-readable reason
//! string. Client-facing failures render as the flat `{"error": <reason>}`
//! body the API contract specifies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Client supplied an invalid or out-of-range value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Configuration could not be loaded or parsed
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Persisted state could not be read or written
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ConfigError | Self::StorageError | Self::InternalError => 500,
        }
    }
}

/// Application error carrying a code and a client-readable reason
#[derive(Debug, Clone)]
pub struct AppError {
    /// Error classification, drives the HTTP status
    pub code: ErrorCode,
    /// Human-readable reason, rendered in the `error` field
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input (400)
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error (500)
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error (500)
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal server error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format: flat `{"error": <reason>}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable reason string
    pub error: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = ?self.code, "request failed: {}", self.message);
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<crate::validator::ValidationError> for AppError {
    fn from(error: crate::validator::ValidationError) -> Self {
        Self::invalid_input(error.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}
