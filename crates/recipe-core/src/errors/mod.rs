// ABOUTME: Unified error type and error codes shared across the dashboard
// ABOUTME: Separates configuration, transport, decode, and cancellation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

//! # Unified Error Handling
//!
//! Every fallible operation in the dashboard returns [`AppResult`]. The
//! [`ErrorCode`] carries the category; views inspect it to decide whether a
//! failure is shown to the user or silently dropped (cancellation).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input supplied by the user or a route was rejected
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// The requested route or recipe does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// Upstream answered with a non-success status or the transport failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// A required setting (the API key) is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// A setting is present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Lifecycle (7000-7999)
    /// The request was superseded or its view was torn down
    #[serde(rename = "CANCELLED")]
    Cancelled = 7000,

    // Internal Errors (9000-9999)
    /// Response body could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status that best describes this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::Cancelled => 499,
            Self::ExternalServiceError => 502,
            Self::ConfigMissing | Self::ConfigInvalid | Self::SerializationError => 500,
        }
    }

    /// User-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "The recipe service returned an error",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::Cancelled => "The request was cancelled",
            Self::SerializationError => "The recipe service sent an unreadable response",
        }
    }

    /// Whether a user-initiated reload can be expected to help
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalServiceError | Self::SerializationError)
    }
}

/// Unified error type for the application
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Upstream HTTP status, when the failure came from a response
    pub status: Option<u16>,
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    /// Invalid user input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unknown resource
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Required configuration value is absent
    #[must_use]
    pub fn config_missing(variable: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("Missing required configuration: {variable} is not set"),
        )
    }

    /// Configuration value is present but invalid
    #[must_use]
    pub fn config_invalid(variable: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid configuration for {variable}: {}", reason.into()),
        )
    }

    /// Transport-level failure talking to an external service
    #[must_use]
    pub fn external_service(service: &str, details: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", details.into()),
        )
    }

    /// Non-success HTTP status from an external service
    #[must_use]
    pub fn upstream_status(service: &str, status: u16) -> Self {
        Self {
            code: ErrorCode::ExternalServiceError,
            message: format!("{service} responded with HTTP {status}"),
            status: Some(status),
        }
    }

    /// Response body could not be decoded
    #[must_use]
    pub fn serialization(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, details)
    }

    /// Request superseded or its owner torn down
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(ErrorCode::Cancelled, ErrorCode::Cancelled.description())
    }

    /// True when this error represents cancellation rather than failure
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.code == ErrorCode::Cancelled
    }
}
