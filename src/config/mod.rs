// ABOUTME: Configuration module for the recipe dashboard
// ABOUTME: Environment-only configuration: API key, endpoint, and HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

//! Configuration is read once from process environment variables. There is no
//! config file; the API key is the only required value.

/// Environment-derived dashboard configuration
pub mod environment;

pub use environment::{DashboardConfig, Environment, HttpClientConfig};
