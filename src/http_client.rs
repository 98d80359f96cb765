// ABOUTME: Builds the reqwest client used for recipe API calls from the configured timeouts
// ABOUTME: Builder failures surface as ConfigInvalid instead of falling back to an untimed client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::time::Duration;

use recipe_core::{AppError, AppResult, ErrorCode};
use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::config::HttpClientConfig;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("recipe-dashboard/", env!("CARGO_PKG_VERSION"));

/// Build a pooled client honoring `config`'s timeouts.
///
/// One client is built per process and cloned into each API client; clones
/// share the connection pool.
///
/// # Errors
///
/// `ConfigInvalid` when the TLS backend or builder rejects the settings
pub fn build_client(config: &HttpClientConfig) -> AppResult<Client> {
    debug!(
        timeout_secs = config.timeout_secs,
        connect_timeout_secs = config.connect_timeout_secs,
        "Building HTTP client"
    );
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Failed to build HTTP client: {e}"),
            )
        })
}
