// ABOUTME: Environment configuration for the recipe API client and HTTP transport
// ABOUTME: A missing API key is a hard precondition failure reported before any request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::env;
use std::fmt;

use recipe_core::constants::{api, env_config};
use recipe_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::external::SpoonacularClientConfig;
use crate::http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Transport timeouts for the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Everything the dashboard reads from the environment
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Recipe API client settings
    pub api: SpoonacularClientConfig,
    /// Transport timeouts
    pub http: HttpClientConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl DashboardConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `SPOONACULAR_API_KEY` is unset or blank, and
    /// `ConfigInvalid` when the base URL or a timeout cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = env::var(env_config::API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::config_missing(env_config::API_KEY))?;

        let base_url = env_var_or(env_config::BASE_URL, api::DEFAULT_BASE_URL);
        validate_base_url(&base_url)?;

        let http = HttpClientConfig {
            timeout_secs: parse_secs(env_config::HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_secs(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", ""));

        debug!(
            base_url = %base_url,
            timeout_secs = http.timeout_secs,
            connect_timeout_secs = http.connect_timeout_secs,
            environment = %environment,
            "Configuration loaded"
        );

        Ok(Self {
            api: SpoonacularClientConfig {
                api_key: Some(api_key),
                base_url,
            },
            http,
            environment,
        })
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Timeout in whole seconds; zero would fail every request
fn parse_secs(key: &str, default: u64) -> AppResult<u64> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse() {
        Ok(0) => Err(AppError::config_invalid(key, "timeout must be at least 1 second")),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AppError::config_invalid(key, format!("'{raw}' is not a number: {e}"))),
    }
}

fn validate_base_url(base_url: &str) -> AppResult<()> {
    let parsed = Url::parse(base_url)
        .map_err(|e| AppError::config_invalid(env_config::BASE_URL, e.to_string()))?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(
            env_config::BASE_URL,
            format!("'{base_url}' is not an http(s) base URL"),
        ));
    }
    Ok(())
}
