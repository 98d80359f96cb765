// ABOUTME: Spoonacular recipe API client for search and per-recipe detail retrieval
// ABOUTME: Every request checks the API key first and races a cancellation token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

//! Spoonacular Recipe API Client
//!
//! Two endpoints are used:
//!
//! - `GET /recipes/complexSearch` with `number=50`, `sort=popularity` and
//!   `addRecipeInformation=true`, returning `{ "results": [...] }`
//! - `GET /recipes/{id}/information` with `includeNutrition=true`
//!
//! # Example
//! ```rust,no_run
//! use recipe_dashboard::config::HttpClientConfig;
//! use recipe_dashboard::external::{SpoonacularClient, SpoonacularClientConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpoonacularClient::new(
//!     SpoonacularClientConfig {
//!         api_key: Some("your_api_key".to_owned()),
//!         ..SpoonacularClientConfig::default()
//!     },
//!     &HttpClientConfig::default(),
//! )?;
//!
//! let cancel = CancellationToken::new();
//! let recipes = client.search(None, &cancel).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use recipe_core::constants::{api, env_config};
use recipe_core::models::{RecipeDetail, RecipeId, RecipeSummary};
use recipe_core::{AppError, AppResult};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::RecipeSource;
use crate::config::HttpClientConfig;
use crate::http_client::build_client;

/// Recipe API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpoonacularClientConfig {
    /// API key; requests fail locally with `ConfigMissing` while this is absent
    pub api_key: Option<String>,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: api::DEFAULT_BASE_URL.to_owned(),
        }
    }
}

/// Spoonacular recipe API client
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a client whose transport uses the timeouts in `http`
    ///
    /// # Errors
    ///
    /// `ConfigInvalid` when the HTTP client cannot be built
    pub fn new(config: SpoonacularClientConfig, http: &HttpClientConfig) -> AppResult<Self> {
        Ok(Self::with_http_client(config, build_client(http)?))
    }

    /// Create a client with a caller-provided HTTP client
    #[must_use]
    pub const fn with_http_client(
        config: SpoonacularClientConfig,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Search popular recipes, optionally narrowed server-side by `query`
    ///
    /// # Errors
    ///
    /// - `ConfigMissing` when no API key is configured (nothing is sent)
    /// - `ExternalServiceError` on transport failure or non-success status
    /// - `SerializationError` when the body is not JSON
    /// - `Cancelled` when `cancel` fires before the response is decoded
    pub async fn search(
        &self,
        query: Option<&str>,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<RecipeSummary>> {
        let api_key = self.api_key()?;
        let url = self.endpoint(api::SEARCH_PATH)?;

        let mut params = vec![
            ("apiKey", api_key.to_owned()),
            ("number", api::RESULT_LIMIT.to_string()),
            ("sort", api::SORT_ORDER.to_owned()),
            ("addRecipeInformation", "true".to_owned()),
        ];
        if let Some(query) = query.map(str::trim).filter(|query| !query.is_empty()) {
            params.push(("query", query.to_owned()));
        }

        let body = self.get_json(url, &params, cancel).await?;
        let recipes = RecipeSummary::list_from_search_response(&body);
        debug!(count = recipes.len(), "Recipe search decoded");
        Ok(recipes)
    }

    /// Fetch one recipe with nutrition
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`]; additionally `SerializationError` when the
    /// body is not a JSON object
    pub async fn details(&self, id: RecipeId, cancel: &CancellationToken) -> AppResult<RecipeDetail> {
        let api_key = self.api_key()?;
        let url = self.endpoint(&format!("/recipes/{id}/information"))?;
        let params = [
            ("apiKey", api_key.to_owned()),
            ("includeNutrition", "true".to_owned()),
        ];

        let mut body = self.get_json(url, &params, cancel).await?;
        let Some(record) = body.as_object_mut() else {
            return Err(AppError::serialization(format!(
                "{}: recipe {id} response is not an object",
                api::SERVICE_NAME
            )));
        };
        record.entry("id").or_insert_with(|| Value::from(id));

        RecipeDetail::from_json(&body).ok_or_else(|| {
            AppError::serialization(format!(
                "{}: recipe {id} response has an unusable id",
                api::SERVICE_NAME
            ))
        })
    }

    fn api_key(&self) -> AppResult<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::config_missing(env_config::API_KEY))
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| AppError::config_invalid(env_config::BASE_URL, e.to_string()))?;
        let base_path = base.path().trim_end_matches('/').to_owned();
        let mut url = base;
        url.set_path(&format!("{base_path}{path}"));
        Ok(url)
    }

    async fn get_json(
        &self,
        url: Url,
        params: &[(&str, String)],
        cancel: &CancellationToken,
    ) -> AppResult<Value> {
        if cancel.is_cancelled() {
            return Err(AppError::cancelled());
        }
        debug!(endpoint = %url, "Requesting recipe API");

        let request = async {
            let response = self
                .http_client
                .get(url.clone())
                .query(params)
                .send()
                .await
                .map_err(|e| AppError::external_service(api::SERVICE_NAME, e.without_url().to_string()))?;

            let status = response.status();
            if !status.is_success() {
                warn!(endpoint = %url, status = status.as_u16(), "Recipe API returned non-success status");
                return Err(AppError::upstream_status(api::SERVICE_NAME, status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| AppError::external_service(api::SERVICE_NAME, e.without_url().to_string()))?;
            serde_json::from_slice::<Value>(&bytes).map_err(|e| {
                AppError::serialization(format!("{}: JSON parse error: {e}", api::SERVICE_NAME))
            })
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(endpoint = %url, "Recipe API request cancelled");
                Err(AppError::cancelled())
            }
            result = request => result,
        }
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn search_recipes(&self, cancel: &CancellationToken) -> AppResult<Vec<RecipeSummary>> {
        self.search(None, cancel).await
    }

    async fn recipe_details(
        &self,
        id: RecipeId,
        cancel: &CancellationToken,
    ) -> AppResult<RecipeDetail> {
        self.details(id, cancel).await
    }
}
