// ABOUTME: External API client modules (Spoonacular-compatible recipe API)
// ABOUTME: Defines the RecipeSource seam that views load through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

//! External API Clients
//!
//! Views never talk to HTTP directly; they load through [`RecipeSource`] so
//! tests can substitute a scripted source.

/// Spoonacular recipe API client
pub mod spoonacular_client;

use async_trait::async_trait;
use recipe_core::models::{RecipeDetail, RecipeId, RecipeSummary};
use recipe_core::AppResult;
use tokio_util::sync::CancellationToken;

pub use spoonacular_client::{SpoonacularClient, SpoonacularClientConfig};

/// Where views get recipe data from.
///
/// Implementations must return `ErrorCode::Cancelled` promptly once `cancel`
/// fires; views additionally discard any result whose token was cancelled.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Popular recipes for the list view
    async fn search_recipes(&self, cancel: &CancellationToken) -> AppResult<Vec<RecipeSummary>>;

    /// Expanded record, including nutrition, for the detail view
    async fn recipe_details(
        &self,
        id: RecipeId,
        cancel: &CancellationToken,
    ) -> AppResult<RecipeDetail>;
}
