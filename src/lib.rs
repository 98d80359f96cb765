// ABOUTME: Main library entry point for the recipe dashboard
// ABOUTME: Wires configuration, the recipe API client, views, routes, and rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

#![deny(unsafe_code)]

//! # Recipe Dashboard
//!
//! Queries a third-party recipe API and derives three views from it:
//!
//! - **List**: popular recipes filtered by title and diet, with summary statistics
//! - **Detail**: one recipe with plain-text summary, steps, and ingredients
//! - **Charts**: macro-calorie split and key-nutrient bars for the detail recipe
//!
//! ## Architecture
//!
//! - **`recipe_core`**: error types, models, and JSON normalization
//! - **`recipe_analytics`**: pure filtering, statistics, and chart series
//! - **external**: HTTP client for the recipe API, cancellable per request
//! - **views**: per-view state with at most one in-flight load
//! - **routes** / **navigator**: the list and detail paths, and view teardown on navigation
//! - **render**: plain-text output used by the `recipe-dashboard` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use recipe_core::models::{DietSelector, FilterCriteria};
//! use recipe_dashboard::config::DashboardConfig;
//! use recipe_dashboard::external::SpoonacularClient;
//! use recipe_dashboard::views::ListView;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DashboardConfig::from_env()?;
//! let client = Arc::new(SpoonacularClient::new(config.api, &config.http)?);
//!
//! let view = ListView::new(client);
//! view.load().await;
//! view.set_criteria(FilterCriteria::new("tacos", DietSelector::Vegan)).await;
//! let state = view.state().await;
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// External API clients (Spoonacular-compatible recipe API)
pub mod external;

/// HTTP client construction from configured timeouts
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Route-driven view lifecycle
pub mod navigator;

/// Plain-text rendering of view state
pub mod render;

/// Route surface: list and detail paths
pub mod routes;

/// View state, cancellation, and derived snapshots
pub mod views;

pub use recipe_core::{AppError, AppResult, ErrorCode};
