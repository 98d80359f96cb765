// ABOUTME: Core types and constants for the recipe dashboard
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types for the recipe dashboard. Everything
//! here is plain data: no I/O, no async, no HTTP.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Endpoint defaults, request parameters, and nutrient names
//! - **models**: Recipe rows, detail records, nutrition maps, and filter criteria

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`RecipeSummary`, `RecipeDetail`, `NutritionRecord`, ...)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
