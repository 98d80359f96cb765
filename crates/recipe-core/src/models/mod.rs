// ABOUTME: Core data models for recipe rows, detail records, nutrition, and filters
// ABOUTME: Lenient JSON normalization turns upstream records into typed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

/// Filter criteria and diet selector
pub mod criteria;
/// JSON field readers that degrade instead of failing
mod json;
/// Nutrition record keyed by nutrient name
pub mod nutrition;
/// Recipe summary and detail records
pub mod recipe;
/// Summary statistics and the unavailable sentinel
pub mod stats;

pub use criteria::{DietSelector, FilterCriteria};
pub use nutrition::{Nutrient, NutritionRecord};
pub use recipe::{RecipeDetail, RecipeId, RecipeSummary};
pub use stats::{Stat, SummaryStats};
