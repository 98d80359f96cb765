// ABOUTME: Pure derivations over recipe data for the dashboard views
// ABOUTME: Filter engine, statistics aggregator, nutrition series, and HTML-to-text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

#![deny(unsafe_code)]

//! # Recipe Analytics
//!
//! Every function in this crate is synchronous and deterministic: identical
//! inputs produce identical outputs, and nothing is cached between calls.
//! Views call these on each change instead of patching previous results.

/// Text and diet filtering of recipe rows
pub mod filter;
/// Chart series derived from a nutrition record
pub mod nutrition;
/// HTML to plain text
pub mod sanitize;
/// Count, mean, median, and distinct-count reducers
pub mod stats;

pub use filter::{filter_recipes, matches};
pub use nutrition::{
    build_series, key_nutrient_series, macro_calorie_split, MacroSlice, NutrientBar,
    NutritionSeries,
};
pub use sanitize::{plain_text, plain_text_steps};
pub use stats::summarize;
