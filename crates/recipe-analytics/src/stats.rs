// ABOUTME: Statistics aggregator over the filtered recipe list
// ABOUTME: Non-finite inputs are excluded before aggregation, never treated as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::collections::BTreeSet;

use recipe_core::models::{RecipeSummary, Stat, SummaryStats};

/// Summary figures for `recipes`
#[must_use]
pub fn summarize(recipes: &[RecipeSummary]) -> SummaryStats {
    SummaryStats {
        total: recipes.len(),
        avg_ready_minutes: average_ready_minutes(recipes),
        median_health_score: median_health_score(recipes),
        distinct_cuisine_count: distinct_cuisine_count(recipes),
    }
}

/// Arithmetic mean of known ready times, one decimal
#[must_use]
pub fn average_ready_minutes(recipes: &[RecipeSummary]) -> Stat<f64> {
    let minutes: Vec<f64> = recipes
        .iter()
        .filter_map(|recipe| recipe.ready_in_minutes)
        .filter(|minutes| minutes.is_finite())
        .collect();
    if minutes.is_empty() {
        return Stat::Unavailable;
    }
    let mean = minutes.iter().sum::<f64>() / minutes.len() as f64;
    Stat::Available(round_one_decimal(mean))
}

/// Median of finite health scores
#[must_use]
pub fn median_health_score(recipes: &[RecipeSummary]) -> Stat<f64> {
    let scores: Vec<f64> = recipes
        .iter()
        .filter_map(|recipe| recipe.health_score)
        .filter(|score| score.is_finite())
        .collect();
    median(scores).into()
}

/// Number of distinct non-blank cuisines across all rows
#[must_use]
pub fn distinct_cuisine_count(recipes: &[RecipeSummary]) -> Stat<usize> {
    let cuisines: BTreeSet<&str> = recipes
        .iter()
        .flat_map(|recipe| recipe.cuisines.iter())
        .map(|cuisine| cuisine.trim())
        .filter(|cuisine| !cuisine.is_empty())
        .collect();
    if cuisines.is_empty() {
        Stat::Unavailable
    } else {
        Stat::Available(cuisines.len())
    }
}

/// Median of finite values; the mean of the two middle values for even counts
#[must_use]
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    values.retain(|value| value.is_finite());
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };
    Some(round_one_decimal(median))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
