// ABOUTME: Summary statistics for the filtered list and the "unavailable" sentinel
// ABOUTME: Stat distinguishes missing data from a computed zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// A derived figure that may have no data behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat<T> {
    /// Computed value
    Available(T),
    /// No input carried a usable value
    #[default]
    Unavailable,
}

impl<T> Stat<T> {
    /// True when no value could be computed
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// Computed value, if any
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for Stat<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }
}

impl<T: fmt::Display> fmt::Display for Stat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(value) => value.fmt(f),
            Self::Unavailable => f.write_str("n/a"),
        }
    }
}

/// Statistics over the currently filtered recipes.
///
/// Recomputed from scratch on every criteria or dataset change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of recipes
    pub total: usize,
    /// Mean ready time in minutes, one decimal
    pub avg_ready_minutes: Stat<f64>,
    /// Median health score, one decimal when fractional
    pub median_health_score: Stat<f64>,
    /// Number of distinct cuisines
    pub distinct_cuisine_count: Stat<usize>,
}
