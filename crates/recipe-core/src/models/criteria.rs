// ABOUTME: Filter criteria snapshot: free-text query plus diet selector
// ABOUTME: Transient UI state, replaced wholesale on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::diet_tags;
use crate::errors::AppError;

/// Diet restriction chosen in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietSelector {
    /// No diet restriction
    #[default]
    All,
    /// Vegetarian recipes
    Vegetarian,
    /// Vegan recipes
    Vegan,
    /// Gluten-free recipes
    GlutenFree,
}

impl DietSelector {
    /// Every selector, in menu order
    pub const ALL: [Self; 4] = [Self::All, Self::Vegetarian, Self::Vegan, Self::GlutenFree];

    /// Upstream diet tag matching this selector; `None` for `All`
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Vegetarian => Some(diet_tags::VEGETARIAN),
            Self::Vegan => Some(diet_tags::VEGAN),
            Self::GlutenFree => Some(diet_tags::GLUTEN_FREE),
        }
    }

    /// Short label used on the command line and in rendered controls
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten-free",
        }
    }
}

impl fmt::Display for DietSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for DietSelector {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "gluten-free" | "gluten_free" | "glutenfree" | "gluten free" => Ok(Self::GlutenFree),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet '{other}' (expected all, vegetarian, vegan, gluten-free)"
            ))),
        }
    }
}

/// Current list-view filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Raw query text as typed; trimmed and lower-cased at match time
    pub query: String,
    /// Diet restriction
    pub diet: DietSelector,
}

impl FilterCriteria {
    /// Criteria with the given query and diet
    #[must_use]
    pub fn new(query: impl Into<String>, diet: DietSelector) -> Self {
        Self {
            query: query.into(),
            diet,
        }
    }

    /// Normalized query used for matching
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// True when the criteria let every record through
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.diet == DietSelector::All && self.query.trim().is_empty()
    }
}
