// ABOUTME: Route surface: the root list path and the deep-linkable recipe detail path
// ABOUTME: Parses request paths into routes and formats routes back into paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::fmt;
use std::str::FromStr;

use recipe_core::models::RecipeId;
use recipe_core::{AppError, AppResult};

/// Prefix of the detail path
pub const RECIPE_PATH_PREFIX: &str = "/recipe/";

/// A page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: filtered list, statistics, and controls
    Home,
    /// `/recipe/{id}`: one recipe
    Recipe(RecipeId),
}

impl Route {
    /// Parse a path such as `/`, `/recipe/716429` or `/recipe/716429/?tab=nutrition`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed recipe id, `ResourceNotFound` for any
    /// other path
    pub fn parse(path: &str) -> AppResult<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Ok(Self::Home);
        }
        if let Some(raw_id) = trimmed.strip_prefix(RECIPE_PATH_PREFIX) {
            return raw_id
                .parse()
                .map(Self::Recipe)
                .map_err(|_| AppError::invalid_input(format!("'{raw_id}' is not a recipe id")));
        }
        Err(AppError::not_found(format!("Route '{path}'")))
    }

    /// Canonical path for this route
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Recipe(id) => format!("{RECIPE_PATH_PREFIX}{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
