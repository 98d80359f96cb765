// ABOUTME: Filter engine selecting recipe rows by title substring and diet
// ABOUTME: Output is always an order-preserving subsequence of the input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use recipe_core::models::{DietSelector, FilterCriteria, RecipeSummary};

/// Rows satisfying both the text and diet predicates, in input order
#[must_use]
pub fn filter_recipes(recipes: &[RecipeSummary], criteria: &FilterCriteria) -> Vec<RecipeSummary> {
    let query = criteria.normalized_query();
    recipes
        .iter()
        .filter(|recipe| title_matches(recipe, &query) && diet_matches(recipe, criteria.diet))
        .cloned()
        .collect()
}

/// Single-row predicate
#[must_use]
pub fn matches(recipe: &RecipeSummary, criteria: &FilterCriteria) -> bool {
    title_matches(recipe, &criteria.normalized_query()) && diet_matches(recipe, criteria.diet)
}

fn title_matches(recipe: &RecipeSummary, normalized_query: &str) -> bool {
    normalized_query.is_empty() || recipe.title.to_lowercase().contains(normalized_query)
}

/// Boolean flag OR `diets` tag membership
fn diet_matches(recipe: &RecipeSummary, diet: DietSelector) -> bool {
    let flag = match diet {
        DietSelector::All => return true,
        DietSelector::Vegetarian => recipe.vegetarian,
        DietSelector::Vegan => recipe.vegan,
        DietSelector::GlutenFree => recipe.gluten_free,
    };
    flag || diet.tag().is_some_and(|tag| has_tag(recipe, tag))
}

fn has_tag(recipe: &RecipeSummary, tag: &str) -> bool {
    recipe
        .diets
        .iter()
        .any(|candidate| candidate.trim().eq_ignore_ascii_case(tag))
}
