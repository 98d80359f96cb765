// ABOUTME: Recipe summary rows and detail records decoded from the recipe API
// ABOUTME: Normalization drops id-less records and degrades malformed fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::json;
use super::nutrition::NutritionRecord;

/// Upstream recipe identifier
pub type RecipeId = u64;

/// One row of a search result.
///
/// Immutable once decoded; lives as long as the search response that
/// produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Unique key
    pub id: RecipeId,
    /// Display title
    pub title: String,
    /// Total preparation time; fractional values are kept as sent
    pub ready_in_minutes: Option<f64>,
    /// Number of servings
    pub servings: Option<u32>,
    /// Upstream health score, 0-100
    pub health_score: Option<f64>,
    /// Cuisines in upstream order, possibly empty
    pub cuisines: Vec<String>,
    /// Diet tags such as "vegan" or "gluten free"
    pub diets: Vec<String>,
    /// Image URL
    pub image: Option<String>,
    /// Vegetarian flag
    pub vegetarian: bool,
    /// Vegan flag
    pub vegan: bool,
    /// Gluten-free flag
    pub gluten_free: bool,
}

impl RecipeSummary {
    /// Minimal summary with only id and title set
    #[must_use]
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Decode one upstream record. Returns `None` when the record has no
    /// usable `id` (an unsigned integer or a numeric string); every other
    /// field degrades to a default.
    #[must_use]
    pub fn from_json(record: &Value) -> Option<Self> {
        let Some(id) = json::id(record, "id") else {
            debug!(record = %record, "Dropping recipe record without numeric id");
            return None;
        };

        Some(Self {
            id,
            title: json::string(record, "title").unwrap_or_default(),
            ready_in_minutes: json::non_negative(record, "readyInMinutes"),
            servings: json::count(record, "servings"),
            health_score: json::finite(record, "healthScore"),
            cuisines: json::strings(record, "cuisines"),
            diets: json::strings(record, "diets"),
            image: json::string(record, "image"),
            vegetarian: json::flag(record, "vegetarian"),
            vegan: json::flag(record, "vegan"),
            gluten_free: json::flag(record, "glutenFree"),
        })
    }

    /// Decode a search response body. A missing or non-array `results`
    /// field yields an empty list.
    #[must_use]
    pub fn list_from_search_response(body: &Value) -> Vec<Self> {
        json::array(body, "results")
            .iter()
            .filter_map(Self::from_json)
            .collect()
    }
}

/// Expanded record for the detail view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Fields shared with the list row
    #[serde(flatten)]
    pub summary: RecipeSummary,
    /// HTML-bearing prose summary
    pub summary_html: Option<String>,
    /// Structured instruction steps, in order
    pub instructions: Vec<String>,
    /// Free-form HTML instructions, used when no structured steps exist
    pub instructions_html: Option<String>,
    /// Ingredient lines, in order
    pub ingredients: Vec<String>,
    /// Original recipe page
    pub source_url: Option<String>,
    /// Per-serving nutrition, when the response carried one
    pub nutrition: Option<NutritionRecord>,
}

impl RecipeDetail {
    /// Decode a detail response body
    #[must_use]
    pub fn from_json(record: &Value) -> Option<Self> {
        let summary = RecipeSummary::from_json(record)?;

        let instructions = json::array(record, "analyzedInstructions")
            .iter()
            .flat_map(|section| json::array(section, "steps"))
            .filter_map(|step| json::string(step, "step"))
            .map(|step| step.trim().to_owned())
            .filter(|step| !step.is_empty())
            .collect();

        let ingredients = json::array(record, "extendedIngredients")
            .iter()
            .filter_map(|ingredient| {
                json::string(ingredient, "original").or_else(|| json::string(ingredient, "name"))
            })
            .collect();

        let nutrition = record
            .get("nutrition")
            .filter(|nutrition| nutrition.is_object())
            .map(NutritionRecord::from_json);

        Some(Self {
            summary,
            summary_html: json::string(record, "summary"),
            instructions,
            instructions_html: json::string(record, "instructions")
                .filter(|text| !text.trim().is_empty()),
            ingredients,
            source_url: json::string(record, "sourceUrl"),
            nutrition,
        })
    }

    /// Recipe identifier
    #[must_use]
    pub const fn id(&self) -> RecipeId {
        self.summary.id
    }
}
