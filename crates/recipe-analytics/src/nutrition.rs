// ABOUTME: Chart-ready series derived from a recipe's nutrition record
// ABOUTME: Fixed-cardinality output: missing nutrients appear as zero, never dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

//! # Nutrition Series
//!
//! Two series feed the detail-view charts:
//!
//! - **Macro-calorie split** (pie): calories contributed by protein, fat and
//!   carbohydrates using the Atwater factors 4/9/4 kcal per gram.
//! - **Key nutrients** (bar): calories, protein, fat, carbohydrates, fiber
//!   and sugar, in that order.
//!
//! A record without a nutrient still yields an entry for it with amount zero.

use recipe_core::constants::nutrients;
use recipe_core::models::NutritionRecord;
use serde::Serialize;

/// One slice of the macro-calorie pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroSlice {
    /// "Protein", "Fat" or "Carbs"
    pub label: &'static str,
    /// Calories contributed by this macronutrient
    pub kcal: f64,
}

/// One bar of the key-nutrient chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientBar {
    /// Nutrient name as looked up in the record
    pub name: &'static str,
    /// Amount, zero when absent
    pub amount: f64,
    /// Unit from the record, or the default for this nutrient
    pub unit: String,
}

/// Both chart series for one recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionSeries {
    /// Always three slices: Protein, Fat, Carbs
    pub macro_split: [MacroSlice; 3],
    /// Always six bars, in `KEY_NUTRIENTS` order
    pub key_nutrients: Vec<NutrientBar>,
}

/// Protein, Fat and Carbs calories, in that order
#[must_use]
pub fn macro_calorie_split(record: &NutritionRecord) -> [MacroSlice; 3] {
    [
        MacroSlice {
            label: "Protein",
            kcal: record.amount(nutrients::PROTEIN) * nutrients::KCAL_PER_GRAM_PROTEIN,
        },
        MacroSlice {
            label: "Fat",
            kcal: record.amount(nutrients::FAT) * nutrients::KCAL_PER_GRAM_FAT,
        },
        MacroSlice {
            label: "Carbs",
            kcal: record.amount(nutrients::CARBOHYDRATES) * nutrients::KCAL_PER_GRAM_CARBS,
        },
    ]
}

/// Bars for each key nutrient, resolved by exact name
#[must_use]
pub fn key_nutrient_series(record: &NutritionRecord) -> Vec<NutrientBar> {
    nutrients::KEY_NUTRIENTS
        .iter()
        .map(|&name| {
            let entry = record.get(name);
            let unit = entry
                .and_then(|nutrient| nutrient.unit.as_deref())
                .filter(|unit| !unit.is_empty())
                .unwrap_or_else(|| default_unit(name));
            NutrientBar {
                name,
                amount: entry.map_or(0.0, |nutrient| nutrient.amount),
                unit: unit.to_owned(),
            }
        })
        .collect()
}

/// Both series at once
#[must_use]
pub fn build_series(record: &NutritionRecord) -> NutritionSeries {
    NutritionSeries {
        macro_split: macro_calorie_split(record),
        key_nutrients: key_nutrient_series(record),
    }
}

fn default_unit(name: &str) -> &'static str {
    if name == nutrients::CALORIES {
        nutrients::DEFAULT_ENERGY_UNIT
    } else {
        nutrients::DEFAULT_MASS_UNIT
    }
}
