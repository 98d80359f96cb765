// ABOUTME: Tests for nutrition chart series built from nutrition records
// ABOUTME: Verifies fixed-shape output when nutrients or units are missing
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use recipe_analytics::{build_series, key_nutrient_series, macro_calorie_split};
use recipe_core::models::NutritionRecord;

// ============================================================================
// Macro split
// ============================================================================

#[test]
fn test_macro_split_uses_atwater_factors() {
    let record = NutritionRecord::new()
        .with("Protein", 10.0, "g")
        .with("Fat", 5.0, "g")
        .with("Carbohydrates", 20.0, "g");

    let split = macro_calorie_split(&record);
    let labels: Vec<_> = split.iter().map(|slice| slice.label).collect();
    assert_eq!(labels, vec!["Protein", "Fat", "Carbs"]);
    assert!((split[0].kcal - 40.0).abs() < f64::EPSILON);
    assert!((split[1].kcal - 45.0).abs() < f64::EPSILON);
    assert!((split[2].kcal - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_macro_split_keeps_missing_macros_at_zero() {
    let record = NutritionRecord::new().with("Fat", 2.0, "g");
    let split = macro_calorie_split(&record);
    assert_eq!(split.len(), 3);
    assert!(split[0].kcal.abs() < f64::EPSILON);
    assert!((split[1].kcal - 18.0).abs() < f64::EPSILON);
    assert!(split[2].kcal.abs() < f64::EPSILON);
}

#[test]
fn test_lookup_is_exact_name() {
    let record = NutritionRecord::new().with("protein", 10.0, "g");
    assert!(macro_calorie_split(&record)[0].kcal.abs() < f64::EPSILON);
}

// ============================================================================
// Key nutrients
// ============================================================================

#[test]
fn test_key_nutrients_fixed_order_and_defaults() {
    let record = NutritionRecord::new()
        .with("Calories", 520.0, "kcal")
        .with("Sugar", 4.5, "g")
        .with("Sodium", 900.0, "mg");

    let bars = key_nutrient_series(&record);
    let names: Vec<_> = bars.iter().map(|bar| bar.name).collect();
    assert_eq!(
        names,
        vec!["Calories", "Protein", "Fat", "Carbohydrates", "Fiber", "Sugar"]
    );

    let fiber = &bars[4];
    assert!(fiber.amount.abs() < f64::EPSILON);
    assert_eq!(fiber.unit, "g");
    assert!((bars[5].amount - 4.5).abs() < f64::EPSILON);
}

#[test]
fn test_missing_units_fall_back_per_nutrient() {
    let mut record = NutritionRecord::new();
    record.insert("Calories", 300.0, None);
    record.insert("Protein", 12.0, None);

    let bars = key_nutrient_series(&record);
    assert_eq!(bars[0].unit, "kcal");
    assert_eq!(bars[1].unit, "g");

    let empty = key_nutrient_series(&NutritionRecord::new());
    assert_eq!(empty.len(), 6);
    assert_eq!(empty[0].unit, "kcal");
}

#[test]
fn test_build_series_from_upstream_json() {
    let nutrition = serde_json::json!({
        "nutrients": [
            { "name": "Calories", "amount": 410.2, "unit": "kcal" },
            { "name": "Protein", "amount": 21.0, "unit": "g" },
            { "name": "Protein", "amount": 99.0, "unit": "g" },
            { "name": "Fiber", "amount": "lots" },
            { "amount": 3.0 }
        ]
    });
    let record = NutritionRecord::from_json(&nutrition);
    assert_eq!(record.len(), 3);

    let series = build_series(&record);
    assert!((series.macro_split[0].kcal - 84.0).abs() < f64::EPSILON);
    let fiber = &series.key_nutrients[4];
    assert!(fiber.amount.abs() < f64::EPSILON);
    assert_eq!(fiber.unit, "g");
}
