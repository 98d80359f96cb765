// ABOUTME: Nutrition record mapping exact nutrient names to amount and unit
// ABOUTME: Absent nutrients read back as zero so chart series keep fixed shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json;

/// One nutrient entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    /// Amount per serving
    pub amount: f64,
    /// Unit as reported upstream (e.g. "g", "kcal", "mg"); absent when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Nutrient name to amount mapping.
///
/// Lookup is exact: "Carbohydrates" and "carbohydrates" are different keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionRecord {
    nutrients: BTreeMap<String, Nutrient>,
}

impl NutritionRecord {
    /// Empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a nutrient
    pub fn insert(&mut self, name: impl Into<String>, amount: f64, unit: Option<&str>) {
        self.nutrients.insert(
            name.into(),
            Nutrient {
                amount,
                unit: unit.map(ToOwned::to_owned),
            },
        );
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, amount: f64, unit: &str) -> Self {
        self.insert(name, amount, Some(unit));
        self
    }

    /// Exact-name lookup
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Nutrient> {
        self.nutrients.get(name)
    }

    /// Amount for `name`, zero when absent
    #[must_use]
    pub fn amount(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, |nutrient| nutrient.amount)
    }

    /// Number of distinct nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.nutrients.len()
    }

    /// True when no nutrient is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nutrients.is_empty()
    }

    /// Build from an upstream `nutrition` object holding a `nutrients` array
    /// of `{name, amount, unit}` entries. The first entry for a name wins and
    /// non-finite or missing amounts become zero.
    #[must_use]
    pub fn from_json(nutrition: &Value) -> Self {
        let mut record = Self::new();
        for entry in json::array(nutrition, "nutrients") {
            let Some(name) = json::string(entry, "name") else {
                continue;
            };
            if record.nutrients.contains_key(&name) {
                continue;
            }
            let amount = json::finite(entry, "amount").unwrap_or(0.0);
            let unit = json::string(entry, "unit").filter(|unit| !unit.is_empty());
            record.nutrients.insert(name, Nutrient { amount, unit });
        }
        record
    }
}

impl FromIterator<(String, Nutrient)> for NutritionRecord {
    fn from_iter<I: IntoIterator<Item = (String, Nutrient)>>(iter: I) -> Self {
        Self {
            nutrients: iter.into_iter().collect(),
        }
    }
}
