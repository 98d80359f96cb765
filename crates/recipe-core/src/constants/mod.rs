// ABOUTME: Application constants for the recipe API, nutrition labels, and diet tags
// ABOUTME: Keeps wire parameter names and fixed values in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

/// Recipe API endpoint defaults and fixed request parameters
pub mod api {
    /// Human-readable service name used in errors and logs
    pub const SERVICE_NAME: &str = "Spoonacular API";

    /// Default base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

    /// Search endpoint path
    pub const SEARCH_PATH: &str = "/recipes/complexSearch";

    /// Maximum number of search results requested
    pub const RESULT_LIMIT: u32 = 50;

    /// Sort order sent with every search
    pub const SORT_ORDER: &str = "popularity";
}

/// Environment variable names
pub mod env_config {
    /// Required API key
    pub const API_KEY: &str = "SPOONACULAR_API_KEY";
    /// Optional base URL override
    pub const BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
}

/// Nutrient names as they appear in the nutrition record (exact match)
pub mod nutrients {
    /// Energy
    pub const CALORIES: &str = "Calories";
    /// Protein
    pub const PROTEIN: &str = "Protein";
    /// Total fat
    pub const FAT: &str = "Fat";
    /// Carbohydrates
    pub const CARBOHYDRATES: &str = "Carbohydrates";
    /// Dietary fiber
    pub const FIBER: &str = "Fiber";
    /// Sugar
    pub const SUGAR: &str = "Sugar";

    /// Bar chart nutrients, in display order
    pub const KEY_NUTRIENTS: [&str; 6] = [CALORIES, PROTEIN, FAT, CARBOHYDRATES, FIBER, SUGAR];

    /// kcal per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Unit assumed for calories when the record omits one
    pub const DEFAULT_ENERGY_UNIT: &str = "kcal";
    /// Unit assumed for every other nutrient when the record omits one
    pub const DEFAULT_MASS_UNIT: &str = "g";
}

/// Diet tags used by the upstream `diets` array
pub mod diet_tags {
    /// Vegetarian tag
    pub const VEGETARIAN: &str = "vegetarian";
    /// Vegan tag
    pub const VEGAN: &str = "vegan";
    /// Gluten-free tag (note the space)
    pub const GLUTEN_FREE: &str = "gluten free";
}
