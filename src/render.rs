// ABOUTME: Plain-text rendering of list and detail view state for the terminal
// ABOUTME: Every page starts with the same navigation header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::fmt::Write;
use std::sync::Arc;

use recipe_core::models::{DietSelector, Stat};

use crate::routes::Route;
use crate::views::{DetailPanel, ListSnapshot, ViewError, ViewState};

/// Navigation header shared by every page
#[must_use]
pub fn navigation() -> String {
    format!("Recipe Dashboard  [Recipes: {}]", Route::Home)
}

/// List page
#[must_use]
pub fn render_list(state: &ViewState<ListSnapshot>) -> String {
    let mut out = page_header();
    match state {
        ViewState::Idle | ViewState::Loading => out.push_str("Loading recipes...\n"),
        ViewState::Failed(error) => render_error(&mut out, error),
        ViewState::Ready(snapshot) => render_snapshot(&mut out, snapshot),
    }
    out
}

/// Detail page
#[must_use]
pub fn render_detail(state: &ViewState<Arc<DetailPanel>>) -> String {
    let mut out = page_header();
    match state {
        ViewState::Idle | ViewState::Loading => out.push_str("Loading recipe...\n"),
        ViewState::Failed(error) => render_error(&mut out, error),
        ViewState::Ready(panel) => render_panel(&mut out, panel),
    }
    out
}

/// Page shown before any route is mounted
#[must_use]
pub fn render_not_mounted() -> String {
    let mut out = page_header();
    out.push_str("Nothing to show.\n");
    out
}

fn page_header() -> String {
    let nav = navigation();
    format!("{nav}\n{}\n", "=".repeat(nav.len()))
}

fn render_error(out: &mut String, error: &ViewError) {
    let _ = match error.status {
        Some(status) => writeln!(out, "Error (HTTP {status}): {}", error.message),
        None => writeln!(out, "Error: {}", error.message),
    };
    if error.is_retryable() {
        out.push_str("Reload to try again.\n");
    }
}

fn render_snapshot(out: &mut String, snapshot: &ListSnapshot) {
    let criteria = &snapshot.criteria;
    let _ = diet_line(out, criteria.diet);
    let _ = writeln!(out, "Search: \"{}\"", criteria.query.trim());

    let stats = &snapshot.stats;
    let _ = writeln!(
        out,
        "Showing {} of {} | Avg ready: {} min | Median health: {} | Cuisines: {}\n",
        stats.total,
        snapshot.loaded,
        stats.avg_ready_minutes,
        stats.median_health_score,
        stats.distinct_cuisine_count,
    );

    if snapshot.rows.is_empty() {
        out.push_str("No recipes match.\n");
        return;
    }
    for recipe in &snapshot.rows {
        let ready = Stat::from(recipe.ready_in_minutes);
        let health = Stat::from(recipe.health_score);
        let _ = writeln!(
            out,
            "{:>8}  {}  ({ready} min, health {health})  {}",
            recipe.id,
            recipe.title,
            Route::Recipe(recipe.id),
        );
    }
}

fn diet_line(out: &mut String, selected: DietSelector) -> std::fmt::Result {
    out.push_str("Diet:");
    for diet in DietSelector::ALL {
        if diet == selected {
            write!(out, " [{diet}]")?;
        } else {
            write!(out, " {diet}")?;
        }
    }
    out.push('\n');
    Ok(())
}

fn render_panel(out: &mut String, panel: &DetailPanel) {
    let recipe = &panel.recipe;
    let summary = &recipe.summary;
    let _ = writeln!(out, "{}\n", summary.title);
    let _ = writeln!(
        out,
        "Ready in {} min | Serves {} | Health {}",
        Stat::from(summary.ready_in_minutes),
        Stat::from(summary.servings),
        Stat::from(summary.health_score),
    );
    if let Some(url) = &recipe.source_url {
        let _ = writeln!(out, "Source: {url}");
    }
    if !panel.summary_text.is_empty() {
        let _ = writeln!(out, "\n{}", panel.summary_text);
    }

    if !recipe.ingredients.is_empty() {
        out.push_str("\nIngredients\n");
        for line in &recipe.ingredients {
            let _ = writeln!(out, "  - {line}");
        }
    }
    if !panel.steps.is_empty() {
        out.push_str("\nInstructions\n");
        for (index, step) in panel.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", index + 1);
        }
    }

    if let Some(series) = &panel.series {
        out.push_str("\nCalories by macronutrient\n");
        for slice in &series.macro_split {
            let _ = writeln!(out, "  {:<8} {:>8.1} kcal", slice.label, slice.kcal);
        }
        out.push_str("\nKey nutrients\n");
        for bar in &series.key_nutrients {
            let _ = writeln!(out, "  {:<14} {:>8.1} {}", bar.name, bar.amount, bar.unit);
        }
    }
}
