// ABOUTME: Shared test utilities for view, navigator, and render integration tests
// ABOUTME: Provides a scripted recipe source with gated responses and record fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::panic
)]
//! Shared test utilities for `recipe_dashboard`

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use recipe_core::models::{NutritionRecord, RecipeDetail, RecipeId, RecipeSummary};
use recipe_dashboard::external::RecipeSource;
use recipe_dashboard::{AppError, AppResult};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

/// Recipe source whose responses are scripted per test.
///
/// Responses ignore the cancellation token so tests can deliver a late
/// response after the view has moved on.
#[derive(Default)]
pub struct ScriptedSource {
    searches: Mutex<Vec<AppResult<Vec<RecipeSummary>>>>,
    search_gate: Mutex<Option<Arc<Notify>>>,
    details: Mutex<HashMap<RecipeId, AppResult<RecipeDetail>>>,
    detail_gates: Mutex<HashMap<RecipeId, Arc<Notify>>>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a search response; the last one queued repeats
    pub fn push_search(&self, response: AppResult<Vec<RecipeSummary>>) {
        self.searches.lock().unwrap().push(response);
    }

    pub fn set_detail(&self, id: RecipeId, response: AppResult<RecipeDetail>) {
        self.details.lock().unwrap().insert(id, response);
    }

    /// Hold the next search response until the returned gate is notified
    pub fn gate_search(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.search_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    /// Hold the next detail response for `id` until the returned gate is notified
    pub fn gate_detail(&self, id: RecipeId) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.detail_gates
            .lock()
            .unwrap()
            .insert(id, Arc::clone(&gate));
        gate
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn next_search(&self) -> AppResult<Vec<RecipeSummary>> {
        let mut searches = self.searches.lock().unwrap();
        match searches.len() {
            0 => Ok(Vec::new()),
            1 => searches[0].clone(),
            _ => searches.remove(0),
        }
    }
}

#[async_trait]
impl RecipeSource for ScriptedSource {
    async fn search_recipes(&self, _cancel: &CancellationToken) -> AppResult<Vec<RecipeSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.search_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.next_search()
    }

    async fn recipe_details(
        &self,
        id: RecipeId,
        _cancel: &CancellationToken,
    ) -> AppResult<RecipeDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.detail_gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(AppError::not_found(format!("Recipe {id}"))))
    }
}

/// Wait until `calls` reports at least `count` calls
pub async fn wait_for_calls(calls: impl Fn() -> usize, count: usize) {
    for _ in 0..200 {
        if calls() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("expected {count} calls, saw {}", calls());
}

pub fn summary(
    id: RecipeId,
    title: &str,
    ready_in_minutes: f64,
    health_score: f64,
    cuisines: &[&str],
) -> RecipeSummary {
    RecipeSummary {
        ready_in_minutes: Some(ready_in_minutes),
        health_score: Some(health_score),
        cuisines: cuisines.iter().map(|c| (*c).to_owned()).collect(),
        ..RecipeSummary::new(id, title)
    }
}

/// Vegan Tacos (20 min, 80, Mexican) and Beef Stew (120 min, 40, American)
pub fn tacos_and_stew() -> Vec<RecipeSummary> {
    let mut tacos = summary(1, "Vegan Tacos", 20.0, 80.0, &["Mexican"]);
    tacos.vegan = true;
    tacos.vegetarian = true;
    tacos.diets = vec!["vegan".to_owned()];
    let stew = summary(2, "Beef Stew", 120.0, 40.0, &["American"]);
    vec![tacos, stew]
}

pub fn detail(id: RecipeId, title: &str) -> RecipeDetail {
    RecipeDetail {
        summary: RecipeSummary::new(id, title),
        summary_html: Some(format!("<p>{title} is <b>delicious</b>.</p>")),
        instructions: vec!["Prep.".to_owned(), "Cook.".to_owned()],
        ingredients: vec!["1 cup rice".to_owned()],
        source_url: Some(format!("https://example.com/{id}")),
        nutrition: Some(
            NutritionRecord::new()
                .with("Calories", 500.0, "kcal")
                .with("Protein", 10.0, "g")
                .with("Fat", 5.0, "g")
                .with("Carbohydrates", 20.0, "g"),
        ),
        ..RecipeDetail::default()
    }
}
