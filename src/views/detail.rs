// ABOUTME: Detail view: one recipe keyed by route id, with prose, steps, and chart series
// ABOUTME: Navigating to another id supersedes the previous load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::sync::Arc;

use recipe_analytics::{build_series, plain_text, plain_text_steps, NutritionSeries};
use recipe_core::models::{RecipeDetail, RecipeId};
use serde::Serialize;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use super::{ViewSlot, ViewState};
use crate::external::RecipeSource;

/// Everything the detail page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    /// Record as decoded
    pub recipe: RecipeDetail,
    /// Summary with markup removed
    pub summary_text: String,
    /// Structured steps, or steps recovered from free-form instructions
    pub steps: Vec<String>,
    /// Chart series; `None` when the response had no nutrition
    pub series: Option<NutritionSeries>,
}

impl DetailPanel {
    /// Derive display fields from a detail record
    #[must_use]
    pub fn derive(recipe: RecipeDetail) -> Self {
        let summary_text = plain_text(recipe.summary_html.as_deref());
        let steps = if recipe.instructions.is_empty() {
            plain_text_steps(recipe.instructions_html.as_deref())
        } else {
            recipe.instructions.clone()
        };
        let series = recipe.nutrition.as_ref().map(build_series);
        Self {
            recipe,
            summary_text,
            steps,
            series,
        }
    }
}

/// Detail view for the recipe named by the route
pub struct DetailView {
    source: Arc<dyn RecipeSource>,
    slot: ViewSlot<Arc<DetailPanel>, RecipeId>,
}

impl DetailView {
    /// New idle view
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            slot: ViewSlot::new(),
        }
    }

    /// Show recipe `id`, cancelling the load for any previous id
    pub async fn navigate(&self, id: RecipeId) {
        let Some(token) = self.slot.begin_for(id).await else {
            debug!(recipe_id = id, "Detail view torn down; navigation ignored");
            return;
        };

        let span = info_span!("detail_load", request_id = %Uuid::new_v4(), recipe_id = id);
        async {
            let outcome = self
                .source
                .recipe_details(id, &token)
                .await
                .map(|recipe| Arc::new(DetailPanel::derive(recipe)));
            if self.slot.commit(&token, outcome).await {
                debug!("Detail committed");
            }
        }
        .instrument(span)
        .await;
    }

    /// Reload the current recipe, if any
    pub async fn reload(&self) {
        if let Some(id) = self.slot.key().await {
            self.navigate(id).await;
        }
    }

    /// Recipe id most recently navigated to
    pub async fn current_id(&self) -> Option<RecipeId> {
        self.slot.key().await
    }

    /// Current state
    pub async fn state(&self) -> ViewState<Arc<DetailPanel>> {
        self.slot.state().await
    }

    /// Cancel any in-flight load and refuse further loads
    pub async fn teardown(&self) {
        self.slot.teardown().await;
    }
}
