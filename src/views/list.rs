// ABOUTME: List view: loaded search results, current filter criteria, derived rows and stats
// ABOUTME: Rows and statistics are recomputed from immutable snapshots on every read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::sync::Arc;

use recipe_analytics::{filter_recipes, summarize};
use recipe_core::models::{FilterCriteria, RecipeSummary, SummaryStats};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use super::{ViewSlot, ViewState};
use crate::external::RecipeSource;

/// Everything the list page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSnapshot {
    /// Criteria the rows were derived with
    pub criteria: FilterCriteria,
    /// Filtered rows in upstream order
    pub rows: Vec<RecipeSummary>,
    /// Statistics over `rows`
    pub stats: SummaryStats,
    /// Size of the unfiltered result set
    pub loaded: usize,
}

impl ListSnapshot {
    /// Derive rows and statistics from a dataset and criteria
    #[must_use]
    pub fn derive(dataset: &[RecipeSummary], criteria: FilterCriteria) -> Self {
        let rows = filter_recipes(dataset, &criteria);
        let stats = summarize(&rows);
        Self {
            criteria,
            rows,
            stats,
            loaded: dataset.len(),
        }
    }
}

/// Root view: popular recipes with text and diet filters
pub struct ListView {
    source: Arc<dyn RecipeSource>,
    slot: ViewSlot<Arc<Vec<RecipeSummary>>>,
    criteria: RwLock<FilterCriteria>,
}

impl ListView {
    /// New idle view with unrestricted criteria
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            slot: ViewSlot::new(),
            criteria: RwLock::new(FilterCriteria::default()),
        }
    }

    /// Fetch the search results, superseding any load in flight
    pub async fn load(&self) {
        let Some(token) = self.slot.begin().await else {
            debug!("List view torn down; load ignored");
            return;
        };
        let span = info_span!("list_load", request_id = %Uuid::new_v4());
        async {
            let outcome = self.source.search_recipes(&token).await.map(Arc::new);
            if let Ok(recipes) = &outcome {
                debug!(count = recipes.len(), "Search results received");
            }
            self.slot.commit(&token, outcome).await;
        }
        .instrument(span)
        .await;
    }

    /// User-triggered reload after an error or to refresh results
    pub async fn reload(&self) {
        debug!("List reload requested");
        self.load().await;
    }

    /// Replace the filter criteria
    pub async fn set_criteria(&self, criteria: FilterCriteria) {
        *self.criteria.write().await = criteria;
    }

    /// Current filter criteria
    pub async fn criteria(&self) -> FilterCriteria {
        self.criteria.read().await.clone()
    }

    /// Current state with rows and stats derived from the latest dataset and
    /// criteria
    pub async fn state(&self) -> ViewState<ListSnapshot> {
        let criteria = self.criteria().await;
        self.slot
            .state()
            .await
            .map(|dataset| ListSnapshot::derive(&dataset, criteria))
    }

    /// Cancel any in-flight search and refuse further loads
    pub async fn teardown(&self) {
        self.slot.teardown().await;
    }
}
