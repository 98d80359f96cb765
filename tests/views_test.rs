// ABOUTME: Integration tests for list and detail views with a scripted recipe source
// ABOUTME: Covers derived rows and stats, error states, supersession, and teardown
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

mod common;

use std::sync::Arc;

use common::{detail, tacos_and_stew, wait_for_calls, ScriptedSource};
use recipe_core::models::{DietSelector, FilterCriteria, Stat};
use recipe_dashboard::views::{DetailView, ListView, ViewState};
use recipe_dashboard::{AppError, ErrorCode};

// ============================================================================
// List View
// ============================================================================

#[tokio::test]
async fn test_list_starts_idle_and_loads() {
    let source = ScriptedSource::new();
    source.push_search(Ok(tacos_and_stew()));
    let view = ListView::new(source.clone());

    assert_eq!(view.state().await, ViewState::Idle);
    view.load().await;

    let state = view.state().await;
    let snapshot = state.ready().unwrap();
    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.loaded, 2);
    assert_eq!(snapshot.stats.total, 2);
    assert_eq!(snapshot.stats.avg_ready_minutes, Stat::Available(70.0));
    assert_eq!(snapshot.stats.median_health_score, Stat::Available(60.0));
    assert_eq!(snapshot.stats.distinct_cuisine_count, Stat::Available(2));
}

#[tokio::test]
async fn test_list_criteria_recompute_rows_and_stats() {
    let source = ScriptedSource::new();
    source.push_search(Ok(tacos_and_stew()));
    let view = ListView::new(source.clone());
    view.load().await;

    view.set_criteria(FilterCriteria::new("", DietSelector::Vegan))
        .await;
    let state = view.state().await;
    let snapshot = state.ready().unwrap();
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0].title, "Vegan Tacos");
    assert_eq!(snapshot.stats.avg_ready_minutes, Stat::Available(20.0));
    assert_eq!(snapshot.stats.median_health_score, Stat::Available(80.0));
    assert_eq!(snapshot.stats.distinct_cuisine_count, Stat::Available(1));

    view.set_criteria(FilterCriteria::new("pizza", DietSelector::All))
        .await;
    let state = view.state().await;
    let snapshot = state.ready().unwrap();
    assert!(snapshot.rows.is_empty());
    assert_eq!(snapshot.stats.total, 0);
    assert!(snapshot.stats.avg_ready_minutes.is_unavailable());
    assert!(snapshot.stats.median_health_score.is_unavailable());

    // Filtering never refetches
    assert_eq!(source.search_calls(), 1);
}

#[tokio::test]
async fn test_list_failure_replaces_content_and_reload_recovers() {
    let source = ScriptedSource::new();
    source.push_search(Err(AppError::upstream_status("Spoonacular API", 500)));
    source.push_search(Ok(tacos_and_stew()));
    let view = ListView::new(source.clone());

    view.load().await;
    match view.state().await {
        ViewState::Failed(error) => {
            assert_eq!(error.status, Some(500));
            assert_eq!(error.code, ErrorCode::ExternalServiceError);
            assert!(error.is_retryable());
        }
        other => panic!("expected failure, got {other:?}"),
    }

    view.reload().await;
    assert_eq!(view.state().await.ready().unwrap().rows.len(), 2);
}

#[tokio::test]
async fn test_list_missing_key_is_reported() {
    let source = ScriptedSource::new();
    source.push_search(Err(AppError::config_missing("SPOONACULAR_API_KEY")));
    let view = ListView::new(source.clone());

    view.load().await;
    match view.state().await {
        ViewState::Failed(error) => {
            assert_eq!(error.code, ErrorCode::ConfigMissing);
            assert!(error.message.contains("SPOONACULAR_API_KEY"));
            assert!(!error.is_retryable());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_cancelled_error_from_live_load_ends_loading() {
    let source = ScriptedSource::new();
    source.push_search(Err(AppError::cancelled()));
    source.push_search(Ok(tacos_and_stew()));
    let view = ListView::new(source.clone());

    view.load().await;
    match view.state().await {
        ViewState::Failed(error) => assert_eq!(error.code, ErrorCode::Cancelled),
        other => panic!("expected failure, got {other:?}"),
    }

    view.reload().await;
    assert_eq!(view.state().await.ready().unwrap().rows.len(), 2);
}

#[tokio::test]
async fn test_list_teardown_discards_late_response() {
    let source = ScriptedSource::new();
    source.push_search(Ok(tacos_and_stew()));
    let gate = source.gate_search();
    let view = Arc::new(ListView::new(source.clone()));

    let pending = tokio::spawn({
        let view = Arc::clone(&view);
        async move { view.load().await }
    });
    wait_for_calls(|| source.search_calls(), 1).await;
    assert!(view.state().await.is_loading());

    view.teardown().await;
    gate.notify_one();
    pending.await.unwrap();

    assert!(view.state().await.ready().is_none());

    // Loads after teardown are refused without contacting the source
    view.load().await;
    assert_eq!(source.search_calls(), 1);
}

#[tokio::test]
async fn test_list_newer_load_supersedes_older() {
    let source = ScriptedSource::new();
    source.push_search(Err(AppError::upstream_status("Spoonacular API", 503)));
    source.push_search(Ok(tacos_and_stew()));
    let gate = source.gate_search();
    let view = Arc::new(ListView::new(source.clone()));

    let first = tokio::spawn({
        let view = Arc::clone(&view);
        async move { view.load().await }
    });
    wait_for_calls(|| source.search_calls(), 1).await;

    // The gated first request has not consumed a response yet, so the second
    // load receives the scripted 503 and the first later receives the success
    let second = tokio::spawn({
        let view = Arc::clone(&view);
        async move { view.load().await }
    });
    wait_for_calls(|| source.search_calls(), 2).await;
    second.await.unwrap();
    gate.notify_one();
    first.await.unwrap();

    match view.state().await {
        ViewState::Failed(error) => assert_eq!(error.status, Some(503)),
        other => panic!("late success overwrote newer state: {other:?}"),
    }
    assert_eq!(source.search_calls(), 2);
}

// ============================================================================
// Detail View
// ============================================================================

#[tokio::test]
async fn test_detail_derives_panel() {
    let source = ScriptedSource::new();
    source.set_detail(7, Ok(detail(7, "Rice Bowl")));
    let view = DetailView::new(source.clone());

    view.navigate(7).await;
    let state = view.state().await;
    let panel = state.ready().unwrap();

    assert_eq!(panel.recipe.id(), 7);
    assert_eq!(panel.summary_text, "Rice Bowl is delicious.");
    assert_eq!(panel.steps, vec!["Prep.", "Cook."]);
    let series = panel.series.as_ref().unwrap();
    assert!((series.macro_split[0].kcal - 40.0).abs() < 1e-9);
    assert!((series.macro_split[1].kcal - 45.0).abs() < 1e-9);
    assert!((series.macro_split[2].kcal - 80.0).abs() < 1e-9);
    assert_eq!(series.key_nutrients.len(), 6);
    assert_eq!(view.current_id().await, Some(7));
}

#[tokio::test]
async fn test_detail_without_nutrition_has_no_series() {
    let source = ScriptedSource::new();
    let mut record = detail(3, "Toast");
    record.nutrition = None;
    record.instructions.clear();
    record.instructions_html = Some("<ol><li>Slice bread</li><li>Toast it</li></ol>".to_owned());
    source.set_detail(3, Ok(record));
    let view = DetailView::new(source.clone());

    view.navigate(3).await;
    let state = view.state().await;
    let panel = state.ready().unwrap();
    assert!(panel.series.is_none());
    assert_eq!(panel.steps, vec!["Slice bread", "Toast it"]);
}

#[tokio::test]
async fn test_detail_not_found_is_failed_state() {
    let source = ScriptedSource::new();
    source.set_detail(
        404,
        Err(AppError::upstream_status("Spoonacular API", 404)),
    );
    let view = DetailView::new(source.clone());

    view.navigate(404).await;
    match view.state().await {
        ViewState::Failed(error) => assert_eq!(error.status, Some(404)),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_detail_late_response_for_previous_id_is_dropped() {
    let source = ScriptedSource::new();
    source.set_detail(1, Ok(detail(1, "Recipe A")));
    source.set_detail(2, Ok(detail(2, "Recipe B")));
    let gate_a = source.gate_detail(1);
    let view = Arc::new(DetailView::new(source.clone()));

    let load_a = tokio::spawn({
        let view = Arc::clone(&view);
        async move { view.navigate(1).await }
    });
    wait_for_calls(|| source.detail_calls(), 1).await;

    view.navigate(2).await;
    assert_eq!(
        view.state().await.ready().map(|panel| panel.recipe.id()),
        Some(2)
    );

    gate_a.notify_one();
    load_a.await.unwrap();

    let state = view.state().await;
    assert_eq!(state.ready().map(|panel| panel.recipe.id()), Some(2));
    assert_eq!(view.current_id().await, Some(2));
}

#[tokio::test]
async fn test_detail_reload_refetches_current_id() {
    let source = ScriptedSource::new();
    source.set_detail(5, Ok(detail(5, "Soup")));
    let view = DetailView::new(source.clone());

    view.reload().await;
    assert_eq!(source.detail_calls(), 0);

    view.navigate(5).await;
    view.reload().await;
    assert_eq!(source.detail_calls(), 2);
    assert!(view.state().await.ready().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_detail_concurrent_navigation_keeps_id_and_panel_together() {
    let source = ScriptedSource::new();
    for id in 1..=16 {
        source.set_detail(id, Ok(detail(id, &format!("Recipe {id}"))));
    }
    let view = Arc::new(DetailView::new(source.clone()));

    for _ in 0..8 {
        let mut loads = tokio::task::JoinSet::new();
        for id in 1..=16 {
            let view = Arc::clone(&view);
            loads.spawn(async move { view.navigate(id).await });
        }
        while let Some(joined) = loads.join_next().await {
            joined.unwrap();
        }

        let current = view.current_id().await;
        let shown = view.state().await.ready().map(|panel| panel.recipe.id());
        assert!(current.is_some());
        assert_eq!(current, shown);
    }
}

#[tokio::test]
async fn test_detail_cancelled_error_from_live_load_ends_loading() {
    let source = ScriptedSource::new();
    source.set_detail(3, Err(AppError::cancelled()));
    let view = DetailView::new(source.clone());

    view.navigate(3).await;
    let state = view.state().await;
    assert!(!state.is_loading());
    assert!(matches!(state, ViewState::Failed(ref error) if error.code == ErrorCode::Cancelled));
    assert_eq!(view.current_id().await, Some(3));
}

#[tokio::test]
async fn test_detail_teardown_refuses_navigation() {
    let source = ScriptedSource::new();
    source.set_detail(5, Ok(detail(5, "Soup")));
    let view = DetailView::new(source.clone());

    view.teardown().await;
    view.navigate(5).await;

    assert_eq!(view.state().await, ViewState::Idle);
    assert_eq!(view.current_id().await, None);
    assert_eq!(source.detail_calls(), 0);
}
