// ABOUTME: Route-driven view lifecycle: one active view, torn down on navigation away
// ABOUTME: Detail-to-detail navigation reuses the view so the newer load supersedes the older
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::external::RecipeSource;
use crate::render;
use crate::routes::Route;
use crate::views::{DetailView, ListView};

/// The view currently mounted for a route
#[derive(Clone)]
pub enum ActiveView {
    /// Root list
    List(Arc<ListView>),
    /// Recipe detail
    Detail(Arc<DetailView>),
}

impl ActiveView {
    async fn teardown(&self) {
        match self {
            Self::List(view) => view.teardown().await,
            Self::Detail(view) => view.teardown().await,
        }
    }
}

/// Owns the active view and swaps it as routes change
pub struct Navigator {
    source: Arc<dyn RecipeSource>,
    active: Mutex<Option<(Route, ActiveView)>>,
}

impl Navigator {
    /// Navigator with nothing mounted
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            active: Mutex::new(None),
        }
    }

    /// Mount the view for `route` and start its load.
    ///
    /// The previous view is torn down first, cancelling its in-flight request,
    /// unless both routes are detail pages, in which case the detail view is
    /// reused and the new id supersedes the old one.
    pub async fn go(&self, route: Route) -> ActiveView {
        let view = self.mount(route).await;
        match (&view, route) {
            (ActiveView::List(list), _) => list.load().await,
            (ActiveView::Detail(detail), Route::Recipe(id)) => detail.navigate(id).await,
            (ActiveView::Detail(_), Route::Home) => {}
        }
        view
    }

    /// Mount the view for `route` without loading it
    pub async fn mount(&self, route: Route) -> ActiveView {
        let mut active = self.active.lock().await;

        let reusable = match (active.as_ref(), route) {
            (Some((_, ActiveView::Detail(detail))), Route::Recipe(_)) => Some(Arc::clone(detail)),
            _ => None,
        };
        if let Some(detail) = reusable {
            let view = ActiveView::Detail(detail);
            *active = Some((route, view.clone()));
            return view;
        }

        if let Some((previous, view)) = active.take() {
            debug!(from = %previous, to = %route, "Tearing down previous view");
            view.teardown().await;
        }

        let view = match route {
            Route::Home => ActiveView::List(Arc::new(ListView::new(Arc::clone(&self.source)))),
            Route::Recipe(_) => {
                ActiveView::Detail(Arc::new(DetailView::new(Arc::clone(&self.source))))
            }
        };
        *active = Some((route, view.clone()));
        view
    }

    /// Route currently mounted
    pub async fn current_route(&self) -> Option<Route> {
        self.active.lock().await.as_ref().map(|(route, _)| *route)
    }

    /// Render whatever is mounted
    pub async fn render(&self) -> String {
        let active = self.active.lock().await.clone();
        match active {
            None => render::render_not_mounted(),
            Some((_, ActiveView::List(view))) => render::render_list(&view.state().await),
            Some((_, ActiveView::Detail(view))) => render::render_detail(&view.state().await),
        }
    }

    /// Tear down the mounted view, if any
    pub async fn close(&self) {
        if let Some((_, view)) = self.active.lock().await.take() {
            view.teardown().await;
        }
    }
}
