// ABOUTME: View state shared by the list and detail views
// ABOUTME: ViewSlot enforces one in-flight load and drops results from cancelled loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

//! # Views
//!
//! Each view instance owns a [`ViewSlot`]: its current [`ViewState`] plus the
//! cancellation token of the load in flight, both behind one lock.
//!
//! - Starting a load cancels the previous token, so a newer load always
//!   supersedes an older one.
//! - Committing a result takes the same lock and is skipped when the load's
//!   token has been cancelled, so a late response can never overwrite state.
//! - A keyed slot records what the load is for (the detail view's recipe id)
//!   in the same critical section that starts it.
//! - Tearing a view down cancels its token and refuses further loads.

/// Detail view for one recipe
pub mod detail;
/// List view with filter criteria and statistics
pub mod list;

use recipe_core::{AppError, AppResult, ErrorCode};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub use detail::{DetailPanel, DetailView};
pub use list::{ListSnapshot, ListView};

/// What a view currently shows
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// Loaded content
    Ready(T),
    /// The last load failed; replaces all content
    Failed(ViewError),
}

impl<T> ViewState<T> {
    /// Loaded content, if any
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// True while a load is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Map loaded content, keeping every other state as is
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            Self::Idle => ViewState::Idle,
            Self::Loading => ViewState::Loading,
            Self::Ready(content) => ViewState::Ready(f(content)),
            Self::Failed(error) => ViewState::Failed(error),
        }
    }
}

/// User-visible error state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewError {
    /// Error category
    pub code: ErrorCode,
    /// Message shown in place of the view content
    pub message: String,
    /// Upstream HTTP status, when there was one
    pub status: Option<u16>,
}

impl ViewError {
    /// Whether a user-triggered reload may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl From<&AppError> for ViewError {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            status: error.status,
        }
    }
}

#[derive(Debug)]
struct SlotInner<T, K> {
    state: ViewState<T>,
    in_flight: Option<CancellationToken>,
    key: Option<K>,
    torn_down: bool,
}

impl<T, K> SlotInner<T, K> {
    fn start(&mut self) -> CancellationToken {
        if let Some(previous) = self.in_flight.take() {
            debug!("Superseding in-flight load");
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        self.state = ViewState::Loading;
        token
    }
}

/// State holder for one view instance, optionally keyed by what it shows
#[derive(Debug)]
pub struct ViewSlot<T, K = ()> {
    inner: RwLock<SlotInner<T, K>>,
}

impl<T, K> Default for ViewSlot<T, K> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(SlotInner {
                state: ViewState::Idle,
                in_flight: None,
                key: None,
                torn_down: false,
            }),
        }
    }
}

impl<T: Clone, K: Clone> ViewSlot<T, K> {
    /// Empty slot in the `Idle` state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load: cancel whatever is in flight, switch to `Loading`, and
    /// hand back the token for the new load. Returns `None` once torn down.
    pub async fn begin(&self) -> Option<CancellationToken> {
        let mut inner = self.inner.write().await;
        if inner.torn_down {
            return None;
        }
        Some(inner.start())
    }

    /// [`Self::begin`] for `key`; the key and the load change together.
    /// Returns `None` once torn down, leaving the previous key in place.
    pub async fn begin_for(&self, key: K) -> Option<CancellationToken> {
        let mut inner = self.inner.write().await;
        if inner.torn_down {
            return None;
        }
        inner.key = Some(key);
        Some(inner.start())
    }

    /// Store the outcome of the load that owns `token`.
    ///
    /// Returns `false` without touching state when the token was cancelled.
    /// A `Cancelled` error from a load whose token is still live ends the
    /// load as a failure so the view never stays `Loading`.
    pub async fn commit(&self, token: &CancellationToken, outcome: AppResult<T>) -> bool {
        let mut inner = self.inner.write().await;
        if token.is_cancelled() {
            debug!("Discarding result of cancelled load");
            return false;
        }
        inner.state = match outcome {
            Ok(content) => ViewState::Ready(content),
            Err(error) => {
                if error.is_cancelled() {
                    debug!("Source reported cancellation for a live load");
                }
                ViewState::Failed(ViewError::from(&error))
            }
        };
        inner.in_flight = None;
        true
    }

    /// Key of the most recent load started with [`Self::begin_for`]
    pub async fn key(&self) -> Option<K> {
        self.inner.read().await.key.clone()
    }

    /// Cancel the in-flight load and refuse further loads
    pub async fn teardown(&self) {
        let mut inner = self.inner.write().await;
        if let Some(token) = inner.in_flight.take() {
            token.cancel();
        }
        inner.torn_down = true;
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> ViewState<T> {
        self.inner.read().await.state.clone()
    }

    /// True once [`Self::teardown`] ran
    pub async fn is_torn_down(&self) -> bool {
        self.inner.read().await.torn_down
    }
}
