// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The data-loading state machine and the reactive dashboard container.
//!
//! `LoadState` is the three-way fetch status; `Dashboard` owns the canonical
//! record set, the query string, and the derived visible set, recomputing
//! the latter whenever either input changes.

use clientry_core::{Customer, CustomerSource};
use clientry_core::ClientryError;
use tracing::{debug, info, warn};

use crate::filter::filter_customers;

/// Three-way status of the initial data fetch.
///
/// Exactly one variant holds at any time. `Loading -> Ready` on a
/// successful fetch and parse, `Loading -> Failed` otherwise. Nothing
/// transitions back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The fetch has not settled yet.
    Loading,
    /// The fetch succeeded; holds the canonical record set.
    Ready(Vec<Customer>),
    /// The fetch failed; holds a human-readable message.
    Failed(String),
}

impl LoadState {
    /// True while the fetch has not settled.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once the canonical set is populated.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// True once the fetch has failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// The dashboard: one load per lifetime, then reactive filtering.
///
/// The visible set is derived from (canonical set, query) and replaced
/// atomically on every change to either; no partial state is observable
/// between a query update and the matching visible set.
#[derive(Debug)]
pub struct Dashboard {
    state: LoadState,
    query: String,
    visible: Vec<Customer>,
}

impl Dashboard {
    /// Creates a dashboard in the `Loading` state with an empty query.
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            query: String::new(),
            visible: Vec::new(),
        }
    }

    /// Performs the one-time fetch through `source` and settles the state.
    ///
    /// Calling this again after the state has settled is a logged no-op.
    pub async fn load(&mut self, source: &dyn CustomerSource) {
        if !self.state.is_loading() {
            warn!(source = source.name(), "load called after fetch settled; ignoring");
            return;
        }
        debug!(source = source.name(), "fetching customer list");
        let result = source.list_customers().await;
        self.apply_fetch_result(result);
    }

    /// Applies a fetch outcome: `Loading -> Ready` or `Loading -> Failed`.
    ///
    /// A result arriving once the state has already settled is discarded.
    pub fn apply_fetch_result(
        &mut self,
        result: Result<Vec<Customer>, ClientryError>,
    ) {
        if !self.state.is_loading() {
            warn!("fetch result arrived after state settled; discarding");
            return;
        }
        self.state = match result {
            Ok(customers) => {
                info!(count = customers.len(), "customer list loaded");
                LoadState::Ready(customers)
            }
            Err(err) => {
                warn!(error = %err, "customer fetch failed");
                LoadState::Failed(err.to_string())
            }
        };
        self.recompute();
    }

    /// Replaces the query and recomputes the visible set in one step.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The visible subset, in canonical order.
    pub fn visible(&self) -> &[Customer] {
        &self.visible
    }

    /// Size of the canonical set (zero unless `Ready`).
    pub fn total(&self) -> usize {
        match &self.state {
            LoadState::Ready(customers) => customers.len(),
            _ => 0,
        }
    }

    fn recompute(&mut self) {
        self.visible = match &self.state {
            LoadState::Ready(customers) => filter_customers(customers, &self.query),
            _ => Vec::new(),
        };
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
