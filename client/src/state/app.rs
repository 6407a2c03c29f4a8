//! Application state and the controller that owns it.
//!
//! DESIGN
//! ======
//! `AppState` is a plain value: current catalog, layout mode, the first-load
//! error notice, and a transition counter. `Controller` is the only writer.
//! Every operation mutates state and returns; callers re-run [`Controller::view`]
//! afterwards to get a fresh [`PageView`].
//!
//! ERROR HANDLING
//! ==============
//! Load failures never escape. Before the first successful load they become a
//! notice with a retry control; afterwards they are logged and the previous
//! listing stays. Preference storage failures are logged at warn and dropped.

use std::sync::Arc;

use catalog::Catalog;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::refresh::{Admission, LoadTicket, RefreshGate, Trigger};
use super::view_mode::{self, ViewMode};
use crate::config::ClientConfig;
use crate::net::loader::{CatalogSource, LoadError, LoadErrorKind};
use crate::util::preference::PreferenceStore;
use crate::view::PageView;
use crate::view::page::build_page;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// User-visible load failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: LoadErrorKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// `None` until the first successful load.
    pub catalog: Option<Catalog>,
    pub view_mode: ViewMode,
    pub notice: Option<Notice>,
    /// Incremented on every layout toggle.
    pub transition_seq: u64,
}

/// Result of applying one load completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New catalog installed.
    Applied { products: usize },
    /// Failure before any catalog was loaded; the notice is showing.
    FailedFirstLoad,
    /// Failure after a successful load; the previous listing stays.
    FailedKeptListing,
    /// A newer load already applied; this result was dropped.
    Stale,
}

pub struct Controller {
    state: AppState,
    config: ClientConfig,
    store: Arc<dyn PreferenceStore>,
    gate: RefreshGate,
}

impl Controller {
    #[must_use]
    pub fn new(config: ClientConfig, store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            state: AppState::default(),
            config,
            store,
            gate: RefreshGate::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    /// Describe the page for the current state.
    #[must_use]
    pub fn view(&self, now: OffsetDateTime) -> PageView {
        build_page(&self.state, &self.config, now)
    }

    // =========================================================================
    // VIEW MODE
    // =========================================================================

    /// Apply the stored layout preference. A stored `list` while the page is
    /// in grid mode performs exactly one toggle; anything else is a no-op.
    pub fn restore_preference(&mut self) -> ViewMode {
        match view_mode::read_preference(self.store.as_ref()) {
            Ok(Some(ViewMode::List)) if self.state.view_mode == ViewMode::Grid => {
                self.toggle_view_mode();
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "view preference unavailable; using default"),
        }
        self.state.view_mode
    }

    /// Flip grid and list, persist the new mode, and start the transition.
    /// The in-memory mode changes even if persisting fails.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        let mode = self.state.view_mode.toggled();
        self.state.view_mode = mode;
        self.state.transition_seq += 1;

        if let Err(e) = view_mode::persist(self.store.as_ref(), mode) {
            warn!(error = %e, mode = %mode, "failed to persist view preference");
        }
        debug!(mode = %mode, "view mode toggled");
        mode
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Ask the refresh gate whether a load may start.
    pub fn begin_load(&mut self, trigger: Trigger, visible: bool) -> Admission {
        let admission = self.gate.admit(trigger, visible);
        match admission {
            Admission::SkipHidden => debug!("page hidden; skipping scheduled refresh"),
            Admission::SkipInFlight => {
                debug!(in_flight = self.gate.in_flight(), "load already in flight; skipping scheduled refresh");
            }
            Admission::Start(ticket) => debug!(seq = ticket.seq, ?trigger, "load started"),
        }
        admission
    }

    /// Apply the result of a load started with [`Controller::begin_load`].
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Catalog, LoadError>) -> LoadOutcome {
        if !self.gate.complete(ticket, result.is_ok()) {
            debug!(seq = ticket.seq, "discarding stale load result");
            return LoadOutcome::Stale;
        }
        self.apply_load(result)
    }

    /// Install a load result. Success replaces the catalog wholesale.
    pub fn apply_load(&mut self, result: Result<Catalog, LoadError>) -> LoadOutcome {
        match result {
            Ok(catalog) => {
                let products = catalog.len();
                info!(products, "catalog loaded");
                self.state.catalog = Some(catalog);
                self.state.notice = None;
                LoadOutcome::Applied { products }
            }
            Err(e) if self.state.catalog.is_some() => {
                warn!(error = %e, "catalog refresh failed; keeping previous listing");
                LoadOutcome::FailedKeptListing
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.state.notice = Some(Notice { kind: e.kind(), message: e.to_string() });
                LoadOutcome::FailedFirstLoad
            }
        }
    }

    /// Run one full cycle inline: admit, load from `source`, apply.
    ///
    /// Returns `None` when the gate skipped the cycle.
    pub async fn run_cycle(&mut self, source: &dyn CatalogSource, trigger: Trigger, visible: bool) -> Option<LoadOutcome> {
        let Admission::Start(ticket) = self.begin_load(trigger, visible) else {
            return None;
        };
        let result = source.load().await;
        Some(self.finish_load(ticket, result))
    }
}
