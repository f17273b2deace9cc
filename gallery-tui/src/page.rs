//! Storefront page controller
//!
//! Owns the page's store and runs the bootstrap sequence:
//! `SetLoading(true)` on activation, then whatever the scheduled fetch
//! delivers (`ReplaceArtworks` or `SetError`). Activation happens once per
//! page; there is no retry and no re-fetch.

use std::time::Duration;

use libgallery::{CatalogAction, Store};

use crate::app::{reduce, Action, AppState};
use crate::services::{Bootstrap, CatalogService};

/// The single storefront page
pub struct StorefrontPage {
    store: Store<AppState, Action>,
    services: CatalogService,
    bootstrap: Option<Bootstrap>,
    activated: bool,
    delay: Duration,
}

impl StorefrontPage {
    pub fn new(state: AppState, services: CatalogService, delay: Duration) -> Self {
        Self {
            store: Store::new(state, reduce),
            services,
            bootstrap: None,
            activated: false,
            delay,
        }
    }

    /// First activation: request loading state and schedule the fetch.
    ///
    /// Later calls do nothing.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;

        self.store.dispatch(CatalogAction::SetLoading(true).into());
        self.bootstrap = Some(self.services.bootstrap(self.delay));
    }

    /// Apply any catalog result that has arrived. Returns true if one did.
    pub fn pump(&mut self) -> bool {
        let Some(bootstrap) = self.bootstrap.as_ref() else {
            return false;
        };

        // Checked before draining: the task sends before it finishes
        let finished = bootstrap.is_finished();
        let arrived: Vec<CatalogAction> = std::iter::from_fn(|| bootstrap.try_recv()).collect();

        if finished {
            self.bootstrap = None;
        }

        let changed = !arrived.is_empty();
        for action in arrived {
            self.store.dispatch(action.into());
        }
        changed
    }

    /// Dispatch a UI action
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Fetch scheduled and not yet applied?
    pub fn is_bootstrapping(&self) -> bool {
        self.bootstrap.is_some()
    }

    /// Cancel any pending fetch. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(bootstrap) = self.bootstrap.take() {
            bootstrap.cancel();
        }
    }
}

impl Drop for StorefrontPage {
    fn drop(&mut self) {
        self.teardown();
    }
}
