//! Explicit state container
//!
//! A `Store` owns one state value and the pure reducer that advances it.
//! It is created by the top-level application context and handed to
//! whoever needs to read or dispatch; there is no process-wide instance.
//!
//! # Example
//!
//! ```
//! use libgallery::catalog::{self, CatalogAction};
//!
//! let mut store = catalog::store();
//! store.dispatch(CatalogAction::SetLoading(true));
//! assert!(store.state().loading);
//! ```

use std::fmt::Debug;

/// Reducer signature: consume the previous state, return the next one
pub type Reducer<S, A> = fn(S, A) -> S;

/// Single-writer state container.
///
/// Every dispatch replaces the whole state. `&mut self` on `dispatch`
/// keeps writers on one thread of control.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    dispatched: u64,
}

impl<S, A> Store<S, A>
where
    S: Default,
    A: Debug,
{
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            dispatched: 0,
        }
    }

    /// Apply `action` through the reducer
    pub fn dispatch(&mut self, action: A) {
        self.dispatched += 1;
        tracing::debug!(seq = self.dispatched, action = ?action, "dispatch");

        let previous = std::mem::take(&mut self.state);
        self.state = (self.reducer)(previous, action);
    }

    /// Current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Consume the store, keeping the final state
    pub fn into_state(self) -> S {
        self.state
    }
}
