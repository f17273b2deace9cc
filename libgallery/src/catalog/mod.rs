//! Artwork catalog store
//!
//! The catalog slice holds everything a storefront page reads:
//! - Actions: the closed set of updates (`CatalogAction`)
//! - State: artworks, selection, loading/error flags, filters
//! - Reducer: pure function (CatalogState, CatalogAction) -> CatalogState
//!
//! There are no selectors here. Computing a filtered view is left to
//! whoever consumes the state.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::CatalogAction;
pub use reducer::reduce;
pub use state::CatalogState;

use crate::store::Store;

/// Store specialised to the catalog slice
pub type CatalogStore = Store<CatalogState, CatalogAction>;

/// Create a catalog store with default state
pub fn store() -> CatalogStore {
    Store::new(CatalogState::default(), reduce)
}
