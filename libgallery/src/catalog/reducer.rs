//! Pure reducer for catalog state
//!
//! `(CatalogState, CatalogAction) -> CatalogState`. No I/O, no failure modes:
//! errors are data, recorded through `SetError`.

use super::actions::CatalogAction;
use super::state::CatalogState;
use crate::types::FilterCriteria;

/// Apply one action, returning the next state.
///
/// Deterministic, and every operation always succeeds.
pub fn reduce(state: CatalogState, action: CatalogAction) -> CatalogState {
    match action {
        CatalogAction::ReplaceArtworks(artworks) => CatalogState {
            artworks,
            loading: false,
            error: None,
            ..state
        },

        CatalogAction::SelectArtwork(selected) => CatalogState { selected, ..state },

        CatalogAction::SetLoading(loading) => CatalogState { loading, ..state },

        CatalogAction::SetError(message) => CatalogState {
            error: Some(message),
            loading: false,
            ..state
        },

        CatalogAction::UpdateFilters(update) => {
            let filters = state.filters.merge(update);
            CatalogState { filters, ..state }
        }

        CatalogAction::ClearFilters => CatalogState {
            filters: FilterCriteria::default(),
            ..state
        },
    }
}
