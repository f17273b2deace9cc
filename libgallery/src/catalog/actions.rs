//! Catalog actions
//!
//! One variant per store operation, each carrying its typed payload.

use crate::types::{Artwork, FilterUpdate};

/// Updates understood by the catalog reducer
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Swap the whole collection; clears error and loading
    ReplaceArtworks(Vec<Artwork>),

    /// Set or clear the selected artwork, no membership check
    SelectArtwork(Option<Artwork>),

    /// Set the loading flag verbatim
    SetLoading(bool),

    /// Record a failure message; forces loading off
    SetError(String),

    /// Shallow-merge the given filter fields
    UpdateFilters(FilterUpdate),

    /// Reset filters to defaults
    ClearFilters,
}
