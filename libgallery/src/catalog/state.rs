//! Catalog state
//!
//! All transitions go through the reducer (see `reducer.rs`).

use crate::types::{Artwork, FilterCriteria};

/// Aggregate state consumed by the presentation layer.
///
/// `loading` and `error` are independent; both may be set at once.
/// `selected` need not be a member of `artworks`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Known artworks, in source order
    pub artworks: Vec<Artwork>,

    /// Currently selected artwork
    pub selected: Option<Artwork>,

    /// Data request in flight?
    pub loading: bool,

    /// Last recorded failure
    pub error: Option<String>,

    /// Filter criteria (stored, not evaluated)
    pub filters: FilterCriteria,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }
}
