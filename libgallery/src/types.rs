//! Core types for Gallery

use serde::{Deserialize, Serialize};

/// Category value meaning "no category narrowing"
pub const ALL_CATEGORIES: &str = "all";

/// Lower bound of the default price filter
pub const DEFAULT_PRICE_MIN: u64 = 0;

/// Upper bound of the default price filter
pub const DEFAULT_PRICE_MAX: u64 = 100_000;

/// A purchasable piece in the catalog.
///
/// Artworks arrive wholesale from a catalog source and are never edited
/// individually; the store only ever swaps the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
    pub artist: String,
    pub category: String,
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Inclusive price bounds.
///
/// `min <= max` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }
}

/// Narrowing parameters a shopper intends to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub category: String,
    pub price_range: PriceRange,
    pub search_term: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            price_range: PriceRange::default(),
            search_term: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Shallow merge: fields present in `update` replace ours, the rest stay.
    pub fn merge(self, update: FilterUpdate) -> Self {
        Self {
            category: update.category.unwrap_or(self.category),
            price_range: update.price_range.unwrap_or(self.price_range),
            search_term: update.search_term.unwrap_or(self.search_term),
        }
    }
}

/// Partial filter update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub search_term: Option<String>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}
