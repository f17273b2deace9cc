//! Catalog data sources
//!
//! A source supplies the ordered artwork list the storefront loads at
//! bootstrap. The only contract with the store: whatever `fetch` returns is
//! handed to `ReplaceArtworks`, and a failure becomes a `SetError` message.
//!
//! # Examples
//!
//! ```no_run
//! use libgallery::source::{CatalogSource, StaticCatalog};
//!
//! # async fn example() -> libgallery::Result<()> {
//! let source = StaticCatalog::new();
//! let artworks = source.fetch().await?;
//! println!("{} artworks from {}", artworks.len(), source.name());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::types::Artwork;

// Mock source is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Anything that can produce the storefront's artwork list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full collection, in display order
    async fn fetch(&self) -> Result<Vec<Artwork>>;

    /// Human-readable source name for logs
    fn name(&self) -> &str;
}

const SAMPLE_CATALOG: &str = include_str!("../../data/sample_catalog.json");

/// The built-in sample catalog.
///
/// Stands in for a real catalog service; no I/O happens here.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Parse the embedded sample records
    pub fn artworks() -> Result<Vec<Artwork>> {
        parse_catalog(SAMPLE_CATALOG)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<Vec<Artwork>> {
        Self::artworks()
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Decode a JSON array of artwork records
pub fn parse_catalog(json: &str) -> Result<Vec<Artwork>> {
    serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()).into())
}
