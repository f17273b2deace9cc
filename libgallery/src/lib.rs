//! Gallery - digital-art marketplace storefront core
//!
//! This library holds the pieces any storefront front end shares: the
//! artwork catalog store, catalog sources, configuration, logging and
//! display formatting.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod source;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogAction, CatalogState, CatalogStore};
pub use config::Config;
pub use error::{CatalogError, ConfigError, GalleryError, Result};
pub use format::PriceFormat;
pub use source::{CatalogSource, StaticCatalog};
pub use store::Store;
pub use types::{Artwork, FilterCriteria, FilterUpdate, PriceRange};
