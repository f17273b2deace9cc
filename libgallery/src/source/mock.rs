//! Mock catalog source for testing
//!
//! Configurable double that can succeed with a given list, fail with a
//! message, or take a while to answer. Call counts are shared so a test can
//! keep a handle after moving the source into a service.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{CatalogError, Result};
use crate::source::CatalogSource;
use crate::types::Artwork;

/// Configuration for mock source behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Source name (e.g., "mock-catalog")
    pub name: String,

    /// Artworks returned on success
    pub artworks: Vec<Artwork>,

    /// When set, `fetch` fails with `CatalogError::Unavailable(msg)`
    pub fail_with: Option<String>,

    /// Delay before answering (simulates network latency)
    pub delay: Duration,

    /// Number of times fetch has been called
    pub fetch_count: Arc<AtomicUsize>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            artworks: Vec::new(),
            fail_with: None,
            delay: Duration::from_millis(0),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Mock source for testing
pub struct MockCatalog {
    config: MockConfig,
}

impl MockCatalog {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Source that answers with `artworks`
    pub fn with_artworks(artworks: Vec<Artwork>) -> Self {
        Self::new(MockConfig {
            artworks,
            ..Default::default()
        })
    }

    /// Source whose fetch always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockConfig {
            fail_with: Some(message.into()),
            ..Default::default()
        })
    }

    /// Shared fetch counter
    pub fn fetch_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.config.fetch_count)
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch(&self) -> Result<Vec<Artwork>> {
        self.config.fetch_count.fetch_add(1, Ordering::SeqCst);

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match &self.config.fail_with {
            Some(message) => Err(CatalogError::Unavailable(message.clone()).into()),
            None => Ok(self.config.artworks.clone()),
        }
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;

    #[tokio::test]
    async fn test_mock_success_counts_calls() {
        let mock = MockCatalog::with_artworks(Vec::new());
        let count = mock.fetch_count();

        mock.fetch().await.unwrap();
        mock.fetch().await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockCatalog::failing("catalog offline");

        let err = mock.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            GalleryError::Catalog(CatalogError::Unavailable(ref msg)) if msg == "catalog offline"
        ));
    }

    #[tokio::test]
    async fn test_mock_delay() {
        let mock = MockCatalog::new(MockConfig {
            delay: Duration::from_millis(20),
            ..Default::default()
        });

        let start = std::time::Instant::now();
        mock.fetch().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
