//! Catalog service adapter for the TUI
//!
//! Bridges async catalog sources and the synchronous event loop.
//!
//! # Architecture
//!
//! - `CatalogService`: owns the catalog source and a tokio runtime
//! - `Bootstrap`: a scheduled, cancellable fetch. After the delay it sends
//!   exactly one `CatalogAction` (`ReplaceArtworks` or `SetError`) over a
//!   crossbeam channel the event loop drains
//!
//! Dropping a `Bootstrap` aborts its task, so a torn-down page is never
//! written to.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use gallery_tui::services::CatalogService;
//! use libgallery::StaticCatalog;
//!
//! # fn example() -> gallery_tui::error::Result<()> {
//! let services = CatalogService::new(Arc::new(StaticCatalog::new()))?;
//! let bootstrap = services.bootstrap(Duration::from_millis(500));
//!
//! // In event loop, check for the result
//! if let Some(action) = bootstrap.try_recv() {
//!     // Dispatch action
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};
use libgallery::{CatalogAction, CatalogSource};
use tokio::task::JoinHandle;

use crate::error::{Result, TuiError};

/// Service handle for TUI operations
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    runtime: tokio::runtime::Runtime,
}

impl CatalogService {
    /// Create a new service around `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(source: Arc<dyn CatalogSource>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("gallery-catalog")
            .enable_time()
            .build()
            .map_err(|e| TuiError::Application(format!("Failed to start runtime: {}", e)))?;

        Ok(Self { source, runtime })
    }

    /// Name of the wrapped source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Schedule a catalog fetch after `delay`
    ///
    /// Returns immediately. The outcome arrives on the handle as a single
    /// `CatalogAction`: `ReplaceArtworks` on success, `SetError` on failure.
    pub fn bootstrap(&self, delay: Duration) -> Bootstrap {
        let (tx, rx) = bounded(1);
        let source = Arc::clone(&self.source);

        tracing::info!(
            source = source.name(),
            delay_ms = delay.as_millis() as u64,
            "Scheduling catalog bootstrap"
        );

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let action = match source.fetch().await {
                Ok(artworks) => {
                    tracing::info!(count = artworks.len(), "Catalog loaded");
                    CatalogAction::ReplaceArtworks(artworks)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Catalog fetch failed");
                    CatalogAction::SetError(e.to_string())
                }
            };

            if tx.send(action).is_err() {
                // Receiver dropped, page is gone
                tracing::debug!("Bootstrap result discarded");
            }
        });

        Bootstrap { rx, task }
    }
}

/// Handle to a scheduled catalog fetch
pub struct Bootstrap {
    rx: Receiver<CatalogAction>,
    task: JoinHandle<()>,
}

impl Bootstrap {
    /// Non-blocking check for the fetch outcome
    pub fn try_recv(&self) -> Option<CatalogAction> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the fetch outcome
    pub fn recv_timeout(&self, timeout: Duration) -> Option<CatalogAction> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Has the task run to completion (or been cancelled)?
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Abort the pending fetch; a no-op once it has completed
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            tracing::info!("Cancelling catalog bootstrap");
            self.task.abort();
        }
    }
}

impl Drop for Bootstrap {
    fn drop(&mut self) {
        self.cancel();
    }
}
