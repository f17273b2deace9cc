//! End-to-end tests for the page bootstrap sequence
//!
//! Drives `StorefrontPage` the way the event loop does: activate once,
//! then pump until the scheduled catalog fetch lands.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use gallery_tui::app::{Action, AppState};
use gallery_tui::services::CatalogService;
use gallery_tui::StorefrontPage;
use libgallery::source::mock::{MockCatalog, MockConfig};
use libgallery::StaticCatalog;

/// Pump until `condition` holds or `timeout` passes
fn pump_until<F>(page: &mut StorefrontPage, mut condition: F, timeout: Duration) -> bool
where
    F: FnMut(&StorefrontPage) -> bool,
{
    let start = Instant::now();
    while start.elapsed() < timeout {
        page.pump();
        if condition(&*page) {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

fn page_with(source: MockCatalog, delay: Duration) -> StorefrontPage {
    let services = CatalogService::new(Arc::new(source)).expect("service");
    StorefrontPage::new(AppState::default(), services, delay)
}

#[test]
fn test_bootstrap_loads_sample_catalog() {
    let services = CatalogService::new(Arc::new(StaticCatalog::new())).expect("service");
    let mut page = StorefrontPage::new(AppState::default(), services, Duration::from_millis(50));

    // Initial state
    assert!(page.state().catalog.artworks.is_empty());
    assert!(!page.state().catalog.loading);

    // Activation requests loading, data not there yet
    page.activate();
    assert!(page.state().catalog.loading);
    assert!(page.state().catalog.artworks.is_empty());
    assert!(page.is_bootstrapping());

    // After the delay the catalog replaces the collection and clears loading
    let loaded = pump_until(
        &mut page,
        |p| !p.state().catalog.artworks.is_empty(),
        Duration::from_secs(3),
    );
    assert!(loaded, "catalog never arrived");

    let catalog = &page.state().catalog;
    assert!(!catalog.loading);
    assert!(catalog.error.is_none());
    let ids: Vec<&str> = catalog.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    assert!(pump_until(&mut page, |p| !p.is_bootstrapping(), Duration::from_secs(1)));
}

#[test]
fn test_activate_runs_once() {
    let source = MockCatalog::new(MockConfig::default());
    let fetches = source.fetch_count();
    let mut page = page_with(source, Duration::ZERO);

    page.activate();
    assert!(pump_until(&mut page, |p| !p.state().catalog.loading, Duration::from_secs(3)));

    page.activate();
    assert!(!page.state().catalog.loading);
    thread::sleep(Duration::from_millis(50));
    page.pump();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_fetch_records_error() {
    let mut page = page_with(MockCatalog::failing("catalog offline"), Duration::ZERO);

    page.activate();
    let settled = pump_until(
        &mut page,
        |p| p.state().catalog.error.is_some(),
        Duration::from_secs(3),
    );
    assert!(settled);

    let catalog = &page.state().catalog;
    assert!(!catalog.loading);
    assert!(catalog.artworks.is_empty());
    assert!(catalog
        .error
        .as_deref()
        .is_some_and(|e| e.contains("catalog offline")));
}

#[test]
fn test_teardown_cancels_pending_fetch() {
    let source = MockCatalog::new(MockConfig::default());
    let fetches = source.fetch_count();
    let mut page = page_with(source, Duration::from_millis(200));

    page.activate();
    page.teardown();
    assert!(!page.is_bootstrapping());

    thread::sleep(Duration::from_millis(400));
    assert!(!page.pump());

    // Still in the loading state it was torn down in; nothing wrote to it
    assert!(page.state().catalog.loading);
    assert!(page.state().catalog.artworks.is_empty());
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn test_dropping_page_cancels_pending_fetch() {
    let source = MockCatalog::new(MockConfig::default());
    let fetches = source.fetch_count();

    {
        let mut page = page_with(source, Duration::from_millis(100));
        page.activate();
    }

    thread::sleep(Duration::from_millis(300));
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn test_ui_actions_during_loading_keep_loading() {
    let mut page = page_with(MockCatalog::new(MockConfig::default()), Duration::from_millis(200));
    page.activate();

    page.dispatch(Action::Tick);
    page.dispatch(Action::ShowHelp);

    assert!(page.state().catalog.loading);
    assert_eq!(page.state().spinner_frame, 1);
}
