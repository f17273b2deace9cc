//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;
use libgallery::CatalogAction;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick, drives the loading spinner
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move card focus forward
    FocusNext,

    /// Move card focus back
    FocusPrev,

    /// Move card focus one grid row down
    FocusDown,

    /// Move card focus one grid row up
    FocusUp,

    /// Detail action on the focused card
    OpenDetail,

    /// Close the detail overlay
    CloseDetail,

    // === Catalog ===
    /// Store update, forwarded to the catalog reducer
    Catalog(CatalogAction),
}

impl From<CatalogAction> for Action {
    fn from(action: CatalogAction) -> Self {
        Action::Catalog(action)
    }
}
