//! Pure reducer function for state transitions
//!
//! `(AppState, Action) -> AppState`. No I/O happens here; fetching the
//! catalog is the page controller's job and its results come back in as
//! `Action::Catalog`.

use super::actions::Action;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libgallery::catalog;
use libgallery::CatalogAction;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No file or network I/O
/// - No mutations (returns new state)
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),

        Action::Tick if state.catalog.loading => AppState {
            spinner_frame: state.spinner_frame.wrapping_add(1),
            ..state
        },
        Action::Tick => state,

        Action::Resize(width, _) => AppState {
            viewport_width: width,
            ..state
        },

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusNext => {
            let last = state.catalog.artworks.len().saturating_sub(1);
            AppState {
                focused: (state.focused + 1).min(last),
                ..state
            }
        }

        Action::FocusPrev => AppState {
            focused: state.focused.saturating_sub(1),
            ..state
        },

        Action::FocusDown => {
            let columns = state.grid_columns();
            let len = state.catalog.artworks.len();
            let last_row = len.saturating_sub(1) / columns;
            // Partial last row: land on its final card
            let focused = if state.focused / columns < last_row {
                (state.focused + columns).min(len - 1)
            } else {
                state.focused
            };
            AppState { focused, ..state }
        }

        Action::FocusUp => {
            let columns = state.grid_columns();
            let focused = if state.focused >= columns {
                state.focused - columns
            } else {
                state.focused
            };
            AppState { focused, ..state }
        }

        Action::OpenDetail => {
            let focused = state.catalog.artworks.get(state.focused).cloned();
            match focused {
                Some(artwork) => {
                    reduce(state, CatalogAction::SelectArtwork(Some(artwork)).into())
                }
                None => state,
            }
        }

        Action::CloseDetail => reduce(state, CatalogAction::SelectArtwork(None).into()),

        // === Catalog ===
        Action::Catalog(action) => {
            let catalog = catalog::reduce(state.catalog, action);
            // Keep focus on a card that still exists
            let focused = state
                .focused
                .min(catalog.artworks.len().saturating_sub(1));
            AppState {
                catalog,
                focused,
                ..state
            }
        }
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return reduce(state, Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return reduce(state, Action::Quit),

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.help_visible => return reduce(state, Action::HideHelp),
        (KeyCode::Esc, _) if state.catalog.selected.is_some() => {
            return reduce(state, Action::CloseDetail)
        }

        _ => {}
    }

    // Grid keys only apply to a loaded page with nothing on top of it
    if state.catalog.loading || state.overlay_open() {
        return state;
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab => reduce(state, Action::FocusNext),
        KeyCode::Left | KeyCode::BackTab => reduce(state, Action::FocusPrev),
        KeyCode::Down => reduce(state, Action::FocusDown),
        KeyCode::Up => reduce(state, Action::FocusUp),
        KeyCode::Enter => reduce(state, Action::OpenDetail),
        _ => state,
    }
}
