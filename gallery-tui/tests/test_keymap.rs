//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is mapped to the right state changes
//! through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gallery_tui::app::{reduce, Action, AppState};
use libgallery::{CatalogAction, StaticCatalog};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

fn loaded_state() -> AppState {
    let artworks = StaticCatalog::artworks().expect("sample catalog");
    reduce(
        AppState::default(),
        CatalogAction::ReplaceArtworks(artworks).into(),
    )
}

#[test]
fn test_q_quits_application() {
    let state = press(AppState::default(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_application() {
    let key = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let state = reduce(AppState::default(), Action::Key(key));
    assert!(state.should_quit);
}

#[test]
fn test_q_quits_while_loading() {
    let state = reduce(
        AppState::default(),
        CatalogAction::SetLoading(true).into(),
    );
    let state = press(state, KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = press(AppState::default(), KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_hides_help() {
    let state = press(AppState::default(), KeyCode::F(1));
    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn test_arrows_move_focus() {
    let state = press(loaded_state(), KeyCode::Right);
    assert_eq!(state.focused, 1);

    let state = press(state, KeyCode::Tab);
    assert_eq!(state.focused, 2);

    let state = press(state, KeyCode::Left);
    assert_eq!(state.focused, 1);
}

#[test]
fn test_up_down_move_by_row() {
    let state = reduce(loaded_state(), Action::Resize(80, 24));

    let state = press(state, KeyCode::Down);
    assert_eq!(state.focused, 2);

    let state = press(state, KeyCode::Up);
    assert_eq!(state.focused, 0);
}

#[test]
fn test_up_down_single_column() {
    let state = reduce(loaded_state(), Action::Resize(40, 24));

    let state = press(state, KeyCode::Down);
    assert_eq!(state.focused, 1);

    let state = press(state, KeyCode::Up);
    assert_eq!(state.focused, 0);
}

#[test]
fn test_arrows_ignored_while_loading() {
    let state = reduce(loaded_state(), CatalogAction::SetLoading(true).into());
    let state = press(state, KeyCode::Right);
    assert_eq!(state.focused, 0);
}

#[test]
fn test_enter_opens_detail_and_esc_closes() {
    let state = press(loaded_state(), KeyCode::Down);
    let state = press(state, KeyCode::Enter);

    let selected = state.catalog.selected.clone().expect("selection");
    assert_eq!(selected.id, "2");
    assert!(state.overlay_open());

    let state = press(state, KeyCode::Esc);
    assert!(state.catalog.selected.is_none());
    assert_eq!(state.catalog.artworks.len(), 3);
}

#[test]
fn test_focus_keys_blocked_by_detail_overlay() {
    let state = press(loaded_state(), KeyCode::Enter);
    let state = press(state, KeyCode::Right);

    assert_eq!(state.focused, 0);
    assert_eq!(state.catalog.selected.map(|a| a.id), Some("1".to_string()));
}

#[test]
fn test_unbound_key_is_noop() {
    let before = loaded_state();
    let after = press(before.clone(), KeyCode::Char('x'));

    assert_eq!(after.catalog, before.catalog);
    assert_eq!(after.focused, before.focused);
    assert!(!after.should_quit);
}
