//! Rendering tests against ratatui's TestBackend

use gallery_tui::app::{reduce, Action, AppState, UiConfig};
use gallery_tui::ui;
use libgallery::types::{Artwork, FilterUpdate};
use libgallery::{CatalogAction, StaticCatalog};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn draw(state: &AppState, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");
    terminal.backend().buffer().clone()
}

/// Buffer rows as plain strings
fn rows(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen_contains(buffer: &Buffer, needle: &str) -> bool {
    rows(buffer).iter().any(|row| row.contains(needle))
}

/// Rows with blanks removed; wide characters leave padding cells behind
fn compact_rows(buffer: &Buffer) -> Vec<String> {
    rows(buffer)
        .into_iter()
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
        .collect()
}

fn screen_contains_compact(buffer: &Buffer, needle: &str) -> bool {
    compact_rows(buffer).iter().any(|row| row.contains(needle))
}

fn plain_state() -> AppState {
    AppState::with_config(UiConfig {
        colors_enabled: false,
        unicode_enabled: false,
        ..UiConfig::default()
    })
}

fn loaded() -> AppState {
    let artworks = StaticCatalog::artworks().expect("sample catalog");
    reduce(plain_state(), CatalogAction::ReplaceArtworks(artworks).into())
}

#[test]
fn test_prices_are_grouped() {
    let buffer = draw(&loaded(), 120, 40);

    assert!(screen_contains(&buffer, "¥15,000"));
    assert!(screen_contains(&buffer, "¥25,000"));
    assert!(screen_contains(&buffer, "¥18,000"));
}

#[test]
fn test_loading_shows_only_indicator() {
    let state = reduce(loaded(), CatalogAction::SetLoading(true).into());
    let buffer = draw(&state, 120, 40);

    assert!(screen_contains(&buffer, "|"));
    assert!(!screen_contains(&buffer, "Gallery"));
    assert!(!screen_contains(&buffer, "¥15,000"));
}

#[test]
fn test_spinner_advances_with_ticks() {
    let state = reduce(plain_state(), CatalogAction::SetLoading(true).into());
    let state = reduce(state, Action::Tick);
    let buffer = draw(&state, 80, 24);

    assert!(screen_contains(&buffer, "/"));
}

#[test]
fn test_page_chrome() {
    let buffer = draw(&loaded(), 120, 40);

    assert!(screen_contains(&buffer, "Gallery"));
    assert!(screen_contains(&buffer, "2024 Gallery. All rights reserved."));
}

#[test]
fn test_error_banner_rendered() {
    let state = reduce(
        plain_state(),
        CatalogAction::SetError("Catalog unavailable".to_string()).into(),
    );
    let buffer = draw(&state, 120, 40);

    assert!(screen_contains(&buffer, "Catalog unavailable"));
}

#[test]
fn test_cards_in_store_order() {
    let artwork = |id: &str, price: u64| Artwork {
        id: id.to_string(),
        title: format!("Work-{}", id),
        description: "Plain description".to_string(),
        image_url: "/img".to_string(),
        price,
        artist: "Someone".to_string(),
        category: "misc".to_string(),
        created_at: "2024-03-01".to_string(),
        tags: vec!["one".to_string(), "two".to_string()],
    };
    let state = reduce(
        plain_state(),
        CatalogAction::ReplaceArtworks(vec![artwork("B", 1000), artwork("A", 2000)]).into(),
    );

    let buffer = draw(&state, 120, 40);
    let row = rows(&buffer)
        .into_iter()
        .find(|r| r.contains("Work-B"))
        .expect("card row");

    let b = row.find("Work-B").expect("B");
    let a = row.find("Work-A").expect("A");
    assert!(b < a);
    assert!(screen_contains(&buffer, "by Someone"));
    assert!(screen_contains(&buffer, "#one #two"));
    assert!(screen_contains(&buffer, "¥1,000"));
}

#[test]
fn test_detail_overlay_shows_selection() {
    let state = reduce(loaded(), Action::FocusNext);
    let state = reduce(state, Action::OpenDetail);
    let buffer = draw(&state, 120, 40);

    assert!(screen_contains(&buffer, "2024-01-20"));
    assert!(screen_contains(&buffer, "/api/placeholder/400/300"));
}

#[test]
fn test_narrow_terminal_single_column() {
    let buffer = draw(&loaded(), 50, 40);

    // Only one card per row: prices land on different rows
    let price_rows = rows(&buffer)
        .iter()
        .filter(|r| r.contains("¥1") || r.contains("¥2"))
        .count();
    assert!(price_rows >= 2);
}

#[test]
fn test_grid_scrolls_to_focused_card() {
    let state = reduce(loaded(), Action::FocusNext);
    let state = reduce(state, Action::FocusNext);
    assert_eq!(state.focused, 2);

    // Room for a single one-column row of cards
    let buffer = draw(&state, 50, 20);

    assert!(screen_contains_compact(&buffer, "森の静寂"));
    assert!(!screen_contains_compact(&buffer, "夕焼けの詩"));
    assert!(screen_contains(&buffer, "¥18,000"));
}

#[test]
fn test_empty_catalog_message() {
    let state = reduce(plain_state(), CatalogAction::ReplaceArtworks(vec![]).into());
    let buffer = draw(&state, 120, 40);

    assert!(screen_contains_compact(&buffer, "作品がありません"));
}

#[test]
fn test_status_line_shows_stored_filters() {
    let buffer = draw(&loaded(), 120, 40);
    assert!(screen_contains_compact(&buffer, "カテゴリ:all|価格:¥0-¥100,000|検索:-"));

    let update = FilterUpdate::new().category("nature").search_term("森");
    let state = reduce(loaded(), CatalogAction::UpdateFilters(update).into());
    let buffer = draw(&state, 120, 40);

    assert!(screen_contains_compact(
        &buffer,
        "カテゴリ:nature|価格:¥0-¥100,000|検索:森"
    ));
    // Filters are displayed only; every card is still drawn
    assert!(screen_contains(&buffer, "¥15,000"));
    assert!(screen_contains(&buffer, "¥25,000"));
}

#[test]
fn test_wide_description_keeps_ellipsis_in_card() {
    let artwork = Artwork {
        id: "wide".to_string(),
        title: "Wide".to_string(),
        description: "美".repeat(40),
        image_url: "/img".to_string(),
        price: 1000,
        artist: "Someone".to_string(),
        category: "misc".to_string(),
        created_at: "2024-03-01".to_string(),
        tags: vec![],
    };
    let state = reduce(
        plain_state(),
        CatalogAction::ReplaceArtworks(vec![artwork]).into(),
    );

    // Three columns: 38 cells per card line
    let buffer = draw(&state, 120, 40);

    assert!(screen_contains(&buffer, "…"));
}
