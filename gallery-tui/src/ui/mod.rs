//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

mod card;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use libgallery::types::Artwork;

pub use card::CARD_HEIGHT;

const SPINNER_UNICODE: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the application UI
///
/// While the catalog is loading only the progress indicator is drawn.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if state.catalog.loading {
        render_loading(frame, area, state);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Hero
            Constraint::Min(CARD_HEIGHT + 1), // Featured grid
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_hero(frame, chunks[1], state);
    render_featured(frame, chunks[2], state);
    render_status_line(frame, chunks[3], state);
    render_footer(frame, chunks[4], state);

    if let Some(ref artwork) = state.catalog.selected {
        render_detail_overlay(frame, area, artwork, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Grid columns for a terminal width (1 / 2 / 3 like the md and lg breakpoints)
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// Apply `style` only when colors are on
fn styled(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default()
    }
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let spinner = if state.config.unicode_enabled {
        SPINNER_UNICODE[state.spinner_frame % SPINNER_UNICODE.len()]
    } else {
        SPINNER_ASCII[state.spinner_frame % SPINNER_ASCII.len()]
    };

    let box_area = centered_rect(50, 30, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            spinner,
            styled(state, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "作品を読み込み中...",
            styled(state, Style::default().fg(Color::Gray)),
        )),
    ];

    let loading = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(loading, box_area);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let brand = Paragraph::new(Span::styled(
        "Gallery",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, halves[0]);

    let nav = Paragraph::new(Line::from(vec![
        Span::raw("ホーム"),
        Span::raw("   "),
        Span::raw("作品一覧"),
        Span::raw("   "),
        Span::raw("アーティスト"),
    ]))
    .style(styled(state, Style::default().fg(Color::Gray)))
    .alignment(Alignment::Right);
    frame.render_widget(nav, halves[1]);
}

fn render_hero(frame: &mut Frame, area: Rect, state: &AppState) {
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "デジタルアートマーケットプレイス",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "才能あるアーティストのオリジナル作品を発見しよう",
            styled(state, Style::default().fg(Color::Gray)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ 作品を探す ]",
            styled(state, Style::default().fg(Color::White).bg(Color::Blue)),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(hero, area);
}

fn render_featured(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut constraints = vec![Constraint::Length(1)];
    if state.catalog.error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let heading = Paragraph::new(Span::styled(
        "注目の作品",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    if let Some(ref error) = state.catalog.error {
        let banner = Paragraph::new(format!("エラー: {}", error))
            .style(styled(state, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)));
        frame.render_widget(banner, chunks[1]);
    }

    let grid_area = chunks[chunks.len() - 1];
    if state.catalog.artworks.is_empty() {
        let empty = Paragraph::new("作品がありません")
            .style(styled(state, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center);
        frame.render_widget(empty, grid_area);
        return;
    }

    render_grid(frame, grid_area, state);
}

/// Lay cards out in rows, scrolled so the focused card is visible
fn render_grid(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = columns_for_width(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let focused_row = state.focused / columns;
    let first_row = (focused_row + 1).saturating_sub(visible_rows);

    let rows = state
        .catalog
        .artworks
        .chunks(columns)
        .enumerate()
        .skip(first_row)
        .take(visible_rows);

    for (offset, (row_index, row)) in rows.enumerate() {
        let y = area.y + (offset as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, artwork) in row.iter().enumerate() {
            let index = row_index * columns + col;
            card::render_card(frame, cells[col], artwork, index == state.focused, state);
        }
    }
}

/// Read-only view of the stored filter criteria
fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let filters = &state.catalog.filters;
    let format = &state.config.price_format;
    let search = if filters.search_term.is_empty() {
        "-"
    } else {
        filters.search_term.as_str()
    };

    let line = Line::from(vec![
        Span::raw(format!("カテゴリ: {}", filters.category)),
        Span::raw(" | "),
        Span::raw(format!(
            "価格: {} - {}",
            format.format(filters.price_range.min),
            format.format(filters.price_range.max)
        )),
        Span::raw(" | "),
        Span::raw(format!("検索: {}", search)),
        Span::raw(" | "),
        Span::styled(
            "←→: 移動  Enter: 詳細  F1: ヘルプ  q: 終了",
            styled(state, Style::default().fg(Color::Gray)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "Gallery",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "© 2024 Gallery. All rights reserved.",
            styled(state, Style::default().fg(Color::Gray)),
        )),
    ])
    .block(Block::default().borders(Borders::TOP))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

fn render_detail_overlay(frame: &mut Frame, area: Rect, artwork: &Artwork, state: &AppState) {
    let popup_area = centered_rect(70, 70, area);
    let price = state.config.price_format.format(artwork.price);

    let mut text = vec![
        Line::from(Span::styled(
            artwork.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("by {}", artwork.artist)),
        Line::from(""),
        Line::from(artwork.description.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::raw("価格: "),
            Span::styled(
                price,
                styled(state, Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            ),
        ]),
        Line::from(format!("カテゴリ: {}", artwork.category)),
        Line::from(format!("制作日: {}", artwork.created_at)),
        Line::from(format!("画像: {}", artwork.image_url)),
    ];
    if !artwork.tags.is_empty() {
        text.push(Line::from(card::tag_line(&artwork.tags)));
    }
    text.push(Line::from(""));
    text.push(Line::from("Esc: 閉じる"));

    let detail = Paragraph::new(text)
        .block(
            Block::default()
                .title(" 作品詳細 ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(detail, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  ←/→ Tab     - Move between artworks"),
        Line::from("  ↑/↓         - Move between rows"),
        Line::from("  Enter       - Show details"),
        Line::from("  Esc         - Close details / help"),
        Line::from("  F1          - Toggle help"),
        Line::from("  q, Ctrl+C   - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
