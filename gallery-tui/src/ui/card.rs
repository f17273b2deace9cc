//! Artwork card widget
//!
//! One card per artwork: title with category badge, artist, a two-line
//! description, price with the detail action, and tags.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::styled;
use crate::app::AppState;
use libgallery::format::{truncate_chars, truncate_width};
use libgallery::types::Artwork;

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: u16 = 7;

pub(super) fn render_card(
    frame: &mut Frame,
    area: Rect,
    artwork: &Artwork,
    focused: bool,
    state: &AppState,
) {
    let border_style = if focused {
        styled(
            state,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", artwork.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", artwork.category),
                styled(state, Style::default().fg(Color::Black).bg(Color::Gray)),
            ))
            .right_aligned(),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Artist
            Constraint::Length(2), // Description
            Constraint::Length(1), // Price + detail action
            Constraint::Length(1), // Tags
        ])
        .split(inner);

    let artist = Paragraph::new(format!("by {}", artwork.artist))
        .style(styled(state, Style::default().fg(Color::Gray)));
    frame.render_widget(artist, rows[0]);

    // Two wrapped lines; one cell per line is lost when a wide char wraps early
    let line_cells = usize::from(rows[1].width);
    let description = truncate_width(
        &truncate_chars(&artwork.description, state.config.description_max_chars),
        line_cells.saturating_sub(1) * 2,
    );
    frame.render_widget(
        Paragraph::new(description).wrap(Wrap { trim: true }),
        rows[1],
    );

    let price = Line::from(vec![
        Span::styled(
            state.config.price_format.format(artwork.price),
            styled(
                state,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ),
        Span::raw("  "),
        Span::styled(
            "[詳細を見る]",
            if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(price), rows[2]);

    let tags = Paragraph::new(Line::from(tag_line(&artwork.tags)))
        .style(styled(state, Style::default().fg(Color::DarkGray)));
    frame.render_widget(tags, rows[3]);
}

/// Tags as `#tag` spans, in order, duplicates kept
pub(super) fn tag_line(tags: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(format!("#{}", tag)));
    }
    spans
}
