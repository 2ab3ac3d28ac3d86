//! Tile rendering: one card per record, raw order, scrollable.

use super::styles::Palette;
use crate::model::Record;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines for a page of tiles: title, body, `User ID: x | ID: y`, then a gap.
pub fn tile_lines(records: &[Record], palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(records.len() * 4);
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            record.title.clone(),
            palette.tile_title,
        )));
        lines.extend(record.body.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::from(Span::styled(
            format!("User ID: {} | ID: {}", record.user_id, record.id),
            palette.muted,
        )));
    }
    lines
}

/// Rows `lines` occupy once wrapped to `width` columns.
///
/// Counts display width per line, so word wrapping may need a row or two
/// more than this for long words near the edge.
pub fn content_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn tiles_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Tiles ")
        .border_style(palette.muted)
}

/// Largest useful scroll offset for the current tile page in `area`.
pub fn max_scroll(state: &AppState, area: Rect) -> u16 {
    let palette = Palette::default();
    let inner = tiles_block(&palette).inner(area);
    let lines = tile_lines(state.view.tiles(), &palette);
    content_height(&lines, inner.width).saturating_sub(inner.height)
}

/// Render the current tile page into `area`.
pub fn render_tiles(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let tiles = state.view.tiles();
    let block = tiles_block(palette);

    if tiles.is_empty() {
        let placeholder =
            Paragraph::new(Line::from(Span::styled("No records", palette.muted))).block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let paragraph = Paragraph::new(tile_lines(tiles, palette))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.tile_scroll, 0));
    frame.render_widget(paragraph, area);
}
