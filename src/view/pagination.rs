//! Pagination bar: `<< < Page X of Y > >>`, page entry and page size.

use super::styles::Palette;
use crate::state::{AppState, InputFocus, PageInfo};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SEPARATOR: &str = "  │  ";

/// Build the pagination line for the active mode.
pub fn pagination_line(state: &AppState, palette: &Palette) -> Line<'static> {
    let info = state.view.page_info();
    let control = |label: &'static str, enabled: bool| {
        let style = if enabled {
            palette.control
        } else {
            palette.control_disabled
        };
        Span::styled(label, style)
    };

    let mut spans = vec![
        control("<<", info.can_go_previous),
        Span::raw(" "),
        control("<", info.can_go_previous),
        Span::raw(format!(" {} ", info.label())),
        control(">", info.can_go_next),
        Span::raw(" "),
        control(">>", info.can_go_next),
        Span::styled(SEPARATOR, palette.muted),
        Span::raw("Go to page: "),
    ];
    spans.extend(page_entry_spans(state, &info, palette));
    spans.push(Span::styled(SEPARATOR, palette.muted));
    spans.push(Span::raw(format!("Show {}", info.size)));
    spans.push(Span::styled(SEPARATOR, palette.muted));
    spans.push(Span::styled(
        format!("{} records", info.total),
        palette.muted,
    ));

    Line::from(spans)
}

fn page_entry_spans(state: &AppState, info: &PageInfo, palette: &Palette) -> Vec<Span<'static>> {
    if state.focus != InputFocus::PageEntry {
        return vec![Span::styled(
            (info.index + 1).to_string(),
            palette.muted,
        )];
    }

    let (before, after) = state.page_input().split_at_cursor();
    let mut rest = after.chars();
    let under_cursor = rest
        .next()
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    vec![
        Span::raw(before.to_string()),
        Span::styled(under_cursor, palette.cursor),
        Span::raw(rest.as_str().to_string()),
    ]
}

pub fn render_pagination(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    frame.render_widget(Paragraph::new(pagination_line(state, palette)), area);
}
