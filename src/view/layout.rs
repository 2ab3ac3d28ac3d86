//! Screen layout.
//!
//! Pure layout logic: splits the frame into header, filter bar, content,
//! pagination bar and status bar, and dispatches to the widget renderers.
//! While records are loading or after a failed load, the space between
//! header and status bar shows the acquisition state instead.

use super::constants::{
    FILTER_BAR_HEIGHT, HEADER_HEIGHT, PAGINATION_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::filter_bar::FilterBar;
use super::styles::Palette;
use super::{grid, pagination, tiles};
use crate::state::{Acquisition, AppState, InputFocus, ViewMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Rectangles for each screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub filter: Rect,
    pub content: Rect,
    pub pagination: Rect,
    pub status: Rect,
}

impl ScreenAreas {
    /// Everything between header and status bar.
    pub fn body(&self) -> Rect {
        self.filter.union(self.pagination)
    }
}

pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        filter: chunks[1],
        content: chunks[2],
        pagination: chunks[3],
        status: chunks[4],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette, source: &str) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(
        Paragraph::new(header_line(state, palette, source)),
        areas.header,
    );

    match state.view.acquisition() {
        Acquisition::Loading => render_loading(frame, areas.body(), palette),
        Acquisition::Failed(reason) => render_failed(frame, areas.body(), reason, palette),
        Acquisition::Loaded => {
            frame.render_widget(
                FilterBar::new(
                    state.filter_input(),
                    state.focus == InputFocus::Filter,
                    palette,
                ),
                areas.filter,
            );
            match state.view.mode() {
                ViewMode::Grid => grid::render_grid(frame, areas.content, state, palette),
                ViewMode::Tile => tiles::render_tiles(frame, areas.content, state, palette),
            }
            pagination::render_pagination(frame, areas.pagination, state, palette);
        }
    }

    frame.render_widget(Paragraph::new(status_line(state, palette)), areas.status);
}

/// `Posts │ grid │ sort: Title ▲ │ <source>`
pub fn header_line(state: &AppState, palette: &Palette, source: &str) -> Line<'static> {
    let separator = || Span::styled(" │ ", palette.muted);
    let sort = match state.view.sort() {
        Some(directive) => format!(
            "sort: {}{}",
            directive.column.header(),
            directive.direction.marker()
        ),
        None => "sort: none".to_string(),
    };

    Line::from(vec![
        Span::styled("Posts", palette.title),
        separator(),
        Span::raw(state.view.mode().label()),
        separator(),
        Span::raw(sort),
        separator(),
        Span::styled(source.to_string(), palette.muted),
    ])
}

/// Key hints for the focused input.
pub fn status_line(state: &AppState, palette: &Palette) -> Line<'static> {
    let hints: &[(&str, &str)] = if state.help_visible {
        &[("Esc/?", "close help"), ("q", "quit")]
    } else {
        match (state.focus, state.view.acquisition()) {
            (InputFocus::Filter, _) => &[("Enter/Esc", "done"), ("←/→", "move cursor")],
            (InputFocus::PageEntry, _) => &[("Enter/Esc", "done"), ("0-9", "page number")],
            (InputFocus::Table, Acquisition::Loaded) => match state.view.mode() {
                ViewMode::Grid => &[
                    ("q", "quit"),
                    ("?", "help"),
                    ("/", "filter"),
                    ("Tab", "column"),
                    ("s", "sort"),
                    ("←/→", "page"),
                    (":", "go to"),
                    ("+/-", "size"),
                    ("v", "tiles"),
                ],
                ViewMode::Tile => &[
                    ("q", "quit"),
                    ("?", "help"),
                    ("←/→", "page"),
                    (":", "go to"),
                    ("+/-", "size"),
                    ("j/k", "scroll"),
                    ("v", "grid"),
                ],
            },
            (InputFocus::Table, _) => &[("q", "quit"), ("?", "help")],
        }
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(*key, palette.key));
        spans.push(Span::styled(format!(" {action}  "), palette.muted));
    }
    Line::from(spans)
}

fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette) {
    let loading = Paragraph::new(Line::from(Span::styled("Loading...", palette.muted)))
        .alignment(Alignment::Center);
    frame.render_widget(loading, centered_line(area, 1));
}

fn render_failed(frame: &mut Frame, area: Rect, reason: &str, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("Failed to load records", palette.error)),
        Line::default(),
        Line::from(reason.to_string()),
        Line::default(),
        Line::from(Span::styled("Press q to quit", palette.muted)),
    ];
    let failed = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(failed, centered_line(area, 5));
}

/// A band of `height` rows vertically centered in `area`.
fn centered_line(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::state::{SortDirective, ViewState};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn areas_stack_vertically_without_gaps() {
        let areas = calculate_areas(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.filter.y, 1);
        assert_eq!(areas.content.y, 1 + FILTER_BAR_HEIGHT);
        assert_eq!(areas.status.y, 23);
        assert_eq!(areas.pagination.y, 22);
        assert_eq!(areas.content.height, 24 - 1 - FILTER_BAR_HEIGHT - 1 - 1);
        assert_eq!(areas.body(), Rect::new(0, 1, 80, 22));
    }

    #[test]
    fn header_shows_mode_sort_and_source() {
        let mut view = ViewState::default();
        view.complete_acquisition(vec![]);
        view.set_sort(Some(SortDirective::ascending(Column::Title)));
        let state = AppState::new(view);

        let line = header_line(&state, &Palette::default(), "posts.json");
        insta::assert_snapshot!(plain(&line), @"Posts │ grid │ sort: Title ▲ │ posts.json");
    }

    #[test]
    fn status_hints_follow_focus() {
        let mut view = ViewState::default();
        view.complete_acquisition(vec![]);
        let mut state = AppState::new(view);

        assert!(plain(&status_line(&state, &Palette::default())).contains("filter"));

        state.focus_filter();
        let text = plain(&status_line(&state, &Palette::default()));
        assert!(text.starts_with("Enter/Esc done"), "got: {text}");
    }

    #[test]
    fn centered_line_stays_inside_small_areas() {
        let area = Rect::new(0, 5, 10, 3);
        assert_eq!(centered_line(area, 1), Rect::new(0, 6, 10, 1));
        assert_eq!(centered_line(area, 9), area);
    }
}
