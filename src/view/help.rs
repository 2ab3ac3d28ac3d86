//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("g/Home", "First page"),
            ("p/←", "Previous page"),
            ("n/→", "Next page"),
            ("G/End", "Last page"),
            (":", "Go to page (Enter/Esc to finish)"),
            ("+/-", "Larger/smaller page size"),
        ],
    ),
    (
        "Filter & Sort",
        &[
            ("/", "Edit filter (Enter/Esc to finish)"),
            ("c", "Clear filter"),
            ("Tab/Shift+Tab", "Select column"),
            ("s/Enter", "Cycle sort: none, ▲, ▽"),
            ("click header", "Cycle sort on that column"),
        ],
    ),
    (
        "View",
        &[
            ("v", "Toggle grid/tiles"),
            ("1", "Grid"),
            ("2", "Tiles"),
            ("j/k ↓/↑", "Scroll tiles"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Width of the key column in help lines.
const KEY_COLUMN_WIDTH: usize = 16;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focus_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, palette.title)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), palette.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
