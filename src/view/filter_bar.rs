//! Filter bar widget for the global filter input.

use super::styles::Palette;
use crate::state::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the filter is empty and unfocused.
pub const PLACEHOLDER: &str = "Search...";

/// Filter bar widget.
///
/// Shows the cursor while focused, the placeholder while empty and idle.
pub struct FilterBar<'a> {
    input: &'a TextInput,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> FilterBar<'a> {
    pub fn new(input: &'a TextInput, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }

    fn line(&self) -> Line<'a> {
        if !self.focused {
            if self.input.is_empty() {
                return Line::from(Span::styled(PLACEHOLDER, self.palette.muted));
            }
            return Line::from(self.input.text());
        }

        let (before, after) = self.input.split_at_cursor();
        let mut rest = after.chars();
        let under_cursor = rest
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());

        Line::from(vec![
            Span::raw(before),
            Span::styled(under_cursor, self.palette.cursor),
            Span::raw(rest.as_str()),
        ])
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.palette.focus_border
        } else {
            self.palette.muted
        };
        let title = if self.focused {
            " Filter (Enter/Esc to finish) "
        } else {
            " Filter (/) "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);

        Paragraph::new(self.line()).block(block).render(area, buf);
    }
}
