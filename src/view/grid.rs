//! Grid rendering: the filtered, sorted, paginated records as a table.

use super::constants::{COLUMN_SPACING, COLUMN_WIDTHS};
use super::styles::Palette;
use crate::model::{Column, Record};
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the current grid page into `area`.
pub fn render_grid(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let view = &state.view;
    let title = format!(" Grid ({} of {}) ", view.grid_len(), view.records().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(palette.muted);

    let rows: Vec<Row> = view.grid_rows().into_iter().map(record_row).collect();
    let is_empty = rows.is_empty();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header_row(state, palette))
        .column_spacing(COLUMN_SPACING)
        .block(block);
    frame.render_widget(table, area);

    if is_empty {
        let message = if view.records().is_empty() {
            "No records"
        } else {
            "No matching records"
        };
        let body = body_area(area);
        let placeholder = Paragraph::new(Line::from(Span::styled(message, palette.muted)))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, body);
    }
}

fn header_row(state: &AppState, palette: &Palette) -> Row<'static> {
    let sort = state.view.sort();
    let cells = Column::ALL.iter().map(|&column| {
        let style = if column == state.selected_column {
            palette.selected_column
        } else {
            palette.column_header
        };
        let mut spans = vec![Span::styled(column.header(), style)];
        if let Some(directive) = sort.filter(|d| d.column == column) {
            spans.push(Span::styled(directive.direction.marker(), palette.sort_marker));
        }
        Cell::from(Line::from(spans))
    });
    Row::new(cells)
}

fn record_row(record: &Record) -> Row<'static> {
    Row::new(
        Column::ALL
            .iter()
            .map(|column| Cell::from(single_line(&column.value(record).to_string()))),
    )
}

/// Grid cells are one line high; embedded newlines become spaces.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Inner area of the grid block.
fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Inner area below the header row.
fn body_area(area: Rect) -> Rect {
    let inner = inner_area(area);
    Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    }
}

/// Screen rectangles of each header cell, in `Column::ALL` order.
pub fn header_cells(area: Rect) -> Vec<(Column, Rect)> {
    let inner = inner_area(area);
    let header = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let cells = Layout::horizontal(COLUMN_WIDTHS)
        .spacing(COLUMN_SPACING)
        .split(header);
    Column::ALL.iter().copied().zip(cells.iter().copied()).collect()
}

/// Which column header, if any, sits at screen position (`x`, `y`).
pub fn column_at(area: Rect, x: u16, y: u16) -> Option<Column> {
    header_cells(area)
        .into_iter()
        .find(|(_, cell)| {
            y >= cell.y && y < cell.y + cell.height && x >= cell.x && x < cell.x + cell.width
        })
        .map(|(column, _)| column)
}
