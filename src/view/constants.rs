//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values so the renderer
//! and mouse hit-testing agree on where things are.

use ratatui::layout::Constraint;
use std::time::Duration;

/// Height of the header line (title, mode, sort, source).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the filter bar in lines (border + input).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Gap between grid columns.
pub const COLUMN_SPACING: u16 = 1;

/// Grid column widths, in `Column::ALL` order.
pub const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Length(9),
    Constraint::Length(5),
    Constraint::Fill(2),
    Constraint::Fill(3),
];

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout. Acquisition results are picked up on each tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);
