//! Application state and transitions.
//!
//! AppState wraps the view controller with the UI-only state around it:
//! which input has focus, the text buffers behind the filter bar and the
//! page-number entry, the column cursor used for sorting from the keyboard,
//! help visibility and tile scroll. All transitions are pure.

use crate::model::{Column, KeyAction};
use crate::state::text_input::TextInput;
use crate::state::view_state::{ViewMode, ViewState};
use std::num::IntErrorKind;

// ===== InputFocus =====

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// Keys are dispatched through key bindings.
    #[default]
    Table,
    /// Characters edit the global filter.
    Filter,
    /// Characters edit the page number.
    PageEntry,
}

// ===== AppState =====

/// Root UI state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The tabular view controller: records, filter, sort, paginators.
    pub view: ViewState,

    /// Which input has keyboard focus.
    pub focus: InputFocus,

    /// Text backing the filter bar. Mirrors `view.global_filter()`.
    filter_input: TextInput,

    /// Text backing the page-number entry while it is open.
    page_input: TextInput,

    /// Column under the keyboard sort cursor.
    pub selected_column: Column,

    /// Whether the help overlay is showing.
    pub help_visible: bool,

    /// Vertical scroll of the tile list, in lines.
    pub tile_scroll: u16,
}

impl AppState {
    pub fn new(view: ViewState) -> Self {
        let filter_input = TextInput::with_text(view.global_filter());
        Self {
            view,
            focus: InputFocus::Table,
            filter_input,
            page_input: TextInput::default(),
            selected_column: Column::UserId,
            help_visible: false,
            tile_scroll: 0,
        }
    }

    /// Start with `text` already entered in the filter bar.
    pub fn with_filter(mut self, text: impl Into<String>) -> Self {
        self.filter_input = TextInput::with_text(text);
        self.sync_filter();
        self
    }

    pub fn filter_input(&self) -> &TextInput {
        &self.filter_input
    }

    pub fn page_input(&self) -> &TextInput {
        &self.page_input
    }

    // ----- filter bar -----

    pub fn focus_filter(&mut self) {
        self.focus = InputFocus::Filter;
        self.filter_input.move_end();
    }

    pub fn filter_insert(&mut self, ch: char) {
        self.filter_input.insert(ch);
        self.sync_filter();
    }

    pub fn filter_backspace(&mut self) {
        if self.filter_input.backspace() {
            self.sync_filter();
        }
    }

    pub fn filter_delete(&mut self) {
        if self.filter_input.delete() {
            self.sync_filter();
        }
    }

    pub fn filter_cursor_left(&mut self) {
        self.filter_input.move_left();
    }

    pub fn filter_cursor_right(&mut self) {
        self.filter_input.move_right();
    }

    pub fn clear_filter(&mut self) {
        self.filter_input.clear();
        self.sync_filter();
    }

    /// Filter text is applied on every edit; no debounce.
    fn sync_filter(&mut self) {
        self.view.set_global_filter(self.filter_input.text());
    }

    // ----- page-number entry -----

    /// Open the page entry pre-filled with the current 1-based page.
    pub fn open_page_entry(&mut self) {
        let current = self.view.page_info().index + 1;
        self.page_input = TextInput::with_text(current.to_string());
        self.focus = InputFocus::PageEntry;
    }

    pub fn page_entry_insert(&mut self, ch: char) {
        self.page_input.insert(ch);
        self.apply_page_entry();
    }

    pub fn page_entry_backspace(&mut self) {
        if self.page_input.backspace() {
            self.apply_page_entry();
        }
    }

    pub fn close_input(&mut self) {
        self.focus = InputFocus::Table;
    }

    /// Every edit navigates immediately; unparseable text is ignored.
    fn apply_page_entry(&mut self) {
        if let Some(index) = parse_page_entry(self.page_input.text()) {
            self.view.goto_page(index);
            self.tile_scroll = 0;
        }
    }

    // ----- sorting -----

    pub fn select_next_column(&mut self) {
        self.selected_column = self.selected_column.next();
    }

    pub fn select_prev_column(&mut self) {
        self.selected_column = self.selected_column.prev();
    }

    /// Header activation: moves the column cursor there and cycles its sort.
    pub fn activate_header(&mut self, column: Column) {
        self.selected_column = column;
        self.view.toggle_sort(column);
    }

    // ----- tiles -----

    pub fn scroll_tiles_up(&mut self) {
        self.tile_scroll = self.tile_scroll.saturating_sub(1);
    }

    pub fn scroll_tiles_down(&mut self) {
        self.tile_scroll = self.tile_scroll.saturating_add(1);
    }

    /// Keep the tile scroll within the rendered content.
    pub fn clamp_tile_scroll(&mut self, max: u16) {
        self.tile_scroll = self.tile_scroll.min(max);
    }

    // ----- key actions -----

    /// Apply a bound key action. Quit is handled by the caller.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::FirstPage => self.view.goto_first(),
            KeyAction::PrevPage => self.view.goto_previous(),
            KeyAction::NextPage => self.view.goto_next(),
            KeyAction::LastPage => self.view.goto_last(),
            KeyAction::GoToPage => self.open_page_entry(),
            KeyAction::NextPageSize => self.view.grow_page_size(),
            KeyAction::PrevPageSize => self.view.shrink_page_size(),
            KeyAction::NextColumn => self.select_next_column(),
            KeyAction::PrevColumn => self.select_prev_column(),
            KeyAction::CycleSort => {
                // Sorting only exists in the grid
                if self.view.mode() == ViewMode::Grid {
                    let column = self.selected_column;
                    self.activate_header(column);
                }
            }
            KeyAction::StartFilter => self.focus_filter(),
            KeyAction::ClearFilter => self.clear_filter(),
            KeyAction::ToggleMode => self.view.toggle_mode(),
            KeyAction::ShowGrid => self.view.set_mode(ViewMode::Grid),
            KeyAction::ShowTiles => self.view.set_mode(ViewMode::Tile),
            KeyAction::ScrollUp => self.scroll_tiles_up(),
            KeyAction::ScrollDown => self.scroll_tiles_down(),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => {}
        }

        if action.is_page_navigation()
            || matches!(
                action,
                KeyAction::NextPageSize
                    | KeyAction::PrevPageSize
                    | KeyAction::ToggleMode
                    | KeyAction::ShowGrid
                    | KeyAction::ShowTiles
            )
        {
            self.tile_scroll = 0;
        }
    }
}

/// Interpret page-number entry text as a 0-based page index.
///
/// Empty text means the first page. Numbers are 1-based; zero and negative
/// numbers map to the first page and large ones are clamped later by the
/// paginator, including ones too long to fit an integer. Anything else is
/// ignored (`None`).
pub fn parse_page_entry(text: &str) -> Option<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    match trimmed.parse::<i64>() {
        Ok(number) => Some(usize::try_from(number.saturating_sub(1)).unwrap_or(0)),
        // Too many digits for i64 still names a page; saturate like any large number
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(usize::MAX),
            IntErrorKind::NegOverflow => Some(0),
            _ => None,
        },
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
