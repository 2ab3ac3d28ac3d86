//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter_bar;
pub mod grid;
mod help;
pub mod layout;
pub mod pagination;
mod styles;
pub mod tiles;

pub use filter_bar::FilterBar;
pub use help::render_help_overlay;
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::source::{spawn_acquisition, PendingLoad, RecordSource};
use crate::state::{Acquisition, AppState, InputFocus, ViewMode, ViewState};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    /// In-flight acquisition; `None` once its result has been applied.
    pending: Option<PendingLoad>,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Where the records come from, shown in the header.
    source_label: String,
    /// Last rendered grid area (for header click detection)
    last_grid_area: Option<Rect>,
    /// Last rendered content area (for clamping tile scroll)
    last_content_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        app_state: AppState,
        pending: PendingLoad,
        palette: Palette,
        source_label: String,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            Some(pending),
            palette,
            source_label,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Input events redraw at once;
    /// the acquisition result is picked up on the next tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.poll_acquisition() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        pending: Option<PendingLoad>,
        palette: Palette,
        source_label: String,
    ) -> Self {
        Self {
            terminal,
            app_state,
            pending,
            key_bindings: KeyBindings::default(),
            palette,
            source_label,
            last_grid_area: None,
            last_content_area: None,
        }
    }

    /// Apply the acquisition result if it has arrived.
    ///
    /// Returns true if state changed and a redraw is needed.
    fn poll_acquisition(&mut self) -> bool {
        let Some(result) = self.pending.as_mut().and_then(PendingLoad::poll) else {
            return false;
        };
        self.pending = None;

        match result {
            Ok(records) => {
                info!(count = records.len(), "Records loaded");
                self.app_state.view.complete_acquisition(records);
            }
            Err(err) => {
                error!("Record acquisition failed: {err}");
                self.app_state.view.fail_acquisition(err.to_string());
            }
        }
        true
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Some terminals report releases too; act on presses and repeats only
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Special case: Ctrl+C should always quit, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Special case: Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // Text inputs capture their keys before key binding dispatch
        let consumed = match self.app_state.focus {
            InputFocus::Filter => self.handle_filter_key(key),
            InputFocus::PageEntry => self.handle_page_entry_key(key),
            InputFocus::Table => false,
        };
        if consumed {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay blocks everything except closing it and quitting
        if self.app_state.help_visible {
            match action {
                KeyAction::Help => self.app_state.help_visible = false,
                KeyAction::Quit => return true,
                _ => {}
            }
            return false;
        }

        if action == KeyAction::Quit {
            return true;
        }

        // Nothing to navigate until records are in
        if self.app_state.view.acquisition() != &Acquisition::Loaded && action != KeyAction::Help
        {
            return false;
        }

        debug!(?action, "Key action");
        self.app_state.handle_action(action);
        false
    }

    /// Keys while the filter bar has focus. Returns true if consumed.
    fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state.filter_insert(ch);
            }
            KeyCode::Backspace => self.app_state.filter_backspace(),
            KeyCode::Delete => self.app_state.filter_delete(),
            KeyCode::Left => self.app_state.filter_cursor_left(),
            KeyCode::Right => self.app_state.filter_cursor_right(),
            KeyCode::Enter | KeyCode::Esc => self.app_state.close_input(),
            _ => return false,
        }
        true
    }

    /// Keys while the page-number entry has focus. Returns true if consumed.
    fn handle_page_entry_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Only page numbers are typed; other characters are swallowed
                if ch.is_ascii_digit() || ch == '-' {
                    self.app_state.page_entry_insert(ch);
                }
            }
            KeyCode::Backspace => self.app_state.page_entry_backspace(),
            KeyCode::Enter | KeyCode::Esc => self.app_state.close_input(),
            _ => return false,
        }
        true
    }

    /// Handle a single mouse event
    ///
    /// Left-click on a grid header cycles that column's sort; the scroll
    /// wheel scrolls the tile list.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible
            || self.app_state.view.acquisition() != &Acquisition::Loaded
        {
            return;
        }

        match (mouse.kind, self.app_state.view.mode()) {
            (MouseEventKind::Down(MouseButton::Left), ViewMode::Grid) => {
                let clicked = self
                    .last_grid_area
                    .and_then(|area| grid::column_at(area, mouse.column, mouse.row));
                if let Some(column) = clicked {
                    debug!(?column, "Header clicked");
                    self.app_state.activate_header(column);
                }
            }
            (MouseEventKind::ScrollUp, ViewMode::Tile) => self.app_state.scroll_tiles_up(),
            (MouseEventKind::ScrollDown, ViewMode::Tile) => {
                self.app_state.scroll_tiles_down();
                self.clamp_tile_scroll();
            }
            _ => {}
        }
    }

    fn clamp_tile_scroll(&mut self) {
        if let Some(area) = self.last_content_area {
            let max = tiles::max_scroll(&self.app_state, area);
            self.app_state.clamp_tile_scroll(max);
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // Calculate areas before rendering (for mouse click detection)
        let size = self.terminal.size()?;
        let areas = layout::calculate_areas(Rect::new(0, 0, size.width, size.height));
        self.last_content_area = Some(areas.content);
        self.last_grid_area = (self.app_state.view.mode() == ViewMode::Grid
            && self.app_state.view.acquisition() == &Acquisition::Loaded)
            .then_some(areas.content);
        self.clamp_tile_scroll();

        let state = &self.app_state;
        let palette = &self.palette;
        let source = self.source_label.as_str();
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, palette, source);
            if state.help_visible {
                render_help_overlay(frame, palette);
            }
        })?;

        Ok(())
    }
}

/// Startup options carried from CLI/config into the TUI.
///
/// Keeps the separation of concerns:
/// - Domain state lives in `AppState` (pure)
/// - CLI parsing and config resolution happen in main.rs (impure)
/// - This struct bridges the gap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Initial grid page size.
    pub grid_page_size: usize,
    /// Initial tile page size.
    pub tile_page_size: usize,
    /// Initial view mode.
    pub mode: ViewMode,
    /// Initial global filter text, from `--filter`.
    pub filter: Option<String>,
    /// Color output.
    pub color: ColorConfig,
}

impl LaunchOptions {
    /// Initial UI state for these options, still loading.
    pub fn initial_state(&self) -> AppState {
        let mut view = ViewState::new(self.grid_page_size, self.tile_page_size);
        view.set_mode(self.mode);
        let state = AppState::new(view);
        match &self.filter {
            Some(text) => state.with_filter(text.clone()),
            None => state,
        }
    }
}

/// Initialize and run the TUI application for a record source
///
/// Starts the acquisition, sets up the terminal, runs the event loop, and
/// ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: RecordSource, options: LaunchOptions) -> Result<(), TuiError> {
    let source_label = source.describe();
    info!(source = %source_label, "Starting acquisition");
    let pending = spawn_acquisition(source);

    let palette = Palette::with_color_config(options.color);
    let mut app = match TuiApp::new(options.initial_state(), pending, palette, source_label) {
        Ok(app) => app,
        Err(err) => {
            // Raw mode may already be on
            let _ = restore_terminal();
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
