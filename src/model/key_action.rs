//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Go back one page. Default: p/←
    PrevPage,
    /// Advance one page. Default: n/→
    NextPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Open the page-number entry. Default: :
    GoToPage,
    /// Switch to the next larger page size. Default: +
    NextPageSize,
    /// Switch to the next smaller page size. Default: -
    PrevPageSize,

    // Sorting
    /// Move the column cursor right. Default: Tab
    NextColumn,
    /// Move the column cursor left. Default: Shift+Tab
    PrevColumn,
    /// Cycle sort on the selected column (none → asc → desc → none). Default: s/Enter
    CycleSort,

    // Filter
    /// Focus the global filter input. Default: /
    StartFilter,
    /// Clear the global filter. Default: c
    ClearFilter,

    // View mode
    /// Toggle between grid and tiles. Default: v
    ToggleMode,
    /// Show the grid. Default: 1
    ShowGrid,
    /// Show the tiles. Default: 2
    ShowTiles,

    // Tile scrolling
    /// Scroll the tile list up one line. Default: k/↑
    ScrollUp,
    /// Scroll the tile list down one line. Default: j/↓
    ScrollDown,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action changes the active page of the current mode.
    pub fn is_page_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::FirstPage | KeyAction::PrevPage | KeyAction::NextPage | KeyAction::LastPage
        )
    }
}
