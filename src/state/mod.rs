//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod filter;
pub mod paginator;
pub mod sort;
pub mod text_input;
pub mod view_state;

// Re-export for convenience
pub use app_state::{parse_page_entry, AppState, InputFocus};
pub use paginator::{PageInfo, Paginator, GRID_PAGE_SIZES, TILE_PAGE_SIZES};
pub use sort::{SortDirection, SortDirective};
pub use text_input::TextInput;
pub use view_state::{Acquisition, ViewMode, ViewState};
