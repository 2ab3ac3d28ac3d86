//! Tabular view controller.
//!
//! `ViewState` owns the record collection, acquisition status, view mode,
//! global filter, sort directive and the two paginators. Every mutation keeps
//! the page indices in range; rendering reads the derived pages through
//! [`ViewState::grid_rows`] and [`ViewState::tiles`].
//!
//! Grid and tile modes deliberately differ in scope: the grid pages through
//! the filtered and sorted rows, while tiles page through the raw collection.

use crate::model::{Column, Record};
use crate::state::filter;
use crate::state::paginator::{self, PageInfo, Paginator};
use crate::state::sort::{self, SortDirective};
use tracing::{debug, warn};

// ===== Acquisition =====

/// Progress of the one-time record load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    /// Waiting for the source to answer.
    Loading,
    /// Records are stored.
    Loaded,
    /// The source failed; the reason is shown in place of the data.
    Failed(String),
}

// ===== ViewMode =====

/// Presentation layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Tile,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Tile,
            ViewMode::Tile => ViewMode::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Tile => "tiles",
        }
    }
}

// ===== ViewState =====

/// Presentation state for the record collection.
#[derive(Debug, Clone)]
pub struct ViewState {
    records: Vec<Record>,
    acquisition: Acquisition,
    mode: ViewMode,
    global_filter: String,
    sort: Option<SortDirective>,
    grid_page: Paginator,
    tile_page: Paginator,
    /// Filtered then sorted indices into `records`.
    grid_order: Vec<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(paginator::DEFAULT_PAGE_SIZE, paginator::DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Fresh state: loading, grid mode, no filter, no sort, first pages.
    pub fn new(grid_page_size: usize, tile_page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            acquisition: Acquisition::Loading,
            mode: ViewMode::Grid,
            global_filter: String::new(),
            sort: None,
            grid_page: Paginator::new(grid_page_size),
            tile_page: Paginator::new(tile_page_size),
            grid_order: Vec::new(),
        }
    }

    // ----- acquisition -----

    /// Store the acquired records. Only the first completion takes effect.
    pub fn complete_acquisition(&mut self, records: Vec<Record>) {
        if self.acquisition != Acquisition::Loading {
            warn!("Ignoring records delivered after acquisition already completed");
            return;
        }
        debug!(count = records.len(), "Records acquired");
        self.records = records;
        self.acquisition = Acquisition::Loaded;
        self.rederive();
        self.tile_page.clamp(self.records.len());
    }

    /// Record a failed load. Only applies while still loading.
    pub fn fail_acquisition(&mut self, reason: impl Into<String>) {
        if self.acquisition != Acquisition::Loading {
            return;
        }
        let reason = reason.into();
        warn!(%reason, "Record acquisition failed");
        self.acquisition = Acquisition::Failed(reason);
    }

    pub fn acquisition(&self) -> &Acquisition {
        &self.acquisition
    }

    pub fn is_loading(&self) -> bool {
        self.acquisition == Acquisition::Loading
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    // ----- mode -----

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    // ----- filter -----

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Replace the global filter and re-derive the grid rows.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.global_filter {
            return;
        }
        self.global_filter = text;
        self.rederive();
    }

    // ----- sort -----

    pub fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    /// Replace the sort directive outright.
    ///
    /// A changed directive sends the grid back to its first page.
    pub fn set_sort(&mut self, directive: Option<SortDirective>) {
        if directive != self.sort {
            self.grid_page.goto_first();
        }
        self.sort = directive;
        self.rederive();
    }

    /// Header activation on `column`: none → ascending → descending → none.
    pub fn toggle_sort(&mut self, column: Column) {
        if !column.is_sortable() {
            return;
        }
        self.set_sort(sort::cycle(self.sort, column));
    }

    // ----- grid pagination -----

    /// Number of rows after filtering.
    pub fn grid_len(&self) -> usize {
        self.grid_order.len()
    }

    pub fn grid_page(&self) -> &Paginator {
        &self.grid_page
    }

    pub fn grid_info(&self) -> PageInfo {
        self.grid_page.info(self.grid_len())
    }

    /// Records on the current grid page, filtered and sorted.
    pub fn grid_rows(&self) -> Vec<&Record> {
        self.grid_page
            .slice(&self.grid_order)
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Every filtered and sorted record, ignoring pagination.
    pub fn grid_all_rows(&self) -> impl Iterator<Item = &Record> {
        self.grid_order.iter().map(|&index| &self.records[index])
    }

    pub fn grid_goto_first(&mut self) {
        self.grid_page.goto_first();
    }

    pub fn grid_goto_previous(&mut self) {
        self.grid_page.goto_previous();
    }

    pub fn grid_goto_next(&mut self) {
        self.grid_page.goto_next(self.grid_len());
    }

    pub fn grid_goto_last(&mut self) {
        self.grid_page.goto_last(self.grid_len());
    }

    pub fn grid_goto_page(&mut self, index: usize) {
        self.grid_page.goto_page(index, self.grid_len());
    }

    /// Change the grid page size.
    ///
    /// The reset check compares against the unfiltered record count, not the
    /// filtered row count: the index returns to the first page only when it
    /// lies beyond `ceil(records / size)`. A final clamp against the filtered
    /// rows keeps the index in range when a filter is active.
    pub fn set_grid_page_size(&mut self, size: usize) {
        self.grid_page.resize(size);
        let unfiltered_pages = self.records.len().div_ceil(self.grid_page.size());
        if self.grid_page.index() >= unfiltered_pages {
            self.grid_page.goto_first();
        }
        self.grid_page.clamp(self.grid_len());
    }

    // ----- tile pagination -----

    pub fn tile_page(&self) -> &Paginator {
        &self.tile_page
    }

    pub fn tile_info(&self) -> PageInfo {
        self.tile_page.info(self.records.len())
    }

    /// Records on the current tile page, unfiltered and unsorted.
    pub fn tiles(&self) -> &[Record] {
        self.tile_page.slice(&self.records)
    }

    pub fn tile_goto_first(&mut self) {
        self.tile_page.goto_first();
    }

    pub fn tile_goto_previous(&mut self) {
        self.tile_page.goto_previous();
    }

    pub fn tile_goto_next(&mut self) {
        self.tile_page.goto_next(self.records.len());
    }

    pub fn tile_goto_last(&mut self) {
        self.tile_page.goto_last(self.records.len());
    }

    pub fn tile_goto_page(&mut self, index: usize) {
        self.tile_page.goto_page(index, self.records.len());
    }

    pub fn set_tile_page_size(&mut self, size: usize) {
        self.tile_page.set_page_size(size, self.records.len());
    }

    // ----- mode-routed pagination -----

    /// Pagination summary for the active mode.
    pub fn page_info(&self) -> PageInfo {
        match self.mode {
            ViewMode::Grid => self.grid_info(),
            ViewMode::Tile => self.tile_info(),
        }
    }

    /// Page sizes offered for the active mode.
    pub fn page_size_options(&self) -> &'static [usize] {
        match self.mode {
            ViewMode::Grid => paginator::GRID_PAGE_SIZES,
            ViewMode::Tile => paginator::TILE_PAGE_SIZES,
        }
    }

    pub fn goto_first(&mut self) {
        match self.mode {
            ViewMode::Grid => self.grid_goto_first(),
            ViewMode::Tile => self.tile_goto_first(),
        }
    }

    pub fn goto_previous(&mut self) {
        match self.mode {
            ViewMode::Grid => self.grid_goto_previous(),
            ViewMode::Tile => self.tile_goto_previous(),
        }
    }

    pub fn goto_next(&mut self) {
        match self.mode {
            ViewMode::Grid => self.grid_goto_next(),
            ViewMode::Tile => self.tile_goto_next(),
        }
    }

    pub fn goto_last(&mut self) {
        match self.mode {
            ViewMode::Grid => self.grid_goto_last(),
            ViewMode::Tile => self.tile_goto_last(),
        }
    }

    pub fn goto_page(&mut self, index: usize) {
        match self.mode {
            ViewMode::Grid => self.grid_goto_page(index),
            ViewMode::Tile => self.tile_goto_page(index),
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        match self.mode {
            ViewMode::Grid => self.set_grid_page_size(size),
            ViewMode::Tile => self.set_tile_page_size(size),
        }
    }

    /// Step to the next larger offered page size for the active mode.
    pub fn grow_page_size(&mut self) {
        let current = self.page_info().size;
        self.set_page_size(paginator::next_size(self.page_size_options(), current));
    }

    /// Step to the next smaller offered page size for the active mode.
    pub fn shrink_page_size(&mut self) {
        let current = self.page_info().size;
        self.set_page_size(paginator::prev_size(self.page_size_options(), current));
    }

    // ----- derivation -----

    fn rederive(&mut self) {
        let mut order = filter::apply(&self.records, &self.global_filter);
        sort::apply(&self.records, &mut order, self.sort);
        self.grid_order = order;
        self.grid_page.clamp(self.grid_order.len());
    }
}

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
