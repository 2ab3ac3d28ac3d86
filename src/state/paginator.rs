//! Page window over an ordered sequence.
//!
//! A `Paginator` holds only `{index, size}`; the sequence length is passed
//! to every operation that depends on it, so one paginator can follow a
//! sequence whose length changes (e.g. when the filter changes).
//! Out-of-range requests clamp instead of failing.

/// Page sizes offered in grid mode.
pub const GRID_PAGE_SIZES: &[usize] = &[5, 10, 20, 30, 40, 50, 100];

/// Page sizes offered in tile mode.
pub const TILE_PAGE_SIZES: &[usize] = &[5, 10, 20, 30, 40, 50];

/// Initial page size for both modes.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` items, never less than one.
pub fn page_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1)).max(1)
}

/// Current page position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    index: usize,
    size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// First page with `size` items per page. A zero size is treated as one.
    pub fn new(size: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        (self.index + 1) * self.size < len
    }

    /// Range of item positions on the current page.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.index * self.size).min(len);
        let end = ((self.index + 1) * self.size).min(len);
        start..end
    }

    /// Items on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn goto_first(&mut self) {
        self.index = 0;
    }

    pub fn goto_previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn goto_next(&mut self, len: usize) {
        if self.can_go_next(len) {
            self.index += 1;
        }
    }

    pub fn goto_last(&mut self, len: usize) {
        self.index = self.page_count(len) - 1;
    }

    /// Jump to page `index`, clamped to the last page.
    pub fn goto_page(&mut self, index: usize, len: usize) {
        self.index = index.min(self.page_count(len) - 1);
    }

    /// Change the page size without touching the index.
    ///
    /// Callers follow up with [`Paginator::clamp`] or their own index policy.
    pub fn resize(&mut self, size: usize) {
        self.size = size.max(1);
    }

    /// Change the page size and clamp the index to the last valid page.
    pub fn set_page_size(&mut self, size: usize, len: usize) {
        self.resize(size);
        self.clamp(len);
    }

    /// Pull the index back onto the last page if it points past it.
    pub fn clamp(&mut self, len: usize) {
        let last = self.page_count(len) - 1;
        if self.index > last {
            self.index = last;
        }
    }

    /// Snapshot of the navigation state for rendering.
    pub fn info(&self, len: usize) -> PageInfo {
        PageInfo {
            index: self.index,
            size: self.size,
            page_count: self.page_count(len),
            total: len,
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(len),
        }
    }
}

/// Read-only pagination summary consumed by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub index: usize,
    pub size: usize,
    pub page_count: usize,
    pub total: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl PageInfo {
    /// `Page X of Y`, 1-based.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.index + 1, self.page_count)
    }
}

/// Next larger size in `options` after `current`, saturating at the largest.
pub fn next_size(options: &[usize], current: usize) -> usize {
    options
        .iter()
        .copied()
        .find(|&size| size > current)
        .or_else(|| options.last().copied())
        .unwrap_or(current)
}

/// Next smaller size in `options` before `current`, saturating at the smallest.
pub fn prev_size(options: &[usize], current: usize) -> usize {
    options
        .iter()
        .rev()
        .copied()
        .find(|&size| size < current)
        .or_else(|| options.first().copied())
        .unwrap_or(current)
}
