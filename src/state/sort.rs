//! Single-column sort.
//!
//! Ascending order is stable. Descending order is the exact reverse of the
//! ascending order, ties included, so flipping direction reverses the rows.

use crate::model::{Column, Record};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header marker appended to a sorted column's label.
    pub fn marker(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▽",
        }
    }
}

/// The active sort: one column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortDirective {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort state after activating `column`'s header.
///
/// Same column cycles unsorted → ascending → descending → unsorted.
/// A different column replaces the current directive, starting ascending.
pub fn cycle(current: Option<SortDirective>, column: Column) -> Option<SortDirective> {
    match current {
        Some(directive) if directive.column == column => match directive.direction {
            SortDirection::Ascending => Some(SortDirective::descending(column)),
            SortDirection::Descending => None,
        },
        _ => Some(SortDirective::ascending(column)),
    }
}

/// Reorder `rows` (indices into `records`) according to `directive`.
///
/// `None` leaves `rows` untouched.
pub fn apply(records: &[Record], rows: &mut [usize], directive: Option<SortDirective>) {
    let Some(directive) = directive else {
        return;
    };

    let column = directive.column;
    // slice::sort_by is stable
    rows.sort_by(|&a, &b| {
        column
            .value(&records[a])
            .natural_cmp(&column.value(&records[b]))
    });

    if directive.direction == SortDirection::Descending {
        rows.reverse();
    }
}
