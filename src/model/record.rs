//! Post records and the grid's column definitions.
//!
//! Records are immutable once acquired. Columns describe how the grid reads,
//! labels, filters and orders a record field.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ===== Record =====

/// One post as delivered by the data source.
///
/// Field names follow the source's camelCase JSON (`userId`, `id`, `title`, `body`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Record {
    pub fn new(user_id: i64, id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

// ===== Column =====

/// Grid columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    UserId,
    Id,
    Title,
    Body,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; 4] = [Column::UserId, Column::Id, Column::Title, Column::Body];

    /// Header label shown above the column.
    pub fn header(self) -> &'static str {
        match self {
            Column::UserId => "User ID",
            Column::Id => "ID",
            Column::Title => "Title",
            Column::Body => "Body",
        }
    }

    /// Every column accepts header activation for sorting.
    pub fn is_sortable(self) -> bool {
        true
    }

    /// Read this column's value from a record.
    pub fn value(self, record: &Record) -> CellValue<'_> {
        match self {
            Column::UserId => CellValue::Int(record.user_id),
            Column::Id => CellValue::Int(record.id),
            Column::Title => CellValue::Text(&record.title),
            Column::Body => CellValue::Text(&record.body),
        }
    }

    /// Position in [`Column::ALL`].
    pub fn position(self) -> usize {
        match self {
            Column::UserId => 0,
            Column::Id => 1,
            Column::Title => 2,
            Column::Body => 3,
        }
    }

    /// Column at `position`, if any.
    pub fn at(position: usize) -> Option<Column> {
        Column::ALL.get(position).copied()
    }

    /// Next column to the right, wrapping to the first.
    pub fn next(self) -> Column {
        Column::ALL[(self.position() + 1) % Column::ALL.len()]
    }

    /// Previous column to the left, wrapping to the last.
    pub fn prev(self) -> Column {
        let len = Column::ALL.len();
        Column::ALL[(self.position() + len - 1) % len]
    }
}

// ===== CellValue =====

/// A borrowed cell value with the column's natural ordering.
///
/// Numeric cells compare numerically, text cells lexicographically.
/// Cells from the same column always share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Int(i64),
    Text(&'a str),
}

impl CellValue<'_> {
    /// Natural ordering within a column.
    pub fn natural_cmp(&self, other: &CellValue<'_>) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            // Mixed variants never occur within a column; numbers sort first.
            (CellValue::Int(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Int(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}
