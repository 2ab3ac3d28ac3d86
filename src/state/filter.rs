//! Global text filter.
//!
//! A record passes when any column's string representation contains the
//! query, compared case-insensitively. An empty query passes everything.

use crate::model::{Column, Record};

/// Indices of `records` that match `query`, in their original order.
pub fn apply(records: &[Record], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_lower(record, &query_lower))
        .map(|(index, _)| index)
        .collect()
}

fn matches_lower(record: &Record, query_lower: &str) -> bool {
    Column::ALL.iter().any(|column| {
        column
            .value(record)
            .to_string()
            .to_lowercase()
            .contains(query_lower)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new(1, 1, "Lorem ipsum", "first body"),
            Record::new(1, 2, "dolor sit", "amet"),
            Record::new(2, 13, "consectetur", "LOREM in body"),
            Record::new(3, 4, "adipiscing", "elit"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(apply(&records(), ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn matches_title_case_insensitively() {
        assert_eq!(apply(&records(), "lorem"), vec![0, 2]);
        assert_eq!(apply(&records(), "LoReM"), vec![0, 2]);
    }

    #[test]
    fn matches_numeric_fields_by_string_representation() {
        // id 13 and the "1" in user ids / ids
        assert_eq!(apply(&records(), "13"), vec![2]);
        assert_eq!(apply(&records(), "3"), vec![2, 3]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(apply(&records(), "zzz").is_empty());
    }

    #[test]
    fn empty_collection_yields_empty() {
        assert!(apply(&[], "anything").is_empty());
        assert!(apply(&[], "").is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        assert_eq!(apply(&records(), "sit "), Vec::<usize>::new());
        assert_eq!(apply(&records(), "dolor sit"), vec![1]);
    }
}
