//! Global text filter.
//!
//! A record matches when any of its column values contains the query,
//! ignoring case. Hidden columns are searched too: visibility only decides
//! what is drawn, not what is matched.

use crate::data::column::ColumnId;
use crate::data::record::GroupingRecord;

/// Whether a query filters nothing (empty or whitespace only).
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Check a single record against a query.
pub fn matches(record: &GroupingRecord, query: &str) -> bool {
    if is_blank(query) {
        return true;
    }
    let needle = query.to_lowercase();
    matches_lowercase(record, &needle)
}

fn matches_lowercase(record: &GroupingRecord, needle: &str) -> bool {
    ColumnId::ALL
        .iter()
        .any(|column| record.value(*column).to_lowercase().contains(needle))
}

/// Reduce records to those matching `query`, keeping their order.
pub fn filter<'a>(records: &'a [GroupingRecord], query: &str) -> Vec<&'a GroupingRecord> {
    if is_blank(query) {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowercase(record, &needle))
        .collect()
}
