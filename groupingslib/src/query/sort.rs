//! Row ordering.
//!
//! Sorting is stable: rows that compare equal on every active key keep the
//! order they had after filtering, in both directions. Comparison is
//! locale-naive so results are the same everywhere.

use std::cmp::Ordering;

use crate::data::record::GroupingRecord;

use super::options::{SortDirection, Sorting, SortingFn};

/// Order rows by the active sort keys. Returns the input when unsorted.
pub fn sort<'a>(
    rows: Vec<&'a GroupingRecord>,
    sorting: &Sorting,
    sorting_fn: SortingFn,
) -> Vec<&'a GroupingRecord> {
    if sorting.is_empty() {
        return rows;
    }

    // Lowercase once per row and key instead of once per comparison.
    let mut keyed: Vec<(Vec<String>, &'a GroupingRecord)> = rows
        .into_iter()
        .map(|record| {
            let keys = sorting
                .keys()
                .iter()
                .map(|key| record.value(key.column).to_lowercase())
                .collect();
            (keys, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        sorting
            .keys()
            .iter()
            .zip(a.iter().zip(b.iter()))
            .map(|(key, (a, b))| {
                let ordering = compare_values(a, b, sorting_fn);
                match key.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Compare two already-lowercased values with the given sorting function.
pub fn compare_values(a: &str, b: &str, sorting_fn: SortingFn) -> Ordering {
    match sorting_fn {
        SortingFn::Text => a.cmp(b),
        SortingFn::Alphanumeric => compare_alphanumeric(a, b),
    }
}

/// Natural comparison: the strings are split into digit and non-digit runs,
/// digit runs compare by numeric value, everything else byte-wise.
pub fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (is_digits(x), is_digits(y)) {
                    (true, true) => compare_numeric(x, y),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn is_digits(chunk: &str) -> bool {
    chunk.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Compare digit runs of any length without parsing.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        // "01" after "1" so distinct strings never tie
        .then_with(|| a.len().cmp(&b.len()))
}

/// Iterator over maximal runs of ASCII digits / non-digits.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.as_bytes().first()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .bytes()
            .position(|b| b.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
