//! Query state: sorting and pagination configuration.
//!
//! These types hold the user-driven state that the query pipeline reads.
//! They carry no records; the engines in `filter`, `sort` and `paginate`
//! apply them to a record snapshot.

use serde::{Deserialize, Serialize};

use crate::data::column::ColumnId;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Comparison used when ordering string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingFn {
    /// Natural order: digit runs compare by numeric value (`example-2` < `example-10`)
    #[default]
    Alphanumeric,
    /// Plain lexicographic order of the lowercased values
    Text,
}

/// One active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    /// Column to sort by
    pub column: ColumnId,
    /// Sort direction
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(column: ColumnId, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Active sort keys, most significant first.
///
/// In the default single-key mode this holds at most one entry. Stacked
/// sorting keeps one entry per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting(Vec<ColumnSort>);

impl Sorting {
    /// No active sort.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single active sort key.
    pub fn by(column: ColumnId, direction: SortDirection) -> Self {
        Self(vec![ColumnSort::new(column, direction)])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> &[ColumnSort] {
        &self.0
    }

    /// Current direction for a column, if it is sorted.
    pub fn direction(&self, column: ColumnId) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Advance the three-state cycle for `column` in single-key mode.
    ///
    /// unsorted -> `first` -> reversed -> unsorted. Activating a different
    /// column starts it at `first` and drops every other key.
    pub fn toggle(&mut self, column: ColumnId, first: SortDirection) {
        let next = next_direction(self.direction(column), first);
        self.0.clear();
        if let Some(direction) = next {
            self.0.push(ColumnSort::new(column, direction));
        }
    }

    /// Advance the cycle for `column` while keeping the other keys.
    ///
    /// A newly sorted column is appended as the least significant key.
    pub fn toggle_stacked(&mut self, column: ColumnId, first: SortDirection) {
        match self.0.iter().position(|key| key.column == column) {
            Some(index) => match next_direction(Some(self.0[index].direction), first) {
                Some(direction) => self.0[index].direction = direction,
                None => {
                    self.0.remove(index);
                }
            },
            None => self.0.push(ColumnSort::new(column, first)),
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

fn next_direction(current: Option<SortDirection>, first: SortDirection) -> Option<SortDirection> {
    match current {
        None => Some(first),
        Some(direction) if direction == first => Some(first.reversed()),
        Some(_) => None,
    }
}

/// Page position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based page index
    pub page_index: usize,
    /// Rows per page (always >= 1)
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// First page with the given size. A size of 0 is coerced to 1.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Go to the first page.
    pub fn first(&mut self) {
        self.page_index = 0;
    }

    /// Go one page back; no-op on the first page.
    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Go one page forward; no-op on the last page.
    pub fn next(&mut self, page_count: usize) {
        self.page_index = (self.page_index + 1).min(last_index(page_count));
    }

    /// Go to the last page.
    pub fn last(&mut self, page_count: usize) {
        self.page_index = last_index(page_count);
    }

    /// Pull the index back into `0..page_count`.
    pub fn clamp(&mut self, page_count: usize) {
        self.page_index = self.page_index.min(last_index(page_count));
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, page_count: usize) -> bool {
        self.page_index < last_index(page_count)
    }

    /// Offset of the first row on the current page.
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size.max(1)
    }
}

fn last_index(page_count: usize) -> usize {
    page_count.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_three_state_cycle() {
        let mut sorting = Sorting::none();
        sorting.toggle(ColumnId::Name, SortDirection::Ascending);
        assert_eq!(sorting.direction(ColumnId::Name), Some(SortDirection::Ascending));

        sorting.toggle(ColumnId::Name, SortDirection::Ascending);
        assert_eq!(sorting.direction(ColumnId::Name), Some(SortDirection::Descending));

        sorting.toggle(ColumnId::Name, SortDirection::Ascending);
        assert!(sorting.is_empty());
    }

    #[test]
    fn test_toggle_descending_first() {
        let mut sorting = Sorting::none();
        sorting.toggle(ColumnId::Name, SortDirection::Descending);
        assert_eq!(sorting.direction(ColumnId::Name), Some(SortDirection::Descending));
        sorting.toggle(ColumnId::Name, SortDirection::Descending);
        assert_eq!(sorting.direction(ColumnId::Name), Some(SortDirection::Ascending));
        sorting.toggle(ColumnId::Name, SortDirection::Descending);
        assert!(sorting.is_empty());
    }

    #[test]
    fn test_toggle_other_column_replaces() {
        let mut sorting = Sorting::by(ColumnId::Name, SortDirection::Descending);
        sorting.toggle(ColumnId::Path, SortDirection::Ascending);
        assert_eq!(
            sorting.keys(),
            &[ColumnSort::new(ColumnId::Path, SortDirection::Ascending)]
        );
        assert_eq!(sorting.direction(ColumnId::Name), None);
    }

    #[test]
    fn test_toggle_stacked_keeps_other_keys() {
        let mut sorting = Sorting::none();
        sorting.toggle_stacked(ColumnId::Name, SortDirection::Ascending);
        sorting.toggle_stacked(ColumnId::Description, SortDirection::Ascending);
        sorting.toggle_stacked(ColumnId::Name, SortDirection::Ascending);
        assert_eq!(
            sorting.keys(),
            &[
                ColumnSort::new(ColumnId::Name, SortDirection::Descending),
                ColumnSort::new(ColumnId::Description, SortDirection::Ascending),
            ]
        );

        sorting.toggle_stacked(ColumnId::Name, SortDirection::Ascending);
        assert_eq!(
            sorting.keys(),
            &[ColumnSort::new(ColumnId::Description, SortDirection::Ascending)]
        );
    }

    #[test]
    fn test_pagination_default() {
        let state = PaginationState::default();
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_size, 20);
    }

    #[test]
    fn test_pagination_zero_size_coerced() {
        assert_eq!(PaginationState::with_page_size(0).page_size, 1);
    }

    #[test]
    fn test_navigation_boundaries() {
        let mut state = PaginationState::default();
        state.previous();
        assert_eq!(state.page_index, 0);

        state.last(10);
        assert_eq!(state.page_index, 9);
        state.next(10);
        assert_eq!(state.page_index, 9);
        assert!(!state.can_next(10));
        assert!(state.can_previous());

        state.previous();
        assert_eq!(state.page_index, 8);
        state.first();
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = PaginationState {
            page_index: 7,
            page_size: 20,
        };
        state.clamp(3);
        assert_eq!(state.page_index, 2);
        state.clamp(0);
        assert_eq!(state.page_index, 0);
    }
}
