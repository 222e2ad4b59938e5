//! Fixed-size pages over an ordered row set.

use super::options::PaginationState;

/// Number of pages needed for `total` rows. Never less than one, so an
/// empty table still has a (blank) first page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// One page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows on this page
    pub rows: &'a [T],
    /// Zero-based index of this page, after clamping
    pub page_index: usize,
    /// Total number of pages
    pub page_count: usize,
    /// Total number of rows across all pages
    pub total: usize,
}

/// Slice out the page described by `state`.
///
/// An index past the end is clamped to the last page, so a shrinking row
/// set never yields a blank page while rows exist.
pub fn paginate<'a, T>(rows: &'a [T], state: &PaginationState) -> Page<'a, T> {
    let total = rows.len();
    let page_size = state.page_size.max(1);
    let page_count = page_count(total, page_size);
    let page_index = state.page_index.min(page_count - 1);

    let start = (page_index * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        rows: &rows[start..end],
        page_index,
        page_count,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(200, 20), 10);
        assert_eq!(page_count(201, 20), 11);
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_first_page() {
        let rows = numbers(200);
        let page = paginate(&rows, &PaginationState::default());
        assert_eq!(page.rows.len(), 20);
        assert_eq!(page.rows[0], 0);
        assert_eq!(page.rows[19], 19);
        assert_eq!(page.page_count, 10);
        assert_eq!(page.total, 200);
    }

    #[test]
    fn test_last_partial_page() {
        let rows = numbers(45);
        let page = paginate(
            &rows,
            &PaginationState {
                page_index: 2,
                page_size: 20,
            },
        );
        assert_eq!(page.rows, &[40, 41, 42, 43, 44]);
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        let rows = numbers(30);
        let page = paginate(
            &rows,
            &PaginationState {
                page_index: 9,
                page_size: 20,
            },
        );
        assert_eq!(page.page_index, 1);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<usize> = Vec::new();
        let page = paginate(
            &rows,
            &PaginationState {
                page_index: 3,
                page_size: 20,
            },
        );
        assert!(page.rows.is_empty());
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_count, 1);
    }

    proptest! {
        #[test]
        fn prop_pages_cover_rows(total in 0usize..300, page_size in 1usize..50) {
            let rows = numbers(total);
            let mut state = PaginationState::with_page_size(page_size);
            let count = page_count(total, page_size);

            let mut seen = Vec::new();
            for index in 0..count {
                state.page_index = index;
                let page = paginate(&rows, &state);
                prop_assert!(page.rows.len() <= page_size);
                seen.extend_from_slice(page.rows);
            }
            prop_assert_eq!(seen, rows);
        }
    }
}
