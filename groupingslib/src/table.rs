//! The groupings table: records plus everything the user can change about
//! how they are shown.
//!
//! `GroupingsTable` owns the filter query, the sort keys, the page position,
//! the column visibility store and the overflow detector. Every mutation is
//! a small transition that keeps the pieces consistent (a new filter goes
//! back to the first page, a hidden column clears stale overflow flags,
//! and so on). Reading goes through [`GroupingsTable::view`], which runs the
//! query pipeline and returns a [`TableView`] snapshot.
//!
//! ## Example
//!
//! ```rust
//! use groupingslib::{ColumnId, GroupingRecord, GroupingsTable, MemoryStorage, TableOptions};
//!
//! let records: Vec<_> = (0..200)
//!     .map(|i| GroupingRecord::new(
//!         format!("example-{i}"),
//!         format!("Description for example {i}"),
//!         format!("tmp:example:example-{i}"),
//!     ))
//!     .collect();
//!
//! let mut table = GroupingsTable::new(records, MemoryStorage::new(), TableOptions::new());
//! table.last();
//!
//! let view = table.view();
//! assert_eq!(view.pagination.label(), "Page 10 of 10");
//! assert_eq!(view.names().first(), Some(&"example-180"));
//!
//! table.toggle_sort(ColumnId::Name);
//! table.toggle_sort(ColumnId::Name);
//! assert_eq!(table.view().names()[..2], ["example-199", "example-198"]);
//! ```

use tracing::debug;

use crate::data::column::{default_columns, ColumnDescriptor, ColumnId};
use crate::data::record::GroupingRecord;
use crate::output::view::{
    CellView, ColumnSetting, HeaderView, PaginationView, RowView, SortIndicator, TableView,
};
use crate::overflow::{CellId, MeasureCell, OverflowDetector, OverflowMap};
use crate::query::options::{
    PaginationState, SortDirection, Sorting, SortingFn, DEFAULT_PAGE_SIZE,
};
use crate::query::{filter, page_count, paginate, sort};
use crate::visibility::{ColumnVisibilityStore, KeyValueStorage, VisibilityState};

/// Table behavior knobs.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Rows per page
    pub page_size: usize,
    /// Allow stacking sort keys (off: a header click replaces the sort)
    pub multi_sort: bool,
    /// How cell values are compared when sorting
    pub sorting_fn: SortingFn,
    /// Column set and per-column behavior
    pub columns: Vec<ColumnDescriptor>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            multi_sort: false,
            sorting_fn: SortingFn::default(),
            columns: default_columns(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rows per page. 0 is coerced to 1.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn multi_sort(mut self, enabled: bool) -> Self {
        self.multi_sort = enabled;
        self
    }

    pub fn sorting_fn(mut self, sorting_fn: SortingFn) -> Self {
        self.sorting_fn = sorting_fn;
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }
}

/// Records and view state for the groupings management table.
#[derive(Debug)]
pub struct GroupingsTable<S> {
    records: Vec<GroupingRecord>,
    options: TableOptions,
    filter: String,
    sorting: Sorting,
    pagination: PaginationState,
    visibility: ColumnVisibilityStore<S>,
    overflow: OverflowDetector,
}

impl<S: KeyValueStorage> GroupingsTable<S> {
    /// Build a table over `records`, reading column visibility from `storage`.
    pub fn new(records: Vec<GroupingRecord>, storage: S, options: TableOptions) -> Self {
        let visibility = ColumnVisibilityStore::load(storage, &options.columns);
        let pagination = PaginationState::with_page_size(options.page_size);
        debug!(
            records = records.len(),
            page_size = pagination.page_size,
            multi_sort = options.multi_sort,
            "table created"
        );

        Self {
            records,
            options,
            filter: String::new(),
            sorting: Sorting::none(),
            pagination,
            visibility,
            overflow: OverflowDetector::new(),
        }
    }

    pub fn records(&self) -> &[GroupingRecord] {
        &self.records
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sorting(&self) -> &Sorting {
        &self.sorting
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn visibility(&self) -> &VisibilityState {
        self.visibility.get()
    }

    pub fn overflow(&self) -> &OverflowMap {
        self.overflow.map()
    }

    /// Storage backing the visibility store.
    pub fn storage(&self) -> &S {
        self.visibility.storage()
    }

    /// Descriptor for a column id, if the table has that column.
    pub fn column(&self, column: ColumnId) -> Option<&ColumnDescriptor> {
        self.options.columns.iter().find(|c| c.id == column)
    }

    /// Shown columns, in display order.
    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor> {
        self.options
            .columns
            .iter()
            .filter(|c| self.visibility.is_visible(c.id))
            .collect()
    }

    /// Filtered and sorted rows, across all pages.
    pub fn rows(&self) -> Vec<&GroupingRecord> {
        let rows = filter(&self.records, &self.filter);
        sort(rows, &self.sorting, self.options.sorting_fn)
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&GroupingRecord> {
        let rows = self.rows();
        paginate(&rows, &self.pagination).rows.to_vec()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.rows().len(), self.pagination.page_size)
    }

    /// Replace the records. The page index is pulled back if the new set
    /// has fewer pages.
    pub fn set_records(&mut self, records: Vec<GroupingRecord>) {
        self.records = records;
        let pages = self.page_count();
        self.pagination.clamp(pages);
        self.overflow.invalidate();
        debug!(
            records = self.records.len(),
            page = self.pagination.page_index,
            "records replaced"
        );
    }

    /// Set the global filter query. Going back to the first page only
    /// happens when the query actually changes.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.filter {
            return;
        }
        self.filter = query;
        self.pagination.first();
        self.overflow.invalidate();
        debug!(filter = %self.filter, "filter changed");
    }

    /// Header click: cycle the column through none, first direction,
    /// reversed direction. Replaces any other sort key.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        let Some(first) = self.sortable_first_direction(column) else {
            return;
        };
        self.sorting.toggle(column, first);
        self.sort_changed();
    }

    /// Shift-click: like [`toggle_sort`](Self::toggle_sort) but keeps the
    /// other keys. Falls back to a plain toggle when multi-sort is off.
    pub fn toggle_sort_stacked(&mut self, column: ColumnId) {
        if !self.options.multi_sort {
            self.toggle_sort(column);
            return;
        }
        let Some(first) = self.sortable_first_direction(column) else {
            return;
        };
        self.sorting.toggle_stacked(column, first);
        self.sort_changed();
    }

    pub fn clear_sorting(&mut self) {
        if self.sorting.is_empty() {
            return;
        }
        self.sorting.clear();
        self.sort_changed();
    }

    pub fn first(&mut self) {
        self.move_page(|pagination, _| pagination.first());
    }

    pub fn previous(&mut self) {
        self.move_page(|pagination, _| pagination.previous());
    }

    pub fn next(&mut self) {
        self.move_page(|pagination, pages| pagination.next(pages));
    }

    pub fn last(&mut self) {
        self.move_page(|pagination, pages| pagination.last(pages));
    }

    /// Jump to a zero-based page, clamped to the last page.
    pub fn go_to_page(&mut self, page_index: usize) {
        self.move_page(|pagination, pages| {
            pagination.page_index = page_index;
            pagination.clamp(pages);
        });
    }

    /// Change rows per page, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) {
        let offset = self.pagination.offset();
        let page_size = page_size.max(1);
        self.pagination = PaginationState {
            page_index: offset / page_size,
            page_size,
        };
        let pages = self.page_count();
        self.pagination.clamp(pages);
        self.options.page_size = page_size;
        self.overflow.invalidate();
        debug!(page_size, page = self.pagination.page_index, "page size changed");
    }

    /// Show or hide a column. Page, sort and filter are left alone.
    /// Returns whether the column is now visible.
    pub fn toggle_column(&mut self, column: ColumnId) -> bool {
        let before = self.visibility.is_visible(column);
        let visible = self.visibility.toggle(column).is_visible(column);
        if visible != before {
            self.overflow.invalidate();
        }
        visible
    }

    /// Set a column's visibility explicitly.
    pub fn set_column_visible(&mut self, column: ColumnId, visible: bool) -> bool {
        let before = self.visibility.is_visible(column);
        let now = self.visibility.set(column, visible).is_visible(column);
        if now != before {
            self.overflow.invalidate();
        }
        now
    }

    /// The viewport changed size; earlier measurements no longer hold.
    pub fn on_resize(&mut self) {
        self.overflow.invalidate();
    }

    /// Measure the truncation-sensitive cells of the current page.
    pub fn measure_overflow<M>(&mut self, measure: &M) -> &OverflowMap
    where
        M: MeasureCell + ?Sized,
    {
        let truncating: Vec<ColumnId> = self
            .visible_columns()
            .into_iter()
            .filter(|c| c.truncates)
            .map(|c| c.id)
            .collect();
        let rows = self.page_rows().len();

        let cells = (0..rows).flat_map(|row| {
            truncating
                .iter()
                .map(move |&column| CellId::new(row, column))
        });
        self.overflow.recompute(cells, measure)
    }

    /// Path of a row on the current page, for the copy action.
    pub fn copy_path(&self, row: usize) -> Option<String> {
        self.page_rows().get(row).map(|record| record.path.clone())
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> TableView {
        let rows = self.rows();
        let page = paginate(&rows, &self.pagination);
        let visible = self.visible_columns();

        let headers = visible
            .iter()
            .map(|column| HeaderView {
                column: column.id,
                label: column.label.clone(),
                sortable: column.sortable,
                sort: SortIndicator::from(self.sorting.direction(column.id)),
            })
            .collect();

        let rows = page
            .rows
            .iter()
            .enumerate()
            .map(|(index, record)| RowView {
                index,
                link: record.link(),
                path: record.path.clone(),
                cells: visible
                    .iter()
                    .map(|column| CellView {
                        column: column.id,
                        value: record.value(column.id).to_string(),
                        truncated: column
                            .truncates
                            .then(|| self.overflow.is_truncated(&CellId::new(index, column.id))),
                        copyable: column.id == ColumnId::Path,
                    })
                    .collect(),
            })
            .collect();

        let pagination = PaginationView {
            page_index: page.page_index,
            page_number: page.page_index + 1,
            page_count: page.page_count,
            page_size: self.pagination.page_size,
            total_rows: page.total,
            can_previous: page.page_index > 0,
            can_next: page.page_index + 1 < page.page_count,
        };

        let columns = self
            .options
            .columns
            .iter()
            .map(|column| ColumnSetting {
                column: column.id,
                label: column.label.clone(),
                hidable: column.hidable,
                visible: self.visibility.is_visible(column.id),
            })
            .collect();

        TableView {
            filter: self.filter.clone(),
            headers,
            rows,
            pagination,
            columns,
        }
    }

    fn sortable_first_direction(&self, column: ColumnId) -> Option<SortDirection> {
        match self.column(column) {
            Some(descriptor) if descriptor.sortable => Some(descriptor.sort_first),
            _ => {
                debug!(%column, "ignoring sort on unsortable column");
                None
            }
        }
    }

    fn sort_changed(&mut self) {
        self.pagination.first();
        self.overflow.invalidate();
        debug!(sorting = ?self.sorting, "sorting changed");
    }

    fn move_page(&mut self, step: impl FnOnce(&mut PaginationState, usize)) {
        let pages = self.page_count();
        let before = self.pagination.page_index;
        step(&mut self.pagination, pages);
        if self.pagination.page_index != before {
            self.overflow.invalidate();
            debug!(
                from = before,
                to = self.pagination.page_index,
                pages,
                "page changed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overflow::CellGeometry;
    use crate::visibility::{MemoryStorage, VISIBILITY_STORAGE_KEY};
    use proptest::prelude::*;

    fn sample_records(count: usize) -> Vec<GroupingRecord> {
        (0..count)
            .map(|i| {
                GroupingRecord::new(
                    format!("example-{i}"),
                    format!("Description for example {i}"),
                    format!("tmp:example:example-{i}"),
                )
            })
            .collect()
    }

    fn sample_table() -> GroupingsTable<MemoryStorage> {
        GroupingsTable::new(sample_records(200), MemoryStorage::new(), TableOptions::new())
    }

    #[test]
    fn test_initial_view() {
        let view = sample_table().view();
        assert_eq!(view.pagination.page_index, 0);
        assert_eq!(view.pagination.page_count, 10);
        assert_eq!(view.pagination.total_rows, 200);
        assert!(!view.pagination.can_previous);
        assert!(view.pagination.can_next);
        assert_eq!(view.rows.len(), 20);
        assert_eq!(
            view.visible_columns(),
            vec![ColumnId::Name, ColumnId::Description]
        );
        assert!(view.headers.iter().all(|h| h.sort == SortIndicator::None));
    }

    #[test]
    fn test_next_then_previous_restores_page() {
        let mut table = sample_table();
        let before = table.view();
        table.next();
        assert_eq!(table.pagination().page_index, 1);
        assert_eq!(table.view().names()[0], "example-20");
        table.previous();
        assert_eq!(table.view(), before);
    }

    #[test]
    fn test_last_page() {
        let mut table = sample_table();
        table.last();
        let view = table.view();
        assert_eq!(view.pagination.page_index, 9);
        assert!(!view.pagination.can_next);
        let expected: Vec<String> = (180..200).map(|i| format!("example-{i}")).collect();
        assert_eq!(view.names(), expected);
    }

    #[test]
    fn test_navigation_clamped_at_bounds() {
        let mut table = sample_table();
        table.previous();
        assert_eq!(table.pagination().page_index, 0);
        table.last();
        table.next();
        assert_eq!(table.pagination().page_index, 9);
        table.first();
        assert_eq!(table.pagination().page_index, 0);
        table.go_to_page(4);
        assert_eq!(table.view().names()[0], "example-80");
        table.go_to_page(99);
        assert_eq!(table.pagination().page_index, 9);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut table = sample_table();
        table.last();
        table.set_filter("1");
        let view = table.view();
        assert_eq!(view.pagination.page_index, 0);
        assert!(view.names().iter().all(|name| name.contains('1')));
    }

    #[test]
    fn test_same_filter_keeps_page() {
        let mut table = sample_table();
        table.set_filter("example");
        table.next();
        table.set_filter("example");
        assert_eq!(table.pagination().page_index, 1);
    }

    #[test]
    fn test_filter_no_match_has_one_empty_page() {
        let mut table = sample_table();
        table.set_filter("no such grouping");
        let view = table.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.pagination.page_count, 1);
        assert!(!view.pagination.can_next);
    }

    #[test]
    fn test_blank_filter_shows_everything() {
        let mut table = sample_table();
        table.set_filter("   ");
        assert_eq!(table.view().pagination.total_rows, 200);
    }

    #[test]
    fn test_sort_resets_page_and_cycles() {
        let mut table = sample_table();
        let original: Vec<String> = table.view().names().iter().map(|s| s.to_string()).collect();
        table.next();

        table.toggle_sort(ColumnId::Name);
        let view = table.view();
        assert_eq!(view.pagination.page_index, 0);
        assert_eq!(view.names()[..2], ["example-0", "example-1"]);
        assert_eq!(
            view.header(ColumnId::Name).map(|h| h.sort),
            Some(SortIndicator::Ascending)
        );

        table.toggle_sort(ColumnId::Name);
        assert_eq!(table.view().names()[..2], ["example-199", "example-198"]);

        table.toggle_sort(ColumnId::Name);
        assert!(table.sorting().is_empty());
        assert_eq!(table.view().names(), original);
    }

    #[test]
    fn test_sort_other_column_replaces_key() {
        let mut table = sample_table();
        table.toggle_sort(ColumnId::Name);
        table.toggle_sort(ColumnId::Description);
        assert_eq!(table.sorting().keys().len(), 1);
        assert_eq!(
            table.sorting().direction(ColumnId::Description),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn test_stacked_sort_needs_multi_sort() {
        let mut table = sample_table();
        table.toggle_sort(ColumnId::Name);
        table.toggle_sort_stacked(ColumnId::Path);
        assert_eq!(table.sorting().keys().len(), 1);

        let mut table = GroupingsTable::new(
            sample_records(10),
            MemoryStorage::new(),
            TableOptions::new().multi_sort(true),
        );
        table.toggle_sort(ColumnId::Description);
        table.toggle_sort_stacked(ColumnId::Name);
        assert_eq!(table.sorting().keys().len(), 2);
        table.clear_sorting();
        assert!(table.sorting().is_empty());
    }

    #[test]
    fn test_descending_first_column() {
        let columns = default_columns()
            .into_iter()
            .map(|c| {
                if c.id == ColumnId::Name {
                    c.sort_first(SortDirection::Descending)
                } else {
                    c
                }
            })
            .collect();
        let mut table = GroupingsTable::new(
            sample_records(200),
            MemoryStorage::new(),
            TableOptions::new().columns(columns),
        );
        table.toggle_sort(ColumnId::Name);
        assert_eq!(table.view().names()[0], "example-199");
    }

    #[test]
    fn test_toggle_column_keeps_page_sort_filter() {
        let mut table = sample_table();
        table.set_filter("example");
        table.toggle_sort(ColumnId::Name);
        table.next();

        assert!(!table.toggle_column(ColumnId::Description));
        assert_eq!(table.pagination().page_index, 1);
        assert_eq!(table.filter(), "example");
        assert!(!table.sorting().is_empty());
        assert_eq!(table.view().visible_columns(), vec![ColumnId::Name]);
    }

    #[test]
    fn test_toggle_name_is_noop() {
        let mut table = sample_table();
        assert!(table.toggle_column(ColumnId::Name));
        assert!(table.set_column_visible(ColumnId::Name, false));
        assert!(table.view().header(ColumnId::Name).is_some());
    }

    #[test]
    fn test_persisted_visibility_applies_on_load() {
        let storage = MemoryStorage::new()
            .with_entry(VISIBILITY_STORAGE_KEY, r#"{"description":false,"path":true}"#);
        let table = GroupingsTable::new(sample_records(5), storage, TableOptions::new());
        let view = table.view();
        assert_eq!(view.visible_columns(), vec![ColumnId::Name, ColumnId::Path]);
        let path = view.rows[0].cell(ColumnId::Path).unwrap();
        assert!(path.copyable);
        assert_eq!(path.value, "tmp:example:example-0");
    }

    #[test]
    fn test_toggle_column_persists() {
        let mut table = sample_table();
        table.toggle_column(ColumnId::Path);
        let saved = table.storage().get(VISIBILITY_STORAGE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(saved).unwrap();
        assert_eq!(json["path"], true);
    }

    #[test]
    fn test_set_records_clamps_page() {
        let mut table = sample_table();
        table.last();
        table.set_records(sample_records(45));
        let view = table.view();
        assert_eq!(view.pagination.page_index, 2);
        assert_eq!(
            view.names(),
            vec!["example-40", "example-41", "example-42", "example-43", "example-44"]
        );

        table.set_records(Vec::new());
        assert_eq!(table.pagination().page_index, 0);
        assert!(table.view().rows.is_empty());
    }

    #[test]
    fn test_page_size_keeps_first_visible_row() {
        let mut table = sample_table();
        table.last(); // offset 180
        table.set_page_size(50);
        let view = table.view();
        assert_eq!(view.pagination.page_index, 3);
        assert_eq!(view.pagination.page_count, 4);
        assert!(view.names().contains(&"example-180"));

        table.set_page_size(0);
        assert_eq!(table.pagination().page_size, 1);
    }

    #[test]
    fn test_page_links() {
        let view = sample_table().view();
        assert_eq!(view.rows[3].link, "/groupings/tmp:example:example-3");
        assert!(view.rows[3].cell(ColumnId::Name).unwrap().truncated.is_none());
    }

    #[test]
    fn test_copy_path_on_current_page() {
        let mut table = sample_table();
        table.next();
        assert_eq!(table.copy_path(0).as_deref(), Some("tmp:example:example-20"));
        assert_eq!(table.copy_path(20), None);
    }

    #[test]
    fn test_overflow_measured_and_invalidated() {
        let mut table = sample_table();
        // Only rows past 9 have descriptions too long for 25 columns
        let measure = |cell: &CellId| -> Option<CellGeometry> {
            Some(CellGeometry {
                natural: if cell.row >= 10 { 30 } else { 25 },
                available: 25,
            })
        };

        let map = table.measure_overflow(&measure);
        // 20 rows x description (path hidden, name not truncating)
        assert_eq!(map.len(), 20);
        assert_eq!(map.truncated().count(), 10);

        let view = table.view();
        let description =
            |row: usize| view.rows[row].cell(ColumnId::Description).unwrap().truncated;
        assert_eq!(description(0), Some(false));
        assert_eq!(description(15), Some(true));

        table.on_resize();
        assert!(table.overflow().is_empty());
        assert_eq!(
            table.view().rows[15]
                .cell(ColumnId::Description)
                .unwrap()
                .truncated,
            Some(false)
        );
    }

    #[test]
    fn test_showing_column_clears_overflow() {
        let mut table = sample_table();
        let wide = |_: &CellId| -> Option<CellGeometry> {
            Some(CellGeometry {
                natural: 80,
                available: 10,
            })
        };
        table.measure_overflow(&wide);
        assert!(!table.overflow().is_empty());

        table.toggle_column(ColumnId::Path);
        assert!(table.overflow().is_empty());

        // Path is truncation-sensitive too
        assert_eq!(table.measure_overflow(&wide).len(), 40);
    }

    /// Every measured cell overflows.
    fn measure_all_truncated(_: &CellId) -> Option<CellGeometry> {
        Some(CellGeometry {
            natural: 80,
            available: 10,
        })
    }

    fn first_description_truncated(table: &GroupingsTable<MemoryStorage>) -> Option<bool> {
        table.view().rows[0]
            .cell(ColumnId::Description)
            .and_then(|cell| cell.truncated)
    }

    #[test]
    fn test_new_records_clear_overflow() {
        let mut table = sample_table();
        table.measure_overflow(&measure_all_truncated);
        assert_eq!(first_description_truncated(&table), Some(true));

        table.set_records(sample_records(30));
        assert!(table.overflow().is_empty());
        assert_eq!(first_description_truncated(&table), Some(false));
    }

    #[test]
    fn test_filter_change_clears_overflow() {
        let mut table = sample_table();
        table.measure_overflow(&measure_all_truncated);

        table.set_filter("example-1");
        assert!(table.overflow().is_empty());
        assert_eq!(first_description_truncated(&table), Some(false));
    }

    #[test]
    fn test_sort_change_clears_overflow() {
        let mut table = sample_table();
        table.measure_overflow(&measure_all_truncated);

        table.toggle_sort(ColumnId::Name);
        assert!(table.overflow().is_empty());

        table.measure_overflow(&measure_all_truncated);
        table.clear_sorting();
        assert!(table.overflow().is_empty());
        assert_eq!(first_description_truncated(&table), Some(false));
    }

    #[test]
    fn test_page_change_clears_overflow() {
        let mut table = sample_table();
        table.measure_overflow(&measure_all_truncated);

        table.next();
        assert!(table.overflow().is_empty());
        assert_eq!(first_description_truncated(&table), Some(false));

        // Navigation that stays on the same page keeps the measurement
        table.last();
        table.measure_overflow(&measure_all_truncated);
        table.next();
        assert_eq!(table.overflow().len(), 20);
        assert_eq!(first_description_truncated(&table), Some(true));
    }

    proptest! {
        #[test]
        fn prop_three_clicks_restore_order(
            column in prop::sample::select(ColumnId::ALL.to_vec()),
            filter in "[0-9]{0,2}",
        ) {
            let mut table = sample_table();
            table.set_filter(filter);
            let before = table.view();

            for _ in 0..3 {
                table.toggle_sort(column);
            }
            prop_assert!(table.sorting().is_empty());
            prop_assert_eq!(table.view(), before);
        }
    }
}
