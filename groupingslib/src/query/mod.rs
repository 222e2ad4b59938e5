//! Query processing: filter, sort and paginate records.
//!
//! The stages run in a fixed order over an immutable record snapshot:
//!
//! 1. `filter` - keep records matching the global text query
//! 2. `sort` - order them by the active sort keys (stable)
//! 3. `paginate` - slice out the current page
//!
//! Each stage is a pure function; the orchestrator in `crate::table`
//! re-runs the chain whenever any of its inputs change.
//!
//! ## Example
//!
//! ```rust
//! use groupingslib::query::{filter, paginate, sort, PaginationState, Sorting, SortingFn};
//! use groupingslib::{ColumnId, GroupingRecord, SortDirection};
//!
//! let records = vec![
//!     GroupingRecord::new("example-10", "ten", "tmp:example:example-10"),
//!     GroupingRecord::new("example-2", "two", "tmp:example:example-2"),
//! ];
//!
//! let rows = filter(&records, "example");
//! let rows = sort(rows, &Sorting::by(ColumnId::Name, SortDirection::Ascending), SortingFn::default());
//! let page = paginate(&rows, &PaginationState::default());
//! assert_eq!(page.rows[0].name, "example-2");
//! ```

pub mod filter;
pub mod options;
pub mod paginate;
pub mod sort;

pub use filter::filter;
pub use options::{
    ColumnSort, PaginationState, SortDirection, Sorting, SortingFn, DEFAULT_PAGE_SIZE,
};
pub use paginate::{page_count, paginate, Page};
pub use sort::sort;
