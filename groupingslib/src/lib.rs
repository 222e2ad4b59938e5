//! # groupingslib
//!
//! A client-side table engine for browsing "grouping" records: named
//! entries with a description and a colon-separated hierarchical path.
//!
//! ## Overview
//!
//! The whole record set is loaded once and every view operation runs
//! locally over it:
//!
//! - **Filter**: a single global text query, matched case-insensitively
//!   against every column
//! - **Sort**: per-column header toggles cycling none, ascending, descending
//! - **Paginate**: fixed-size pages with first/previous/next/last navigation
//! - **Column visibility**: user choices persisted through a key-value store
//! - **Overflow detection**: flags cells whose text was cut off by layout
//!
//! ## Features
//!
//! - **Pure pipeline**: filter, sort and paginate are pure functions over an
//!   immutable record snapshot
//! - **Pluggable persistence**: any [`KeyValueStorage`] backs the visibility
//!   store; a JSON file and an in-memory map are provided
//! - **Serializable view**: [`TableView`] is ready for templates or JSON
//!
//! ## Example
//!
//! ```rust
//! use groupingslib::{parse_records, ColumnId, GroupingsTable, MemoryStorage, TableOptions};
//!
//! let records = parse_records(r#"{
//!     "resultCode": "OK",
//!     "groupingPaths": [
//!         { "name": "example-2", "description": "second", "path": "tmp:example:example-2" },
//!         { "name": "example-10", "description": "tenth", "path": "tmp:example:example-10" }
//!     ]
//! }"#).unwrap();
//!
//! let mut table = GroupingsTable::new(records, MemoryStorage::new(), TableOptions::new());
//! table.set_filter("EXAMPLE");
//! table.toggle_sort(ColumnId::Name);
//!
//! let view = table.view();
//! assert_eq!(view.names(), vec!["example-2", "example-10"]);
//! assert_eq!(view.rows[0].link, "/groupings/tmp:example:example-2");
//!
//! // Path is hidden until the user shows it
//! assert!(view.header(ColumnId::Path).is_none());
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod overflow;
pub mod query;
pub mod source;
pub mod table;
pub mod visibility;

pub use data::{default_columns, ColumnDescriptor, ColumnId, GroupingRecord};
pub use error::GroupingsError;
pub use output::{
    CellView, ColumnSetting, HeaderView, PaginationView, RowView, SortIndicator, TableView,
};
pub use overflow::{CellGeometry, CellId, MeasureCell, OverflowDetector, OverflowMap};
pub use query::{
    ColumnSort, PaginationState, SortDirection, Sorting, SortingFn, DEFAULT_PAGE_SIZE,
};
pub use source::{load_records, parse_records};
pub use table::{GroupingsTable, TableOptions};
pub use visibility::{
    ColumnVisibilityStore, JsonFileStorage, KeyValueStorage, MemoryStorage, VisibilityState,
    VISIBILITY_STORAGE_KEY,
};

/// Result type for groupingslib operations
pub type Result<T> = std::result::Result<T, GroupingsError>;
