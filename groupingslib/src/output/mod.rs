//! Output: the view-state handed to the presentation layer.
//!
//! TableView is a pure snapshot - all filtering, sorting and pagination
//! happens in the query stage, driven by `crate::table::GroupingsTable`.

pub mod view;

pub use view::{
    CellView, ColumnSetting, HeaderView, PaginationView, RowView, SortIndicator, TableView,
};
