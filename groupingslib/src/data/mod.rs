//! Record model: the shape of the data the table displays.
//!
//! - **GroupingRecord**: one name/description/path entry
//! - **ColumnId / ColumnDescriptor**: the static column configuration

pub mod column;
pub mod record;

pub use column::{default_columns, ColumnDescriptor, ColumnId};
pub use record::GroupingRecord;
