//! Presentation-ready view of the table.
//!
//! `TableView` is what the rendering layer reads on every draw: headers
//! with their sort indicator, the rows of the current page projected onto
//! the visible columns, the pagination control state and the column
//! settings list. It is a plain snapshot and can be serialized as is.
//!
//! The data flow is:
//! 1. Records (`GroupingRecord`)
//! 2. Query pipeline (filtered, sorted, paginated)
//! 3. TableView (visible columns, indicators, overflow flags)

use serde::Serialize;

use crate::data::column::ColumnId;
use crate::query::options::SortDirection;

/// Sort state shown next to a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Arrow glyph for the header (empty when unsorted).
    pub fn arrow(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

impl From<Option<SortDirection>> for SortIndicator {
    fn from(direction: Option<SortDirection>) -> Self {
        match direction {
            None => SortIndicator::None,
            Some(SortDirection::Ascending) => SortIndicator::Ascending,
            Some(SortDirection::Descending) => SortIndicator::Descending,
        }
    }
}

/// One visible column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub column: ColumnId,
    pub label: String,
    pub sortable: bool,
    pub sort: SortIndicator,
}

/// One visible cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub column: ColumnId,
    /// Display value
    pub value: String,
    /// Overflow flag for truncation-sensitive columns, `None` otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    /// Whether the cell offers a copy-to-clipboard action
    pub copyable: bool,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Position on the page (zero-based)
    pub index: usize,
    /// Link target of the name cell
    pub link: String,
    /// Full path of the record, whether or not the path column is shown
    pub path: String,
    /// Cells for the visible columns, in column order
    pub cells: Vec<CellView>,
}

impl RowView {
    pub fn cell(&self, column: ColumnId) -> Option<&CellView> {
        self.cells.iter().find(|cell| cell.column == column)
    }
}

/// Pagination control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// Zero-based current page
    pub page_index: usize,
    /// One-based current page, for display
    pub page_number: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Rows after filtering
    pub total_rows: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl PaginationView {
    /// "Page X of Y"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_number, self.page_count)
    }
}

/// One entry of the column settings menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSetting {
    pub column: ColumnId,
    pub label: String,
    pub hidable: bool,
    pub visible: bool,
}

/// Everything the presentation layer needs for one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub filter: String,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub pagination: PaginationView,
    pub columns: Vec<ColumnSetting>,
}

impl TableView {
    /// Visible column ids, in display order.
    pub fn visible_columns(&self) -> Vec<ColumnId> {
        self.headers.iter().map(|header| header.column).collect()
    }

    pub fn header(&self, column: ColumnId) -> Option<&HeaderView> {
        self.headers.iter().find(|header| header.column == column)
    }

    /// Name column values of the page, top to bottom.
    pub fn names(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.cell(ColumnId::Name))
            .map(|cell| cell.value.as_str())
            .collect()
    }
}
