//! Column identifiers and static column configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GroupingsError;
use crate::query::options::SortDirection;

/// Stable key of a column, matching a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Grouping name (always visible)
    Name,
    /// Grouping description
    Description,
    /// Grouping path
    Path,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [ColumnId; 3] = [ColumnId::Name, ColumnId::Description, ColumnId::Path];

    /// The storage key for this column.
    pub fn key(self) -> &'static str {
        match self {
            ColumnId::Name => "name",
            ColumnId::Description => "description",
            ColumnId::Path => "path",
        }
    }

    /// Column for an exact storage key. Header labels are not accepted.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.key() == key)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColumnId {
    type Err = GroupingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "grouping name" => Ok(ColumnId::Name),
            "description" => Ok(ColumnId::Description),
            "path" | "grouping path" => Ok(ColumnId::Path),
            _ => Err(GroupingsError::UnknownColumn(s.to_string())),
        }
    }
}

/// Static configuration for one column. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column key
    pub id: ColumnId,
    /// Header text
    pub label: String,
    /// Whether the user may hide this column
    pub hidable: bool,
    /// Whether header activation sorts by this column
    pub sortable: bool,
    /// Whether cells of this column report overflow to the presentation layer
    pub truncates: bool,
    /// Direction applied on the first activation of the header
    pub sort_first: SortDirection,
}

impl ColumnDescriptor {
    pub fn new(id: ColumnId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            hidable: true,
            sortable: true,
            truncates: false,
            sort_first: SortDirection::Ascending,
        }
    }

    /// Builder: forbid hiding
    pub fn pinned(mut self) -> Self {
        self.hidable = false;
        self
    }

    /// Builder: mark as truncation-sensitive
    pub fn truncating(mut self) -> Self {
        self.truncates = true;
        self
    }

    /// Builder: set the first-activation direction
    pub fn sort_first(mut self, direction: SortDirection) -> Self {
        self.sort_first = direction;
        self
    }

    /// Builder: disable sorting
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// The grouping table's columns, in display order.
pub fn default_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(ColumnId::Name, "Grouping Name").pinned(),
        ColumnDescriptor::new(ColumnId::Description, "Description").truncating(),
        ColumnDescriptor::new(ColumnId::Path, "Grouping Path").truncating(),
    ]
}
