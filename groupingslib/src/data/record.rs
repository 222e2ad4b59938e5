//! The grouping record: one row of the table.

use serde::{Deserialize, Serialize};

use super::column::ColumnId;

/// A grouping entry as delivered by the data source.
///
/// Records are never mutated by the engine. Uniqueness is not enforced;
/// rows are identified by their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingRecord {
    /// Short display name (e.g. `example-0`)
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Colon-delimited hierarchical path (e.g. `tmp:example:example-0`)
    pub path: String,
}

impl GroupingRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            path: path.into(),
        }
    }

    /// String value of the given column.
    pub fn value(&self, column: ColumnId) -> &str {
        match column {
            ColumnId::Name => &self.name,
            ColumnId::Description => &self.description,
            ColumnId::Path => &self.path,
        }
    }

    /// Link target for the name cell.
    pub fn link(&self) -> String {
        format!("/groupings/{}", self.path)
    }
}
