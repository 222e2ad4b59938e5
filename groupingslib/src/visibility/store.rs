//! Column visibility store.
//!
//! Holds which columns are shown, seeded from persisted storage (or the
//! column defaults) and written back on every change. Pinned columns are
//! always visible no matter what the storage says or who asks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::column::{ColumnDescriptor, ColumnId};

use super::storage::KeyValueStorage;

/// Storage key the visibility state is persisted under.
pub const VISIBILITY_STORAGE_KEY: &str = "columnVisibility";

/// Column id -> shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityState(BTreeMap<ColumnId, bool>);

impl Default for VisibilityState {
    fn default() -> Self {
        Self(BTreeMap::from([
            (ColumnId::Name, true),
            (ColumnId::Description, true),
            (ColumnId::Path, false),
        ]))
    }
}

impl VisibilityState {
    /// Whether a column is shown. Unknown columns are shown.
    pub fn is_visible(&self, column: ColumnId) -> bool {
        self.0.get(&column).copied().unwrap_or(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, bool)> + '_ {
        self.0.iter().map(|(column, visible)| (*column, *visible))
    }

    /// Merge a persisted JSON document over `self`.
    ///
    /// Only known column keys with boolean values are taken; anything else
    /// in the document is ignored. Returns `None` if the document is not a
    /// JSON object at all.
    fn merged_with(&self, json: &str) -> Option<Self> {
        let document: BTreeMap<String, serde_json::Value> = serde_json::from_str(json).ok()?;
        let mut merged = self.clone();
        for (key, value) in document {
            match (ColumnId::from_key(&key), value.as_bool()) {
                (Some(column), Some(visible)) => {
                    merged.0.insert(column, visible);
                }
                _ => debug!(key = %key, "ignoring persisted visibility entry"),
            }
        }
        Some(merged)
    }
}

/// Owner of the column visibility state.
#[derive(Debug)]
pub struct ColumnVisibilityStore<S> {
    storage: S,
    columns: Vec<ColumnDescriptor>,
    state: VisibilityState,
}

impl<S: KeyValueStorage> ColumnVisibilityStore<S> {
    /// Load the persisted state, falling back to defaults when it is absent,
    /// unreadable or malformed.
    pub fn load(storage: S, columns: &[ColumnDescriptor]) -> Self {
        let defaults = VisibilityState::default();
        let state = match storage.load(VISIBILITY_STORAGE_KEY) {
            Ok(Some(json)) => defaults.merged_with(&json).unwrap_or_else(|| {
                warn!("persisted column visibility is malformed, using defaults");
                VisibilityState::default()
            }),
            Ok(None) => defaults,
            Err(e) => {
                warn!(error = %e, "could not read column visibility, using defaults");
                defaults
            }
        };

        let mut store = Self {
            storage,
            columns: columns.to_vec(),
            state,
        };
        store.pin_columns();
        debug!(state = ?store.state, "column visibility loaded");
        store
    }

    /// Current state.
    pub fn get(&self) -> &VisibilityState {
        &self.state
    }

    pub fn is_visible(&self, column: ColumnId) -> bool {
        self.state.is_visible(column)
    }

    /// Flip a column. Pinned (non-hidable) columns are left untouched.
    pub fn toggle(&mut self, column: ColumnId) -> &VisibilityState {
        let visible = self.state.is_visible(column);
        self.set(column, !visible)
    }

    /// Show or hide a column. Pinned (non-hidable) columns are left untouched.
    pub fn set(&mut self, column: ColumnId, visible: bool) -> &VisibilityState {
        if !self.is_hidable(column) {
            debug!(%column, "ignoring visibility change for pinned column");
            return &self.state;
        }
        if self.state.is_visible(column) != visible {
            self.state.0.insert(column, visible);
            debug!(%column, visible, "column visibility changed");
            self.persist();
        }
        &self.state
    }

    /// Whether the column may be hidden.
    pub fn is_hidable(&self, column: ColumnId) -> bool {
        self.columns
            .iter()
            .find(|c| c.id == column)
            .is_some_and(|c| c.hidable)
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn pin_columns(&mut self) {
        for column in self.columns.iter().filter(|c| !c.hidable) {
            self.state.0.insert(column.id, true);
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not encode column visibility");
                return;
            }
        };
        if let Err(e) = self.storage.save(VISIBILITY_STORAGE_KEY, &json) {
            warn!(error = %e, "could not persist column visibility");
        }
    }
}
