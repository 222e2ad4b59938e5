//! Column visibility: which columns are shown, persisted across sessions.
//!
//! - **ColumnVisibilityStore**: the state owner; rejects hiding pinned columns
//! - **KeyValueStorage**: the persistence collaborator it writes through to

pub mod storage;
pub mod store;

pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage};
pub use store::{ColumnVisibilityStore, VisibilityState, VISIBILITY_STORAGE_KEY};
