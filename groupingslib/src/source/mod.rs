//! Source: where records come from.
//!
//! The engine treats records as read-only input. This module only knows how
//! to decode them from the JSON shapes the groupings API produces.

pub mod loader;

pub use loader::{load_records, parse_records};
