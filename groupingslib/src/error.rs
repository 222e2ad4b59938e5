//! Error types for groupingslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading records or talking to storage.
///
/// The table engine itself never fails: corrupt persisted state, out of
/// range navigation and unmeasurable cells are all recovered locally.
#[derive(Error, Debug)]
pub enum GroupingsError {
    /// Failed to read a records file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed JSON input
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Records document had neither a list nor a `groupingPaths` envelope
    #[error("unexpected records document: {0}")]
    UnexpectedDocument(String),

    /// Storage backend failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Column identifier that matches no known column
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
