//! Loading grouping records from JSON.
//!
//! The groupings API answers with an envelope:
//!
//! ```json
//! { "resultCode": "SUCCESS", "groupingPaths": [ { "name": ..., "description": ..., "path": ... } ] }
//! ```
//!
//! A bare array of records is accepted as well.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::record::GroupingRecord;
use crate::error::GroupingsError;
use crate::Result;

/// Envelope returned by the owner-groupings endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupingPathsResponse {
    #[serde(default)]
    result_code: Option<String>,
    grouping_paths: Vec<GroupingRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Envelope(GroupingPathsResponse),
    List(Vec<GroupingRecord>),
}

/// Parse records from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<GroupingRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let kind = match &value {
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
        _ => {
            return Err(GroupingsError::UnexpectedDocument(
                "expected an array or an object with `groupingPaths`".to_string(),
            ))
        }
    };

    let document: RecordsDocument = serde_json::from_value(value).map_err(|e| {
        GroupingsError::UnexpectedDocument(format!("{kind} did not contain grouping records: {e}"))
    })?;

    let records = match document {
        RecordsDocument::Envelope(response) => {
            debug!(
                result_code = response.result_code.as_deref().unwrap_or("-"),
                count = response.grouping_paths.len(),
                "parsed groupingPaths envelope"
            );
            response.grouping_paths
        }
        RecordsDocument::List(records) => records,
    };

    Ok(records)
}

/// Load records from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<GroupingRecord>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| GroupingsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&json)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
