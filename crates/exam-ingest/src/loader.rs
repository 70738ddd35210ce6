//! Dataset file loading.
//!
//! A dataset file is one JSON array of entries. Files exported line by line
//! (one JSON object per line) are accepted as a fallback. Entries are kept
//! untyped; shape checking belongs to the validator.

use std::path::{Path, PathBuf};

use exam_model::json_kind;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// How the entries were laid out in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// A single JSON array.
    JsonArray,
    /// One JSON value per non-blank line.
    JsonLines,
}

/// Entries read from one dataset file.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub path: PathBuf,
    pub format: DatasetFormat,
    pub entries: Vec<Value>,
}

impl LoadedDataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read and parse a dataset file.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let (entries, format) = parse_dataset(&text, path)?;
    debug!(
        path = %path.display(),
        entries = entries.len(),
        ?format,
        "loaded dataset"
    );
    Ok(LoadedDataset {
        path: path.to_path_buf(),
        format,
        entries,
    })
}

/// Parse dataset text; `path` is only used for error reporting.
pub fn parse_dataset(text: &str, path: &Path) -> Result<(Vec<Value>, DatasetFormat)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }

    let document_error = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(entries)) => return Ok((entries, DatasetFormat::JsonArray)),
        Ok(other) => {
            return Err(IngestError::NotAList {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
        Err(error) => error,
    };

    // A broken array or a single-line document is not JSON Lines; the
    // document error points at the real problem.
    let trimmed = text.trim();
    if trimmed.starts_with('[') || trimmed.lines().count() < 2 {
        return Err(IngestError::JsonParse {
            path: path.to_path_buf(),
            line: document_error.line(),
            source: document_error,
        });
    }

    warn!(
        path = %path.display(),
        "file is not a single JSON document, reading as JSON Lines"
    );
    let mut entries = Vec::new();
    for (offset, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = offset + 1;
        let value =
            serde_json::from_str::<Value>(line).map_err(|source| IngestError::JsonParse {
                path: path.to_path_buf(),
                line: line_number,
                source,
            })?;
        if !value.is_object() {
            return Err(IngestError::NotARecord {
                path: path.to_path_buf(),
                line: line_number,
                found: json_kind(&value),
            });
        }
        entries.push(value);
    }
    Ok((entries, DatasetFormat::JsonLines))
}
