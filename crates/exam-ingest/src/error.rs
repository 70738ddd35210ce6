//! Error types for dataset loading.
//!
//! Every variant is fatal for the file it concerns: no entries are
//! validated when loading fails.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading dataset files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither a JSON document nor JSON Lines.
    #[error("failed to parse {path} as JSON (line {line}): {source}")]
    JsonParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value is not a list of entries.
    #[error("expected a JSON list of entries in {path}, found {found}")]
    NotAList { path: PathBuf, found: &'static str },

    /// A JSON Lines record that is not an object.
    #[error("expected one JSON object per line in {path}, found {found} on line {line}")]
    NotARecord {
        path: PathBuf,
        line: usize,
        found: &'static str,
    },

    /// File contains no JSON at all.
    #[error("dataset file is empty: {path}")]
    Empty { path: PathBuf },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
