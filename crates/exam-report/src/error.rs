use std::path::PathBuf;
use thiserror::Error;

use exam_ingest::IngestError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
