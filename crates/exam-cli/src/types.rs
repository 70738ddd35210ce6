use std::path::PathBuf;

use exam_ingest::DatasetFormat;
use exam_model::ValidationReport;
use serde_json::Value;

/// Dataset is valid, or failures were not asked to fail the run.
pub const EXIT_OK: i32 = 0;
/// Validation found at least one error.
pub const EXIT_INVALID: i32 = 1;
/// The dataset could not be loaded or the report could not be written.
pub const EXIT_FATAL: i32 = 2;

/// Everything the renderer needs after one `validate` run.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub json_path: PathBuf,
    /// Expected language after normalization.
    pub language: String,
    pub format: DatasetFormat,
    /// Raw entries, kept to preview failing questions.
    pub entries: Vec<Value>,
    pub report: ValidationReport,
    pub report_path: Option<PathBuf>,
}

impl ValidationOutcome {
    pub fn exit_code(&self, fail_on_errors: bool) -> i32 {
        if fail_on_errors && !self.report.is_valid() {
            EXIT_INVALID
        } else {
            EXIT_OK
        }
    }

    pub fn entry(&self, index: usize) -> Option<&Value> {
        self.entries.get(index)
    }
}
