//! Machine-readable export of a validation report.

use std::path::Path;

use exam_model::ValidationReport;
use tracing::info;

use crate::error::{ReportError, Result};

/// Render the report as pretty-printed JSON.
pub fn render_report_json(report: &ValidationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report as JSON, replacing any existing file.
pub fn write_report_json(report: &ValidationReport, path: &Path) -> Result<()> {
    let mut json = render_report_json(report)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        errors = report.error_count(),
        "wrote validation report"
    );
    Ok(())
}
