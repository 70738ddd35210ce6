//! Outputs built on top of validation: JSON report export and dataset
//! statistics.

pub mod error;
pub mod export;
pub mod stats;

pub use error::{ReportError, Result};
pub use export::{render_report_json, write_report_json};
pub use stats::{
    DEFAULT_GROUPING_FIELDS, DatasetStatistics, FileStatistics, ModalityCounts, SkippedFile,
    collect_statistics, is_image_related,
};
