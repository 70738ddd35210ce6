//! Data model for exam dataset validation.

pub mod issue;
pub mod kind;
pub mod path;
pub mod preview;
pub mod report;
pub mod vocabulary;

pub use issue::{ValidationError, ViolationKind};
pub use kind::json_kind;
pub use path::FieldPath;
pub use preview::QuestionPreview;
pub use report::ValidationReport;
pub use vocabulary::{IMAGE_INFORMATION, IMAGE_TYPES};
