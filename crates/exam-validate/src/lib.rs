//! Validation of multiple-choice exam datasets.
//!
//! Given the untyped entries of one dataset file and the language the file
//! is supposed to be in, [`DatasetValidator::validate`] produces a complete
//! [`ValidationReport`]: every violation of every entry, each located by a
//! field path. Evaluation is never fail-fast.
//!
//! - **Constraint primitives**: non-empty trimmed strings, set membership,
//!   list uniqueness, minimum length, index range
//! - **Entry schema**: a table of field specs (presence, shape, constraints)
//!   and cross-field rules
//! - **Decoding**: untyped JSON values become typed field values before any
//!   semantic check runs
//! - **Cross-field rules**: the image field group and the expected language
//!
//! # Example
//!
//! ```
//! use exam_validate::DatasetValidator;
//! use serde_json::json;
//!
//! let entries = vec![json!({"language": "en"})];
//! let report = DatasetValidator::default().validate(&entries, "en");
//! assert!(!report.is_valid());
//! for error in report.errors() {
//!     println!("{error}");
//! }
//! ```

pub mod constraints;
mod cross_field;
pub mod decode;
mod engine;
mod error;
mod rules;
pub mod schema;

pub use constraints::Violation;
pub use cross_field::IMAGE_GROUP_MESSAGE;
pub use engine::{DatasetValidator, validate};
pub use error::EvaluationError;
pub use exam_model::{FieldPath, ValidationError, ValidationReport, ViolationKind};
pub use schema::{Constraint, CrossFieldRule, EntrySchema, FieldSpec, Presence, Shape};
