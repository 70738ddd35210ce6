//! Failures of the evaluation itself, as opposed to rule violations.
//!
//! These never leave the engine: each one becomes an entry-level
//! [`exam_model::ValidationError`] of kind `Evaluation`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("entry is not an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("constraint '{constraint}' cannot apply to field {field} holding a {shape}")]
    UnsupportedConstraint {
        field: &'static str,
        constraint: String,
        shape: &'static str,
    },
}
