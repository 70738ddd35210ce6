//! Dataset validator.
//!
//! Walks every entry once, applying the schema's field table and then its
//! cross-field rules. Entries are independent: a failure while evaluating
//! one entry is recorded against that entry and the run continues.

use exam_model::{FieldPath, ValidationError, ValidationReport, ViolationKind, json_kind};
use serde_json::{Map, Value};
use tracing::{debug, info, info_span};

use crate::cross_field::check_rule;
use crate::decode::{Candidate, Decoded, decode_field};
use crate::error::EvaluationError;
use crate::rules::apply_constraint;
use crate::schema::{EntrySchema, Presence};

/// Validates dataset entries against an [`EntrySchema`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetValidator {
    schema: EntrySchema,
}

impl DatasetValidator {
    pub fn new(schema: EntrySchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &EntrySchema {
        &self.schema
    }

    /// Validate all entries; `expected_language` is compared verbatim.
    pub fn validate(&self, entries: &[Value], expected_language: &str) -> ValidationReport {
        let span = info_span!(
            "validate",
            entries = entries.len(),
            language = %expected_language
        );
        let _guard = span.enter();

        let mut errors = Vec::new();
        for (entry_index, entry) in entries.iter().enumerate() {
            let before = errors.len();
            if let Err(failure) =
                self.validate_entry(entry_index, entry, expected_language, &mut errors)
            {
                errors.push(ValidationError::entry(
                    entry_index,
                    ViolationKind::Evaluation,
                    failure.to_string(),
                ));
            }
            let found = errors.len() - before;
            if found > 0 {
                debug!(entry_index, errors = found, "entry failed validation");
            }
        }

        let report = ValidationReport::new(entries.len(), errors);
        info!(
            entries = report.entry_count(),
            errors = report.error_count(),
            invalid_entries = report.invalid_entries().len(),
            "validation finished"
        );
        report
    }

    /// Validate one entry, appending its errors to `errors`.
    ///
    /// Errors pushed before an evaluation failure are kept.
    pub fn validate_entry(
        &self,
        entry_index: usize,
        entry: &Value,
        expected_language: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), EvaluationError> {
        let record = entry.as_object().ok_or(EvaluationError::NotAnObject {
            found: json_kind(entry),
        })?;

        // Decode everything first so same-entry dependencies can be
        // resolved regardless of declaration order.
        let mut candidate = Candidate::default();
        let mut shape_failures = Vec::with_capacity(self.schema.fields().len());
        for spec in self.schema.fields() {
            let raw = record.get(spec.name);
            if raw.is_some_and(|value| !value.is_null()) {
                candidate.mark_present(spec.name);
            }
            let failure = match decode_field(spec, raw) {
                Decoded::Absent if spec.presence == Presence::Required => Some(
                    ValidationError::at(
                        entry_index,
                        FieldPath::field(spec.name),
                        ViolationKind::Missing,
                        "field required",
                    ),
                ),
                Decoded::Absent => None,
                Decoded::Mismatch(mismatch) => {
                    let violation = mismatch.to_violation();
                    Some(ValidationError::at(
                        entry_index,
                        field_path(spec.name, mismatch.index),
                        violation.kind,
                        violation.message,
                    ))
                }
                Decoded::Value(value) => {
                    candidate.insert(spec.name, value);
                    None
                }
            };
            shape_failures.push(failure);
        }

        for (spec, failure) in self.schema.fields().iter().zip(shape_failures) {
            if let Some(error) = failure {
                errors.push(error);
                continue;
            }
            let Some(value) = candidate.get(spec.name) else {
                continue;
            };
            for constraint in spec.constraints {
                for (index, violation) in apply_constraint(spec, constraint, value, &candidate)? {
                    errors.push(ValidationError::at(
                        entry_index,
                        field_path(spec.name, index),
                        violation.kind,
                        violation.message,
                    ));
                }
            }
        }

        self.check_unexpected_fields(entry_index, record, errors);

        for rule in self.schema.rules() {
            if let Some(error) = check_rule(rule, entry_index, &candidate, expected_language) {
                errors.push(error);
            }
        }
        Ok(())
    }

    fn check_unexpected_fields(
        &self,
        entry_index: usize,
        record: &Map<String, Value>,
        errors: &mut Vec<ValidationError>,
    ) {
        for key in record.keys() {
            if !self.schema.is_declared(key) {
                errors.push(ValidationError::at(
                    entry_index,
                    FieldPath::field(key.as_str()),
                    ViolationKind::UnexpectedField,
                    "unexpected field",
                ));
            }
        }
    }
}

fn field_path(name: &str, index: Option<usize>) -> FieldPath {
    let path = FieldPath::field(name);
    match index {
        Some(index) => path.index(index),
        None => path,
    }
}

/// Validate entries against the exam question schema.
pub fn validate(entries: &[Value], expected_language: &str) -> ValidationReport {
    DatasetValidator::default().validate(entries, expected_language)
}
