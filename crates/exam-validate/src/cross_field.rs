//! Cross-field rules, evaluated after every field-level check.

use exam_model::{FieldPath, ValidationError, ViolationKind};

use crate::decode::Candidate;
use crate::schema::CrossFieldRule;

pub const IMAGE_GROUP_MESSAGE: &str = "all image fields must be specified together";

/// Evaluate one cross-field rule against a decoded entry.
pub fn check_rule(
    rule: &CrossFieldRule,
    entry_index: usize,
    candidate: &Candidate<'_>,
    expected_language: &str,
) -> Option<ValidationError> {
    match rule {
        CrossFieldRule::AllOrNone(fields) => {
            let present = fields
                .iter()
                .filter(|field| candidate.is_present(field))
                .count();
            if present == 0 || present == fields.len() {
                return None;
            }
            Some(ValidationError::entry(
                entry_index,
                ViolationKind::IncompleteImageGroup,
                IMAGE_GROUP_MESSAGE,
            ))
        }
        CrossFieldRule::MatchesExpectedLanguage(field) => {
            // Missing or mistyped values are reported by the field checks.
            let actual = candidate.string(field)?;
            if actual == expected_language {
                return None;
            }
            Some(ValidationError::at(
                entry_index,
                FieldPath::field(*field),
                ViolationKind::LanguageMismatch,
                format!("expected language {expected_language:?}, found {actual:?}"),
            ))
        }
    }
}
