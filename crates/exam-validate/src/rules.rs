//! Field-level constraint evaluation.
//!
//! Binds the schema's [`Constraint`] descriptors to the primitives in
//! [`crate::constraints`] for a decoded field value.

use crate::constraints::{
    Check, Violation, min_length, non_empty_trimmed, one_of, range_inclusive_exclusive,
    unique_values,
};
use crate::decode::{Candidate, FieldValue};
use crate::error::EvaluationError;
use crate::schema::{Constraint, FieldSpec};

/// A violation with its position inside the field, if any.
pub type Located = (Option<usize>, Violation);

/// Run one constraint against a decoded field value.
///
/// `candidate` gives access to other decoded fields of the same entry for
/// constraints with a same-entry dependency.
pub fn apply_constraint<'a>(
    spec: &FieldSpec,
    constraint: &Constraint,
    value: &FieldValue<'a>,
    candidate: &Candidate<'a>,
) -> Result<Vec<Located>, EvaluationError> {
    let located = match (constraint, value) {
        (Constraint::NonEmptyTrimmed, FieldValue::String(text)) => {
            whole(non_empty_trimmed(text))
        }
        (Constraint::NonEmptyTrimmed, FieldValue::StringList(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| non_empty_trimmed(item).err().map(|v| (Some(index), v)))
            .collect(),
        (Constraint::NonEmptyTrimmed, FieldValue::StringIntegerPair(text, _)) => {
            at(0, non_empty_trimmed(text))
        }
        // The integer side of a string-or-integer union has no text to check.
        (Constraint::NonEmptyTrimmed, FieldValue::Integer(_)) => Vec::new(),
        (Constraint::OneOf(allowed), FieldValue::String(text)) => whole(one_of(text, allowed)),
        (Constraint::MinLength(min), FieldValue::StringList(items)) => {
            whole(min_length(items.len(), *min))
        }
        (Constraint::UniqueValues, FieldValue::StringList(items)) => whole(unique_values(items)),
        (Constraint::IndexInto(target), FieldValue::Integer(index)) => match candidate.get(target)
        {
            Some(FieldValue::StringList(items)) => {
                // usize always fits in i128.
                whole(range_inclusive_exclusive(*index, 0, items.len() as i128))
            }
            // Target absent or of the wrong shape: already reported there.
            None => Vec::new(),
            Some(other) => {
                return Err(EvaluationError::UnsupportedConstraint {
                    field: spec.name,
                    constraint: constraint.describe(),
                    shape: other.shape_label(),
                });
            }
        },
        (constraint, value) => {
            return Err(EvaluationError::UnsupportedConstraint {
                field: spec.name,
                constraint: constraint.describe(),
                shape: value.shape_label(),
            });
        }
    };
    Ok(located)
}

fn whole(check: Check) -> Vec<Located> {
    check.err().map(|v| (None, v)).into_iter().collect()
}

fn at(index: usize, check: Check) -> Vec<Located> {
    check.err().map(|v| (Some(index), v)).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Presence, Shape};
    use exam_model::ViolationKind;

    const ANSWER: FieldSpec = FieldSpec {
        name: "answer",
        presence: Presence::Required,
        shape: Shape::Integer,
        constraints: &[Constraint::IndexInto("options")],
    };

    #[test]
    fn index_into_reads_sibling_list() {
        let mut candidate = Candidate::default();
        candidate.insert("options", FieldValue::StringList(vec!["A", "B"]));

        let ok = apply_constraint(
            &ANSWER,
            &Constraint::IndexInto("options"),
            &FieldValue::Integer(1),
            &candidate,
        )
        .unwrap();
        assert!(ok.is_empty());

        let out = apply_constraint(
            &ANSWER,
            &Constraint::IndexInto("options"),
            &FieldValue::Integer(2),
            &candidate,
        )
        .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].1.kind, ViolationKind::OutOfRange);
    }

    #[test]
    fn index_into_bounds_follow_list_length() {
        let mut candidate = Candidate::default();
        candidate.insert("options", FieldValue::StringList(vec!["A", "B", "C"]));
        let check = |index| {
            apply_constraint(
                &ANSWER,
                &Constraint::IndexInto("options"),
                &FieldValue::Integer(index),
                &candidate,
            )
            .unwrap()
        };
        assert!(check(2).is_empty());
        assert_eq!(check(3)[0].1.message, "value 3 must be in range [0, 3)");
        assert_eq!(check(i128::from(u64::MAX)).len(), 1);
    }

    #[test]
    fn index_into_skips_when_sibling_missing() {
        let out = apply_constraint(
            &ANSWER,
            &Constraint::IndexInto("options"),
            &FieldValue::Integer(9),
            &Candidate::default(),
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn mismatched_descriptor_is_an_evaluation_error() {
        let error = apply_constraint(
            &ANSWER,
            &Constraint::UniqueValues,
            &FieldValue::Integer(1),
            &Candidate::default(),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            EvaluationError::UnsupportedConstraint {
                field: "answer",
                ..
            }
        ));
    }

    #[test]
    fn blank_list_elements_are_located_by_index() {
        let out = apply_constraint(
            &ANSWER,
            &Constraint::NonEmptyTrimmed,
            &FieldValue::StringList(vec!["A", " ", "C", "D "]),
            &Candidate::default(),
        )
        .unwrap();
        let indices: Vec<_> = out.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![Some(1), Some(3)]);
    }
}
