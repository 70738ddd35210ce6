//! Constraint primitives.
//!
//! Pure predicates over values already extracted from an entry. They know
//! nothing about field names; the schema attaches locations to failures.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use exam_model::ViolationKind;

/// A failed constraint, not yet attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub type Check = Result<(), Violation>;

/// Fails on empty, whitespace-only, or whitespace-padded strings.
pub fn non_empty_trimmed(value: &str) -> Check {
    if value.trim().is_empty() {
        return Err(Violation::new(
            ViolationKind::Blank,
            "value must not be empty or whitespace",
        ));
    }
    if value.trim() != value {
        return Err(Violation::new(
            ViolationKind::Blank,
            format!("value must not have leading or trailing whitespace: {value:?}"),
        ));
    }
    Ok(())
}

/// Fails if any value occurs more than once.
///
/// The message names each repeated value with every index it occurs at.
pub fn unique_values<T: Eq + Hash + Debug>(items: &[T]) -> Check {
    let mut positions: HashMap<&T, Vec<usize>> = HashMap::new();
    let mut order: Vec<&T> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let seen = positions.entry(item).or_default();
        if seen.len() == 1 {
            order.push(item);
        }
        seen.push(index);
    }
    if order.is_empty() {
        return Ok(());
    }
    let described: Vec<String> = order
        .iter()
        .map(|item| {
            let indices: Vec<String> = positions[item].iter().map(ToString::to_string).collect();
            format!("{item:?} at indices {}", indices.join(", "))
        })
        .collect();
    Err(Violation::new(
        ViolationKind::Duplicate,
        format!("values must be unique, found {}", described.join("; ")),
    ))
}

/// Fails if a list has fewer than `min` elements.
pub fn min_length(len: usize, min: usize) -> Check {
    if len < min {
        return Err(Violation::new(
            ViolationKind::TooShort,
            format!("list must contain at least {min} items, found {len}"),
        ));
    }
    Ok(())
}

/// Fails unless `lower <= value < upper_exclusive`.
pub fn range_inclusive_exclusive(value: i128, lower: i128, upper_exclusive: i128) -> Check {
    if value < lower || value >= upper_exclusive {
        return Err(Violation::new(
            ViolationKind::OutOfRange,
            format!("value {value} must be in range [{lower}, {upper_exclusive})"),
        ));
    }
    Ok(())
}

/// Fails unless `value` is exactly one of `allowed` (case-sensitive).
pub fn one_of(value: &str, allowed: &[&str]) -> Check {
    if allowed.contains(&value) {
        return Ok(());
    }
    let listed: Vec<String> = allowed.iter().map(|item| format!("{item:?}")).collect();
    Err(Violation::new(
        ViolationKind::NotAllowed,
        format!("value {value:?} must be one of {}", listed.join(", ")),
    ))
}
