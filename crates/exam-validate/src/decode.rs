//! Typed decoding of untyped entry fields.
//!
//! Each declared field is decoded from its JSON value into a [`FieldValue`]
//! borrowing from the entry. A value of the wrong shape becomes a single
//! [`ShapeMismatch`]; semantic constraints only ever see decoded values.

use std::collections::{BTreeMap, BTreeSet};

use exam_model::{ViolationKind, json_kind};
use serde_json::Value;

use crate::constraints::Violation;
use crate::schema::{FieldSpec, Presence, Shape};

/// A field value that has the shape its spec declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    String(&'a str),
    Integer(i128),
    StringList(Vec<&'a str>),
    StringIntegerPair(&'a str, i128),
}

impl FieldValue<'_> {
    pub fn shape_label(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::StringList(_) => "list of strings",
            FieldValue::StringIntegerPair(..) => "[string, integer] pair",
        }
    }
}

/// A value whose JSON shape does not match the declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// Element position, when a single element of a list is at fault.
    pub index: Option<usize>,
    pub expected: &'static str,
    pub found: String,
}

impl ShapeMismatch {
    fn whole(expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            index: None,
            expected,
            found: found.into(),
        }
    }

    fn element(index: usize, expected: &'static str, value: &Value) -> Self {
        Self {
            index: Some(index),
            expected,
            found: json_kind(value).to_string(),
        }
    }

    pub fn to_violation(&self) -> Violation {
        Violation::new(
            ViolationKind::Shape,
            format!("expected {}, found {}", self.expected, self.found),
        )
    }
}

/// Result of decoding one declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// Key missing, or `null` on an optional field.
    Absent,
    Value(FieldValue<'a>),
    Mismatch(ShapeMismatch),
}

/// Decode the raw value of `spec` taken from an entry.
pub fn decode_field<'a>(spec: &FieldSpec, raw: Option<&'a Value>) -> Decoded<'a> {
    match raw {
        None => Decoded::Absent,
        Some(Value::Null) if spec.presence == Presence::Optional => Decoded::Absent,
        Some(value) => match decode_shape(spec.shape, value) {
            Ok(decoded) => Decoded::Value(decoded),
            Err(mismatch) => Decoded::Mismatch(mismatch),
        },
    }
}

fn decode_shape(shape: Shape, value: &Value) -> Result<FieldValue<'_>, ShapeMismatch> {
    match shape {
        Shape::String => value
            .as_str()
            .map(FieldValue::String)
            .ok_or_else(|| ShapeMismatch::whole(shape.label(), json_kind(value))),
        Shape::Integer => as_integer(value)
            .map(FieldValue::Integer)
            .ok_or_else(|| ShapeMismatch::whole(shape.label(), json_kind(value))),
        Shape::StringOrInteger => match value {
            Value::String(text) => Ok(FieldValue::String(text)),
            other => as_integer(other)
                .map(FieldValue::Integer)
                .ok_or_else(|| ShapeMismatch::whole(shape.label(), json_kind(other))),
        },
        Shape::StringList => {
            let Value::Array(items) = value else {
                return Err(ShapeMismatch::whole(shape.label(), json_kind(value)));
            };
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_str()
                        .ok_or_else(|| ShapeMismatch::element(index, "string", item))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::StringList)
        }
        Shape::StringIntegerPair => {
            let Value::Array(items) = value else {
                return Err(ShapeMismatch::whole(shape.label(), json_kind(value)));
            };
            let [first, second] = items.as_slice() else {
                return Err(ShapeMismatch::whole(
                    shape.label(),
                    format!("list of {} items", items.len()),
                ));
            };
            let text = first
                .as_str()
                .ok_or_else(|| ShapeMismatch::element(0, "string", first))?;
            let number =
                as_integer(second).ok_or_else(|| ShapeMismatch::element(1, "integer", second))?;
            Ok(FieldValue::StringIntegerPair(text, number))
        }
    }
}

/// JSON integers only; floats and booleans are rejected.
fn as_integer(value: &Value) -> Option<i128> {
    let Value::Number(number) = value else {
        return None;
    };
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

/// Decoded view of one entry, filled field by field.
#[derive(Debug, Clone, Default)]
pub struct Candidate<'a> {
    values: BTreeMap<&'static str, FieldValue<'a>>,
    present: BTreeSet<&'static str>,
}

impl<'a> Candidate<'a> {
    /// Record that the entry carries a non-null value for `name`.
    pub fn mark_present(&mut self, name: &'static str) {
        self.present.insert(name);
    }

    pub fn insert(&mut self, name: &'static str, value: FieldValue<'a>) {
        self.values.insert(name, value);
    }

    /// Present with a non-null value, whether or not it decoded.
    pub fn is_present(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    /// Successfully decoded value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue<'a>> {
        self.values.get(name)
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.values.get(name) {
            Some(FieldValue::String(text)) => Some(*text),
            _ => None,
        }
    }
}
