//! Validation error types.
//!
//! A `ValidationError` is plain data: it is created once while an entry is
//! evaluated and never mutated afterwards.

use serde::Serialize;
use std::fmt;

use crate::path::FieldPath;

/// Kind of rule an error comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field is absent.
    Missing,
    /// Field is not part of the schema.
    UnexpectedField,
    /// Value has the wrong JSON shape (string, integer, list, tuple).
    Shape,
    /// String is empty, whitespace-only or padded with whitespace.
    Blank,
    /// List contains the same value more than once.
    Duplicate,
    /// List has fewer elements than required.
    TooShort,
    /// Integer outside its allowed range.
    OutOfRange,
    /// Value is not one of the allowed values.
    NotAllowed,
    /// `language` differs from the language the run expects.
    LanguageMismatch,
    /// Image fields only partially present.
    IncompleteImageGroup,
    /// The entry could not be evaluated at all.
    Evaluation,
}

impl ViolationKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "Missing",
            Self::UnexpectedField => "Unexpected field",
            Self::Shape => "Shape",
            Self::Blank => "Blank",
            Self::Duplicate => "Duplicate",
            Self::TooShort => "Too short",
            Self::OutOfRange => "Out of range",
            Self::NotAllowed => "Not allowed",
            Self::LanguageMismatch => "Language mismatch",
            Self::IncompleteImageGroup => "Image group",
            Self::Evaluation => "Evaluation",
        }
    }

    /// Whether the kind comes from a rule spanning several fields.
    pub fn is_cross_field(&self) -> bool {
        matches!(self, Self::LanguageMismatch | Self::IncompleteImageGroup)
    }
}

/// One violation found in one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Zero-based position of the entry in the input list.
    pub entry_index: usize,
    /// Location inside the entry; `None` for entry-level violations.
    pub field_path: Option<FieldPath>,
    pub kind: ViolationKind,
    pub message: String,
}

impl ValidationError {
    /// Error located at a field (or list element) of the entry.
    pub fn at(
        entry_index: usize,
        path: FieldPath,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entry_index,
            field_path: Some(path),
            kind,
            message: message.into(),
        }
    }

    /// Error about the entry as a whole.
    pub fn entry(entry_index: usize, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            entry_index,
            field_path: None,
            kind,
            message: message.into(),
        }
    }

    pub fn is_entry_level(&self) -> bool {
        self.field_path.is_none()
    }

    /// Location rendered for display, `<entry>` for entry-level errors.
    pub fn location(&self) -> String {
        match &self.field_path {
            Some(path) => path.to_string(),
            None => "<entry>".to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry {} at {}: {}",
            self.entry_index,
            self.location(),
            self.message
        )
    }
}
