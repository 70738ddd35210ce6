//! Declared shape of an exam entry.
//!
//! The schema is data: one [`FieldSpec`] row per field and one
//! [`CrossFieldRule`] per multi-field invariant. The engine walks these
//! tables; adding a field means adding a row.

use exam_model::{IMAGE_INFORMATION, IMAGE_TYPES};

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Absent and `null` are equivalent.
    Optional,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Required => "required",
            Presence::Optional => "optional",
        }
    }
}

/// Expected JSON shape of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    Integer,
    /// Either a string or an integer.
    StringOrInteger,
    StringList,
    /// Two-element list of a string and an integer.
    StringIntegerPair,
}

impl Shape {
    pub fn label(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Integer => "integer",
            Shape::StringOrInteger => "string or integer",
            Shape::StringList => "list of strings",
            Shape::StringIntegerPair => "[string, integer] pair",
        }
    }
}

/// Semantic constraint run once a field has the declared shape.
///
/// String constraints apply to every string inside the value: the value
/// itself, each list element, or the string half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NonEmptyTrimmed,
    OneOf(&'static [&'static str]),
    MinLength(usize),
    UniqueValues,
    /// Integer must be a valid index into the named list field.
    IndexInto(&'static str),
}

impl Constraint {
    pub fn describe(&self) -> String {
        match self {
            Constraint::NonEmptyTrimmed => "non-empty, trimmed".to_string(),
            Constraint::OneOf(values) => format!("one of: {}", values.join(", ")),
            Constraint::MinLength(min) => format!("at least {min} items"),
            Constraint::UniqueValues => "unique values".to_string(),
            Constraint::IndexInto(field) => format!("valid index into {field}"),
        }
    }
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    pub shape: Shape,
    pub constraints: &'static [Constraint],
}

/// Rule whose outcome depends on more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// The listed fields are all absent or all present.
    AllOrNone(&'static [&'static str]),
    /// The field equals the language expected by the run.
    MatchesExpectedLanguage(&'static str),
}

const TEXT: &[Constraint] = &[Constraint::NonEmptyTrimmed];

const ENTRY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "language",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: &[],
    },
    FieldSpec {
        name: "country",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "file_name",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "source",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "license",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "level",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "category_en",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "category_original_lang",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "original_question_num",
        presence: Presence::Required,
        shape: Shape::StringOrInteger,
        constraints: &[],
    },
    FieldSpec {
        name: "question",
        presence: Presence::Required,
        shape: Shape::String,
        constraints: TEXT,
    },
    FieldSpec {
        name: "options",
        presence: Presence::Required,
        shape: Shape::StringList,
        constraints: &[
            Constraint::MinLength(2),
            Constraint::NonEmptyTrimmed,
            Constraint::UniqueValues,
        ],
    },
    FieldSpec {
        name: "answer",
        presence: Presence::Required,
        shape: Shape::Integer,
        constraints: &[Constraint::IndexInto("options")],
    },
    FieldSpec {
        name: "image_png",
        presence: Presence::Optional,
        shape: Shape::String,
        constraints: &[],
    },
    FieldSpec {
        name: "image_information",
        presence: Presence::Optional,
        shape: Shape::String,
        constraints: &[Constraint::OneOf(IMAGE_INFORMATION)],
    },
    FieldSpec {
        name: "image_type",
        presence: Presence::Optional,
        shape: Shape::String,
        constraints: &[Constraint::OneOf(IMAGE_TYPES)],
    },
    FieldSpec {
        name: "parallel_question_id",
        presence: Presence::Optional,
        shape: Shape::StringIntegerPair,
        constraints: TEXT,
    },
];

const IMAGE_FIELDS: &[&str] = &["image_png", "image_information", "image_type"];

const ENTRY_RULES: &[CrossFieldRule] = &[
    CrossFieldRule::AllOrNone(IMAGE_FIELDS),
    CrossFieldRule::MatchesExpectedLanguage("language"),
];

/// Field and rule tables for one record shape.
#[derive(Debug, Clone, Copy)]
pub struct EntrySchema {
    fields: &'static [FieldSpec],
    rules: &'static [CrossFieldRule],
}

impl EntrySchema {
    /// Schema of a multiple-choice exam question.
    pub fn exam_question() -> Self {
        Self {
            fields: ENTRY_FIELDS,
            rules: ENTRY_RULES,
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn rules(&self) -> &'static [CrossFieldRule] {
        self.rules
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl Default for EntrySchema {
    fn default() -> Self {
        Self::exam_question()
    }
}
