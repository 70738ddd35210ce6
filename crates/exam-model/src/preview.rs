//! Lenient read-only view of an entry for display purposes.

use serde_json::Value;

/// The parts of an entry a reviewer needs to locate a failing question.
///
/// Extraction never fails: values of the wrong shape are rendered as JSON
/// text or left out, since the entry may be the one being reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPreview {
    pub question: Option<String>,
    pub options: Vec<String>,
    pub answer: Option<String>,
}

impl QuestionPreview {
    pub fn from_entry(entry: &Value) -> Self {
        let Some(record) = entry.as_object() else {
            return Self::default();
        };
        let question = record.get("question").map(display_value);
        let options = match record.get("options") {
            Some(Value::Array(items)) => items.iter().map(display_value).collect(),
            _ => Vec::new(),
        };
        let answer = record.get("answer").map(display_value);
        Self {
            question,
            options,
            answer,
        }
    }

    /// Options numbered from 1, one per line.
    pub fn numbered_options(&self) -> String {
        self.options
            .iter()
            .enumerate()
            .map(|(position, option)| format!("{}. {}", position + 1, option))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preview_numbers_options_from_one() {
        let entry = json!({"question": "2+2?", "options": ["3", "4"], "answer": 1});
        let preview = QuestionPreview::from_entry(&entry);
        assert_eq!(preview.question.as_deref(), Some("2+2?"));
        assert_eq!(preview.numbered_options(), "1. 3\n2. 4");
        assert_eq!(preview.answer.as_deref(), Some("1"));
    }

    #[test]
    fn preview_tolerates_malformed_entries() {
        let preview = QuestionPreview::from_entry(&json!({"options": "A"}));
        assert!(preview.options.is_empty());
        assert_eq!(QuestionPreview::from_entry(&json!(42)), QuestionPreview::default());
    }
}
