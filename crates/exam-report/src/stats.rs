//! Dataset statistics across a directory of exam files.
//!
//! Counts questions per value of selected fields and splits each file into
//! text-only and image-bearing (multimodal) questions. Files that cannot be
//! loaded are skipped and listed, never fatal.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use exam_ingest::{DatasetFile, discover_dataset_files, load_dataset};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;

/// Fields questions are grouped by when none are requested.
pub const DEFAULT_GROUPING_FIELDS: &[&str] = &[
    "language",
    "country",
    "level",
    "category_en",
    "image_type",
    "image_information",
];

/// Option suffixes that mark an option as an image reference.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif"];

/// Text-only versus image-bearing questions in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModalityCounts {
    pub multimodal: usize,
    pub text: usize,
    pub total: usize,
}

impl ModalityCounts {
    fn add(&mut self, entry: &Value) {
        if is_image_related(entry) {
            self.multimodal += 1;
        } else {
            self.text += 1;
        }
        self.total += 1;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileStatistics {
    pub path: PathBuf,
    /// Name relative to the collection directory.
    pub name: String,
    pub modality: ModalityCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

/// Aggregated statistics over every loaded exam file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetStatistics {
    pub exam_count: usize,
    pub question_count: usize,
    pub image_related_count: usize,
    /// Field name -> field value -> number of questions.
    pub counts: BTreeMap<String, BTreeMap<String, usize>>,
    pub files: Vec<FileStatistics>,
    pub skipped: Vec<SkippedFile>,
}

impl DatasetStatistics {
    /// Empty statistics grouping by `fields`.
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Self {
        let counts = fields
            .iter()
            .map(|field| (field.as_ref().to_string(), BTreeMap::new()))
            .collect();
        Self {
            counts,
            ..Self::default()
        }
    }

    /// Fold the entries of one exam file into the totals.
    pub fn add_exam(&mut self, file: &DatasetFile, entries: &[Value]) {
        let mut modality = ModalityCounts::default();
        for entry in entries {
            modality.add(entry);
            for (field, values) in &mut self.counts {
                if let Some(key) = entry.get(field).and_then(group_key) {
                    *values.entry(key).or_default() += 1;
                }
            }
        }
        self.exam_count += 1;
        self.question_count += modality.total;
        self.image_related_count += modality.multimodal;
        self.files.push(FileStatistics {
            path: file.path.clone(),
            name: file.name.clone(),
            modality,
        });
    }

    pub fn skip(&mut self, file: &DatasetFile, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            name: file.name.clone(),
            reason: reason.into(),
        });
    }

    /// Counts for one grouping field, if it was requested.
    pub fn counts_for(&self, field: &str) -> Option<&BTreeMap<String, usize>> {
        self.counts.get(field)
    }
}

/// Whether a question carries an image, directly or through its options.
pub fn is_image_related(entry: &Value) -> bool {
    let has_image = entry
        .get("image_png")
        .and_then(Value::as_str)
        .is_some_and(|path| !path.is_empty());
    if has_image {
        return true;
    }
    entry
        .get("options")
        .and_then(Value::as_array)
        .is_some_and(|options| {
            options
                .iter()
                .filter_map(Value::as_str)
                .any(|option| IMAGE_EXTENSIONS.iter().any(|ext| option.ends_with(ext)))
        })
}

/// Statistics over every dataset file in `dir`.
pub fn collect_statistics<S: AsRef<str>>(dir: &Path, fields: &[S]) -> Result<DatasetStatistics> {
    let mut statistics = DatasetStatistics::new(fields);
    for file in discover_dataset_files(dir)? {
        match load_dataset(&file.path) {
            Ok(dataset) => {
                debug!(file = %file.name, entries = dataset.len(), "counting exam");
                statistics.add_exam(&file, &dataset.entries);
            }
            Err(error) => {
                warn!(file = %file.name, %error, "skipping unreadable exam file");
                statistics.skip(&file, error.to_string());
            }
        }
    }
    Ok(statistics)
}

/// Grouping key for a field value; empty values (null, `""`, `0`, `false`,
/// `[]`, `{}`) are not counted.
fn group_key(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
