use serde::Serialize;

use crate::issue::ValidationError;

/// Outcome of validating one dataset file.
///
/// Errors are grouped by ascending entry index; inside an entry they keep
/// the order in which the rules produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entry_count: usize,
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Finalize a report over `entry_count` entries.
    pub fn new(entry_count: usize, mut errors: Vec<ValidationError>) -> Self {
        errors.sort_by_key(|error| error.entry_index);
        Self {
            entry_count,
            errors,
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Number of entries that were validated.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors belonging to a single entry.
    pub fn errors_for_entry(&self, entry_index: usize) -> &[ValidationError] {
        let start = self
            .errors
            .partition_point(|error| error.entry_index < entry_index);
        let end = self
            .errors
            .partition_point(|error| error.entry_index <= entry_index);
        &self.errors[start..end]
    }

    /// Distinct entry indices with at least one error, ascending.
    pub fn invalid_entries(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.errors.iter().map(|error| error.entry_index).collect();
        indices.dedup();
        indices
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    is_valid: bool,
    entry_count: usize,
    error_count: usize,
    errors: &'a [ValidationError],
}

impl Serialize for ValidationReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportDocument {
            is_valid: self.is_valid(),
            entry_count: self.entry_count,
            error_count: self.error_count(),
            errors: &self.errors,
        }
        .serialize(serializer)
    }
}
