//! Closed vocabularies used by image-bearing questions.
//!
//! Values are produced upstream by the image classification step and stored
//! verbatim in dataset files. Matching is exact and case-sensitive.

/// What the question image shows.
///
/// - `graph`: data plotted on axes, flowcharts, organizational charts
/// - `table`: rows and columns of structured data
/// - `diagram`: technical or schematic drawings
/// - `scientific formula`: equations, chemical formulas, mathematical diagrams
/// - `text`: primarily textual content
/// - `figure`: illustrations of objects, patterns or symbols
/// - `map`: geographical or spatial representations
/// - `photo`: photographs of real-world scenes, objects or people
pub const IMAGE_TYPES: &[&str] = &[
    "graph",
    "table",
    "diagram",
    "scientific formula",
    "text",
    "figure",
    "map",
    "photo",
];

/// How much the image matters: `useful` helps, `essential` is required to
/// answer.
pub const IMAGE_INFORMATION: &[&str] = &["useful", "essential"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_are_distinct_lowercase_values() {
        for vocabulary in [IMAGE_TYPES, IMAGE_INFORMATION] {
            let mut sorted = vocabulary.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), vocabulary.len());
            assert!(vocabulary.iter().all(|value| *value == value.to_lowercase()));
        }
    }
}
