//! Integration tests for dataset validation.

use exam_validate::{
    DatasetValidator, FieldPath, IMAGE_GROUP_MESSAGE, ValidationError, ViolationKind, validate,
};
use serde_json::{Value, json};

fn valid_entry() -> Value {
    json!({
        "language": "en",
        "country": "USA",
        "file_name": "physics_2023.pdf",
        "source": "https://example.org/exams",
        "license": "CC BY 4.0",
        "level": "University Entrance",
        "category_en": "Physics",
        "category_original_lang": "Physics",
        "original_question_num": 12,
        "question": "What is the SI unit of force?",
        "options": ["Joule", "Newton", "Watt", "Pascal"],
        "answer": 1
    })
}

fn with(mut entry: Value, field: &str, value: Value) -> Value {
    entry[field] = value;
    entry
}

fn without(mut entry: Value, field: &str) -> Value {
    entry.as_object_mut().unwrap().remove(field);
    entry
}

fn paths(errors: &[ValidationError]) -> Vec<Option<String>> {
    errors
        .iter()
        .map(|error| error.field_path.as_ref().map(ToString::to_string))
        .collect()
}

#[test]
fn valid_entry_has_no_errors() {
    let report = validate(&[valid_entry()], "en");
    assert!(report.is_valid(), "{:?}", report.errors());
    assert_eq!(report.entry_count(), 1);
}

#[test]
fn valid_entry_with_all_optional_fields() {
    let mut entry = valid_entry();
    entry["original_question_num"] = json!("12b");
    entry["image_png"] = json!("images/q12.png");
    entry["image_information"] = json!("essential");
    entry["image_type"] = json!("scientific formula");
    entry["parallel_question_id"] = json!(["physics_2023_hr", 12]);

    let report = validate(&[entry], "en");
    assert!(report.is_valid(), "{:?}", report.errors());
}

#[test]
fn null_optional_fields_count_as_absent() {
    let mut entry = valid_entry();
    entry["image_png"] = Value::Null;
    entry["image_information"] = Value::Null;
    entry["image_type"] = Value::Null;
    entry["parallel_question_id"] = Value::Null;

    assert!(validate(&[entry], "en").is_valid());
}

#[test]
fn missing_required_field_is_one_error() {
    let report = validate(&[without(valid_entry(), "question")], "en");
    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.field_path, Some(FieldPath::field("question")));
    assert_eq!(error.kind, ViolationKind::Missing);
}

#[test]
fn duplicate_options_reported_on_the_list() {
    let entry = with(valid_entry(), "options", json!(["A", "A", "B", "C"]));
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.field_path, Some(FieldPath::field("options")));
    assert_eq!(error.kind, ViolationKind::Duplicate);
    assert!(error.message.contains("\"A\" at indices 0, 1"));
}

#[test]
fn answer_past_last_option_is_out_of_range() {
    let entry = with(valid_entry(), "answer", json!(4));
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.field_path, Some(FieldPath::field("answer")));
    assert_eq!(error.kind, ViolationKind::OutOfRange);
}

#[test]
fn negative_answer_is_out_of_range() {
    let entry = with(valid_entry(), "answer", json!(-1));
    let report = validate(&[entry], "en");
    assert_eq!(paths(report.errors()), vec![Some("answer".to_string())]);
}

#[test]
fn partial_image_group_is_one_entry_level_error() {
    let entry = with(valid_entry(), "image_png", json!("x.png"));
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert!(error.is_entry_level());
    assert_eq!(error.kind, ViolationKind::IncompleteImageGroup);
    assert_eq!(error.message, IMAGE_GROUP_MESSAGE);
}

#[test]
fn language_mismatch_names_expected_and_actual() {
    let entry = with(valid_entry(), "language", json!("fr"));
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.field_path, Some(FieldPath::field("language")));
    assert!(error.message.contains("\"en\""));
    assert!(error.message.contains("\"fr\""));
}

#[test]
fn language_comparison_is_case_sensitive() {
    let entry = with(valid_entry(), "language", json!("EN"));
    assert_eq!(validate(&[entry], "en").error_count(), 1);
}

#[test]
fn empty_input_is_valid() {
    let report = validate(&[], "en");
    assert!(report.is_valid());
    assert_eq!(report.error_count(), 0);
}

#[test]
fn unexpected_field_is_reported_by_name() {
    let entry = with(valid_entry(), "explanation", json!("because"));
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.field_path, Some(FieldPath::field("explanation")));
    assert_eq!(error.message, "unexpected field");
}

#[test]
fn non_object_entry_does_not_abort_the_run() {
    let entries = vec![
        json!("not an entry"),
        without(valid_entry(), "level"),
        valid_entry(),
    ];
    let report = validate(&entries, "en");
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.invalid_entries(), vec![0, 1]);

    let first = &report.errors_for_entry(0)[0];
    assert_eq!(first.kind, ViolationKind::Evaluation);
    assert!(first.is_entry_level());
    assert_eq!(first.message, "entry is not an object, found string");

    assert_eq!(
        report.errors_for_entry(1)[0].field_path,
        Some(FieldPath::field("level"))
    );
}

#[test]
fn shape_failure_blocks_dependent_checks() {
    let entry = with(valid_entry(), "options", json!(["A", 2, "A"]));
    let entry = with(entry, "answer", json!(7));
    let report = validate(&[entry], "en");
    // Only the element shape error: no uniqueness check, no answer range.
    assert_eq!(paths(report.errors()), vec![Some("options[1]".to_string())]);
    assert_eq!(report.errors()[0].kind, ViolationKind::Shape);
    assert_eq!(report.errors()[0].message, "expected string, found integer");
}

#[test]
fn options_need_two_items() {
    let entry = with(valid_entry(), "options", json!(["Newton"]));
    let entry = with(entry, "answer", json!(0));
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors()[0].kind, ViolationKind::TooShort);
}

#[test]
fn null_required_field_is_a_shape_error() {
    let entry = with(valid_entry(), "country", Value::Null);
    let report = validate(&[entry], "en");
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors()[0].kind, ViolationKind::Shape);
    assert_eq!(report.errors()[0].message, "expected string, found null");
}

#[test]
fn image_enums_are_exact_matches() {
    let mut entry = valid_entry();
    entry["image_png"] = json!("q.png");
    entry["image_information"] = json!("Essential");
    entry["image_type"] = json!("chart");

    let report = validate(&[entry], "en");
    assert_eq!(
        paths(report.errors()),
        vec![
            Some("image_information".to_string()),
            Some("image_type".to_string())
        ]
    );
    assert!(
        report
            .errors()
            .iter()
            .all(|error| error.kind == ViolationKind::NotAllowed)
    );
}

#[test]
fn blank_parallel_question_id_points_at_string_part() {
    let entry = with(valid_entry(), "parallel_question_id", json!([" ", 3]));
    let report = validate(&[entry], "en");
    assert_eq!(
        paths(report.errors()),
        vec![Some("parallel_question_id[0]".to_string())]
    );
}

#[test]
fn evaluation_is_not_fail_fast() {
    let entry = json!({
        "language": "fr",
        "country": " USA",
        "file_name": "f.pdf",
        "source": "s",
        "license": "l",
        "level": "",
        "category_en": "Math",
        "category_original_lang": "Math",
        "original_question_num": 1.5,
        "question": "Q?",
        "options": ["A", "A", " "],
        "answer": 3,
        "image_png": "x.png",
        "notes": "hi"
    });
    let report = validate(&[entry], "en");
    let rendered: Vec<String> = report.errors().iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r#"
    entry 0 at country: value must not have leading or trailing whitespace: " USA"
    entry 0 at level: value must not be empty or whitespace
    entry 0 at original_question_num: expected string or integer, found number
    entry 0 at options[2]: value must not be empty or whitespace
    entry 0 at options: values must be unique, found "A" at indices 0, 1
    entry 0 at answer: value 3 must be in range [0, 3)
    entry 0 at notes: unexpected field
    entry 0 at <entry>: all image fields must be specified together
    entry 0 at language: expected language "en", found "fr"
    "#);
}

#[test]
fn errors_are_grouped_in_entry_order() {
    let entries = vec![
        with(valid_entry(), "answer", json!(9)),
        valid_entry(),
        without(without(valid_entry(), "source"), "license"),
    ];
    let report = DatasetValidator::default().validate(&entries, "en");
    let indices: Vec<usize> = report.errors().iter().map(|e| e.entry_index).collect();
    assert_eq!(indices, vec![0, 2, 2]);
    assert_eq!(
        paths(report.errors_for_entry(2)),
        vec![Some("source".to_string()), Some("license".to_string())]
    );
}
