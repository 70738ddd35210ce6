//! Tests for dataset loading.

use std::fs;
use std::path::Path;

use exam_ingest::{DatasetFormat, IngestError, load_dataset, parse_dataset};

#[test]
fn loads_json_array() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("en.json");
    fs::write(&path, r#"[{"question": "a"}, {"question": "b"}, 3]"#).expect("write");

    let dataset = load_dataset(&path).expect("load");
    assert_eq!(dataset.format, DatasetFormat::JsonArray);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.entries[2], serde_json::json!(3));
}

#[test]
fn empty_array_is_not_an_error() {
    let (entries, format) = parse_dataset("[]", Path::new("empty.json")).expect("parse");
    assert!(entries.is_empty());
    assert_eq!(format, DatasetFormat::JsonArray);
}

#[test]
fn falls_back_to_json_lines() {
    let text = "{\"question\": \"a\"}\n\n{\"question\": \"b\"}\n";
    let (entries, format) = parse_dataset(text, Path::new("lines.json")).expect("parse");
    assert_eq!(format, DatasetFormat::JsonLines);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["question"], "b");
}

#[test]
fn object_at_top_level_is_fatal() {
    let error = parse_dataset(r#"{"question": "a"}"#, Path::new("obj.json")).unwrap_err();
    assert!(matches!(
        error,
        IngestError::NotAList {
            found: "object",
            ..
        }
    ));
    assert!(error.to_string().contains("expected a JSON list"));
}

#[test]
fn broken_json_lines_report_the_line() {
    let text = "{\"question\": \"a\"}\n{not json}\n";
    let error = parse_dataset(text, Path::new("bad.json")).unwrap_err();
    assert!(matches!(error, IngestError::JsonParse { line: 2, .. }));
}

#[test]
fn blank_file_is_fatal() {
    let error = parse_dataset("  \n", Path::new("blank.json")).unwrap_err();
    assert!(matches!(error, IngestError::Empty { .. }));
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = load_dataset(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, IngestError::FileRead { .. }));
}

#[test]
fn broken_multi_line_array_reports_the_real_line() {
    let text = "[\n  {\"question\": \"a\"},\n  {\"question\": \"b\"},\n  {\"question\": \"c\",}\n]\n";
    let error = parse_dataset(text, Path::new("bad.json")).unwrap_err();
    assert!(matches!(error, IngestError::JsonParse { line: 4, .. }), "{error}");
    assert!(error.to_string().contains("(line 4)"));
}

#[test]
fn json_lines_records_must_be_objects() {
    let error = parse_dataset("1\n2\n", Path::new("scalars.json")).unwrap_err();
    assert!(matches!(
        error,
        IngestError::NotARecord {
            line: 1,
            found: "integer",
            ..
        }
    ));

    let text = "{\"question\": \"a\"}\n[\"not\", \"a record\"]\n";
    let error = parse_dataset(text, Path::new("mixed.json")).unwrap_err();
    assert!(matches!(error, IngestError::NotARecord { line: 2, found: "list", .. }));
}
