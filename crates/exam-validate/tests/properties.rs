//! Property tests for the validator.

use proptest::prelude::*;
use serde_json::{Value, json};

use exam_validate::validate;

fn entry(options: &[String], answer: i64, language: &str) -> Value {
    json!({
        "language": language,
        "country": "Croatia",
        "file_name": "matura_2022.pdf",
        "source": "https://example.org/matura",
        "license": "CC BY-SA 4.0",
        "level": "High School",
        "category_en": "Biology",
        "category_original_lang": "Biologija",
        "original_question_num": "7",
        "question": "Which organelle produces ATP?",
        "options": options,
        "answer": answer
    })
}

fn well_formed_entry() -> impl Strategy<Value = Value> {
    prop::collection::hash_set("[a-z]{1,8}( [a-z]{1,8})?", 2..6)
        .prop_flat_map(|options| {
            let options: Vec<String> = options.into_iter().collect();
            let len = options.len() as i64;
            (Just(options), 0..len)
        })
        .prop_map(|(options, answer)| entry(&options, answer, "hr"))
}

fn arbitrary_entry() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec("[ AB]{0,2}", 0..5),
        -2i64..6,
        prop_oneof![Just("hr"), Just("en"), Just("HR")],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(options, answer, language, drop_question, half_image)| {
            let mut value = entry(&options, answer, language);
            let record = value.as_object_mut().unwrap();
            if drop_question {
                record.remove("question");
            }
            if half_image {
                record.insert("image_type".to_string(), json!("photo"));
            }
            value
        })
}

proptest! {
    #[test]
    fn well_formed_entries_pass(entries in prop::collection::vec(well_formed_entry(), 0..10)) {
        let report = validate(&entries, "hr");
        prop_assert!(report.is_valid(), "{:?}", report.errors());
        prop_assert_eq!(report.entry_count(), entries.len());
    }

    #[test]
    fn validation_is_idempotent(entries in prop::collection::vec(arbitrary_entry(), 0..10)) {
        let first = validate(&entries, "hr");
        let second = validate(&entries, "hr");
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn errors_are_sorted_by_entry(entries in prop::collection::vec(arbitrary_entry(), 0..10)) {
        let report = validate(&entries, "hr");
        let indices: Vec<usize> = report.errors().iter().map(|e| e.entry_index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        prop_assert_eq!(indices, sorted);
        prop_assert!(report.errors().iter().all(|e| e.entry_index < entries.len()));
    }
}
