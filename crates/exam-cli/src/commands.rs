use anyhow::{Context, Result};
use tracing::{info, info_span};

use exam_cli::summary::schema_table;
use exam_cli::types::ValidationOutcome;
use exam_ingest::load_dataset;
use exam_report::{DEFAULT_GROUPING_FIELDS, DatasetStatistics, collect_statistics, write_report_json};
use exam_validate::{DatasetValidator, EntrySchema};

use crate::cli::{StatsArgs, ValidateArgs};

pub fn run_schema() -> Result<()> {
    println!("{}", schema_table(&EntrySchema::exam_question()));
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let language = normalize_language(&args.language_code);
    let run_span = info_span!(
        "run",
        path = %args.json_path.display(),
        language = %language
    );
    let _run_guard = run_span.enter();

    let dataset = load_dataset(&args.json_path)
        .with_context(|| format!("load dataset {}", args.json_path.display()))?;
    info!(entries = dataset.len(), format = ?dataset.format, "dataset loaded");

    let validator = DatasetValidator::new(EntrySchema::exam_question());
    let report = validator.validate(&dataset.entries, &language);

    if let Some(path) = &args.report {
        write_report_json(&report, path)
            .with_context(|| format!("write report {}", path.display()))?;
    }

    Ok(ValidationOutcome {
        json_path: dataset.path,
        language,
        format: dataset.format,
        entries: dataset.entries,
        report,
        report_path: args.report.clone(),
    })
}

pub fn run_stats(args: &StatsArgs) -> Result<DatasetStatistics> {
    let stats_span = info_span!("stats", dir = %args.exams_dir.display());
    let _stats_guard = stats_span.enter();
    let statistics = if args.by.is_empty() {
        collect_statistics(&args.exams_dir, DEFAULT_GROUPING_FIELDS)
    } else {
        collect_statistics(&args.exams_dir, args.by.as_slice())
    }
    .with_context(|| format!("collect statistics in {}", args.exams_dir.display()))?;
    info!(
        exams = statistics.exam_count,
        questions = statistics.question_count,
        skipped = statistics.skipped.len(),
        "statistics collected"
    );
    Ok(statistics)
}

/// Language codes are compared lower-cased; the engine itself is exact.
fn normalize_language(code: &str) -> String {
    code.trim().to_lowercase()
}
