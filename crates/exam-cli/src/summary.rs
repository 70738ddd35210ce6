//! Terminal rendering of validation reports, statistics and the schema.
//!
//! Table builders are separate from the `print_*` functions so the layout can
//! be inspected without capturing stdout.

use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use exam_model::{QuestionPreview, ValidationError, ValidationReport, ViolationKind};
use exam_report::DatasetStatistics;
use exam_validate::{Constraint, CrossFieldRule, EntrySchema, Presence};

use crate::types::ValidationOutcome;

pub fn print_validation_summary(outcome: &ValidationOutcome, max_errors: Option<usize>) {
    println!("Dataset: {}", outcome.json_path.display());
    println!("Language: {}", outcome.language);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let report = &outcome.report;
    if report.is_valid() {
        println!();
        println!("{}", success_message(report));
        return;
    }

    println!();
    println!("Errors:");
    println!("{}", error_table(outcome, max_errors));
    let shown = shown_error_count(report, max_errors);
    if shown < report.error_count() {
        println!(
            "... {} more errors not shown (use --report for the full list)",
            report.error_count() - shown
        );
    }
    println!();
    println!("{}", kind_table(report));
    println!();
    println!("{}", failure_message(report));
}

pub fn success_message(report: &ValidationReport) -> String {
    format!(
        "Validation passed: all {} entries are valid.",
        report.entry_count()
    )
}

pub fn failure_message(report: &ValidationReport) -> String {
    format!(
        "Validation failed: {} errors in {} of {} entries.",
        report.error_count(),
        report.invalid_entries().len(),
        report.entry_count()
    )
}

fn shown_error_count(report: &ValidationReport, max_errors: Option<usize>) -> usize {
    max_errors.map_or(report.error_count(), |max| max.min(report.error_count()))
}

/// One row per error with enough of the question to find it in the source.
pub fn error_table(outcome: &ValidationOutcome, max_errors: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entry"),
        header_cell("Location"),
        header_cell("Kind"),
        header_cell("Message"),
        header_cell("Question"),
        header_cell("Options"),
        header_cell("Answer"),
    ]);
    apply_error_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let shown = shown_error_count(&outcome.report, max_errors);
    for error in &outcome.report.errors()[..shown] {
        let preview = outcome
            .entry(error.entry_index)
            .map(QuestionPreview::from_entry)
            .unwrap_or_default();
        table.add_row(error_row(error, &preview));
    }
    table
}

fn error_row(error: &ValidationError, preview: &QuestionPreview) -> Vec<Cell> {
    let options = if preview.options.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(preview.numbered_options())
    };
    vec![
        Cell::new(error.entry_index),
        location_cell(error),
        kind_cell(error.kind),
        Cell::new(&error.message),
        optional_cell(preview.question.as_deref()),
        options,
        optional_cell(preview.answer.as_deref()),
    ]
}

/// Error counts per kind, largest first.
pub fn kind_table(report: &ValidationReport) -> Table {
    let mut counts: BTreeMap<&'static str, (ViolationKind, usize)> = BTreeMap::new();
    for error in report.errors() {
        counts.entry(error.kind.label()).or_insert((error.kind, 0)).1 += 1;
    }
    let mut rows: Vec<(ViolationKind, usize)> = counts.into_values().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Errors")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in rows {
        table.add_row(vec![kind_cell(kind), count_cell(count, Color::Red)]);
    }
    table
}

pub fn print_statistics(statistics: &DatasetStatistics) {
    println!("Exams: {}", statistics.exam_count);
    println!("Questions: {}", statistics.question_count);
    println!("Image-related questions: {}", statistics.image_related_count);
    for (field, counts) in &statistics.counts {
        println!();
        println!("Questions by {field}:");
        println!("{}", counts_table(field, counts));
    }
    if !statistics.files.is_empty() {
        println!();
        println!("Files:");
        println!("{}", modality_table(statistics));
    }
    if !statistics.skipped.is_empty() {
        eprintln!("Skipped:");
        for skipped in &statistics.skipped {
            eprintln!("- {}: {}", skipped.name, skipped.reason);
        }
    }
}

pub fn counts_table(field: &str, counts: &BTreeMap<String, usize>) -> Table {
    let mut rows: Vec<(&String, &usize)> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let mut table = Table::new();
    table.set_header(vec![header_cell(field), header_cell("Questions")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (value, count) in rows {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    table
}

pub fn modality_table(statistics: &DatasetStatistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Multimodal"),
        header_cell("Text"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for file in &statistics.files {
        table.add_row(vec![
            Cell::new(&file.name),
            count_cell(file.modality.multimodal, Color::Magenta),
            Cell::new(file.modality.text),
            Cell::new(file.modality.total).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Declared fields in order, then the cross-field rules.
pub fn schema_table(schema: &EntrySchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Presence"),
        header_cell("Shape"),
        header_cell("Constraints"),
    ]);
    apply_table_style(&mut table);
    for spec in schema.fields() {
        let presence = match spec.presence {
            Presence::Required => Cell::new(spec.presence.label()).add_attribute(Attribute::Bold),
            Presence::Optional => dim_cell(spec.presence.label()),
        };
        let constraints = if spec.constraints.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(
                spec.constraints
                    .iter()
                    .map(Constraint::describe)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        };
        table.add_row(vec![
            Cell::new(spec.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            presence,
            Cell::new(spec.shape.label()),
            constraints,
        ]);
    }
    for rule in schema.rules() {
        table.add_row(vec![
            dim_cell("(entry)"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(describe_rule(rule)),
        ]);
    }
    table
}

fn describe_rule(rule: &CrossFieldRule) -> String {
    match rule {
        CrossFieldRule::AllOrNone(fields) => {
            format!("all or none of: {}", fields.join(", "))
        }
        CrossFieldRule::MatchesExpectedLanguage(field) => {
            format!("{field} equals --language-code")
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_error_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn location_cell(error: &ValidationError) -> Cell {
    if error.is_entry_level() {
        dim_cell(error.location())
    } else {
        Cell::new(error.location()).fg(Color::Yellow)
    }
}

fn kind_cell(kind: ViolationKind) -> Cell {
    let color = if kind.is_cross_field() {
        Color::Magenta
    } else if kind == ViolationKind::Evaluation {
        Color::DarkRed
    } else {
        Color::Red
    };
    Cell::new(kind.label()).fg(color)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
