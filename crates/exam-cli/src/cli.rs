//! CLI argument definitions for the exam dataset validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "exam-validator",
    version,
    about = "Validate multiple-choice exam datasets before publication",
    long_about = "Validate multiple-choice exam datasets before publication.\n\n\
                  Checks every entry of a JSON dataset file against the exam question\n\
                  schema and reports every violation with its location."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one dataset file.
    Validate(ValidateArgs),

    /// Summarize every dataset file in a directory.
    Stats(StatsArgs),

    /// Print the exam question schema.
    Schema,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the JSON file to be validated.
    #[arg(long = "json-path", value_name = "PATH")]
    pub json_path: PathBuf,

    /// The language code for the dataset (compared lower-cased).
    #[arg(long = "language-code", value_name = "CODE")]
    pub language_code: String,

    /// Also write the full report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Exit with status 0 even when validation errors are found.
    #[arg(long = "no-fail-on-errors")]
    pub no_fail_on_errors: bool,

    /// Print at most this many errors (the JSON report is always complete).
    #[arg(long = "max-errors", value_name = "N")]
    pub max_errors: Option<usize>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Directory containing exam JSON files.
    #[arg(value_name = "EXAMS_DIR")]
    pub exams_dir: PathBuf,

    /// Field to group question counts by (repeatable).
    #[arg(long = "by", value_name = "FIELD")]
    pub by: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
