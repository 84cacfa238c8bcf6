//! CLI argument definitions for the delimited-file checker.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dfc",
    version,
    about = "Delimited File Check - Validate the structure of CSV-like files",
    long_about = "Validate the structure of delimited text files.\n\n\
                  Checks that every record matches the header's column count and\n\
                  optionally flags blank lines, empty values, and duplicate values\n\
                  per column. The file is reported on, never modified."
)]
pub struct Cli {
    /// Path to the delimited file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter (single ASCII character).
    #[arg(long, short = 'd', default_value_t = ',')]
    pub delimiter: char,

    /// Record terminator (single ASCII character, defaults to newline).
    #[arg(long = "line-ending", default_value_t = '\n', hide_default_value = true)]
    pub line_ending: char,

    /// Text encoding label (e.g. utf-8, windows-1252, utf-16le).
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,

    /// Comma-joined column names restricting value-level checks.
    #[arg(long, value_name = "COLUMNS")]
    pub limit: Option<String>,

    /// Flag blank lines instead of ignoring them.
    #[arg(long = "empty-lines")]
    pub empty_lines: bool,

    /// Flag empty field values in checked columns.
    #[arg(long = "empty-values")]
    pub empty_values: bool,

    /// Flag duplicate values per checked column.
    #[arg(long)]
    pub duplicates: bool,

    /// Only report the overall status, without per-line detail.
    #[arg(long = "status-only")]
    pub status_only: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: ReportFormatArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Report rendering choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Pretty,
    Json,
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
