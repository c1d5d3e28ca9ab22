/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// emitvars — print fixture variables as newline-delimited JSON.
#[derive(Debug, Parser)]
#[command(
    name = "emitvars",
    about = "Print test-fixture variables as newline-delimited JSON records",
    version
)]
pub struct Cli {
    /// Path to the variables file (a JSON object of name -> {data, ottl}).
    /// Relative paths are resolved against the current directory.
    #[arg(value_name = "VARS_FILE")]
    pub vars_file: PathBuf,

    /// Output format. Defaults to ndjson regardless of TTY.
    #[arg(long, value_name = "FORMAT", default_value = "ndjson")]
    pub output: OutputFormat,

    /// Suffix appended to the name of OTTL-escaped records (e.g. "_OTTL").
    /// Without it, OTTL records reuse the variable name.
    #[arg(long, value_name = "SUFFIX")]
    pub ottl_suffix: Option<String>,

    /// Comma-separated variable names to emit; others are skipped.
    #[arg(long, value_name = "NAMES")]
    pub only: Option<String>,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,

    /// Print phase timings to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Newline-delimited JSON (one object per line).
    #[default]
    Ndjson,
    /// JSON array (pretty-printed).
    Json,
    /// Compact single-line JSON array.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
}

/// Split a comma-separated list, trimming whitespace and dropping empty items.
#[must_use]
pub fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
