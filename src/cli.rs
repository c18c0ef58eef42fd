use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about = "View ragged JSON records as sortable tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render records as a text table, with optional column sorting
    View(ViewArgs),
    /// Write normalized records to CSV or JSON
    Export(ExportArgs),
    /// List the derived column schema for a record file
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Input JSON file holding an array of records ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Column to activate for sorting; repeat to toggle or switch columns
    #[arg(short = 'a', long = "activate", action = clap::ArgAction::Append)]
    pub activate: Vec<String>,
    /// Maximum number of rows to display
    #[arg(short = 'l', long = "limit")]
    pub limit: Option<usize>,
    /// Read further column activations from stdin, re-rendering after each
    #[arg(long = "interactive")]
    pub interactive: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Input JSON file holding an array of records ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Destination file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Column to activate for sorting before export; repeatable
    #[arg(short = 'a', long = "activate", action = clap::ArgAction::Append)]
    pub activate: Vec<String>,
    /// Output format
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Input JSON file holding an array of records ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Emit the schema as JSON instead of a table
    #[arg(long = "json")]
    pub json: bool,
}

/// Splits repeated `--activate` values on commas, trimming whitespace and
/// dropping empties, so `-a price,name -a price` yields three activations.
pub fn split_activations(specs: &[String]) -> Vec<String> {
    specs
        .iter()
        .flat_map(|spec| spec.split(','))
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}
