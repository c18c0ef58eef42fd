//! I/O utilities for record loading and output writer construction.
//!
//! All file I/O in tabview flows through this module. It provides:
//!
//! - **Record loading**: raw text from a file path or stdin (the `-` path
//!   convention), parsed as a JSON array of records. A document that fails
//!   to parse, or parses to something other than an array, degrades to an
//!   empty record collection with a warning — the viewer gets an empty
//!   table, never an error.
//! - **Writer construction**: `open_output_writer` for plain text and
//!   `open_csv_writer` for CSV, both targeting stdout or a file.
//! - **Quoting**: CSV output uses `QuoteStyle::Always` for round-trip
//!   safety.

use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::QuoteStyle;
use log::warn;
use serde_json::Value;

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads the raw input document from `path`, or from stdin when the path
/// is `-`. Unreadable files are real errors; malformed content is not this
/// function's concern.
pub fn read_input_text(path: &Path) -> Result<String> {
    if is_dash(path) {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("Reading records from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("Reading input file {path:?}"))
    }
}

/// Loads the raw record collection from `path`. Content failures downgrade
/// to an empty collection, so the result is only `Err` for I/O problems.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let text = read_input_text(path)?;
    Ok(parse_records(&text))
}

/// Parses `text` as a JSON array of records. Invalid JSON and non-array
/// documents both yield an empty collection with a warning rather than an
/// error.
pub fn parse_records(text: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(records)) => records,
        Ok(other) => {
            warn!(
                "Expected a JSON array of records but found {}; continuing with an empty collection",
                json_type_name(&other)
            );
            Vec::new()
        }
        Err(err) => {
            warn!("Input is not valid JSON ({err}); continuing with an empty collection");
            Vec::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Opens the destination for plain text output: the file at `path`, or
/// stdout when `path` is `None` or `-`.
pub fn open_output_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) if !is_dash(p) => Ok(Box::new(BufWriter::new(
            fs::File::create(p).with_context(|| format!("Creating output file {p:?}"))?,
        ))),
        _ => Ok(Box::new(io::stdout())),
    }
}

/// Opens a CSV writer over the same destination selection as
/// [`open_output_writer`], quoting every field.
pub fn open_csv_writer(path: Option<&Path>) -> Result<csv::Writer<Box<dyn Write>>> {
    let base = open_output_writer(path)?;
    let mut builder = csv::WriterBuilder::new();
    builder.quote_style(QuoteStyle::Always).double_quote(true);
    Ok(builder.from_writer(base))
}
