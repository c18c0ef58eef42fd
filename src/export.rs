use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde_json::{Map, Value};

use crate::{
    cli::{self, ExportArgs, ExportFormat},
    io_utils,
    view::TableView,
};

pub fn execute(args: &ExportArgs) -> Result<()> {
    let records = io_utils::load_records(&args.input)?;
    let mut view = TableView::new(records);
    for key in cli::split_activations(&args.activate) {
        view.activate_column(&key);
    }

    let output = args
        .output
        .as_deref()
        .filter(|path| !io_utils::is_dash(path));
    match args.format {
        ExportFormat::Csv => write_csv(&view, output)?,
        ExportFormat::Json => write_json(&view, output)?,
    }
    info!(
        "Exported {} row(s) across {} column(s) to {}",
        view.records().len(),
        view.schema().len(),
        output.map_or_else(|| "stdout".to_string(), |path| format!("{path:?}"))
    );
    Ok(())
}

fn write_csv(view: &TableView, output: Option<&Path>) -> Result<()> {
    let mut writer = io_utils::open_csv_writer(output)?;
    writer
        .write_record(view.schema().keys())
        .context("Writing output headers")?;
    for record in view.records() {
        writer.write_record(record).context("Writing output row")?;
    }
    writer.flush().context("Flushing output")?;
    Ok(())
}

/// Serializes the view as a pretty-printed JSON array of string-valued
/// objects, one per record, with fields in schema order.
fn write_json(view: &TableView, output: Option<&Path>) -> Result<()> {
    let keys = view.schema().keys();
    let objects: Vec<Value> = view
        .records()
        .iter()
        .map(|record| {
            let mut object = Map::new();
            for (key, cell) in keys.iter().zip(record) {
                object.insert(key.clone(), Value::String(cell.clone()));
            }
            Value::Object(object)
        })
        .collect();

    let mut writer = io_utils::open_output_writer(output)?;
    serde_json::to_writer_pretty(&mut writer, &objects).context("Writing JSON output")?;
    writer.write_all(b"\n").context("Writing JSON output")?;
    writer.flush().context("Flushing output")?;
    Ok(())
}
