use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::{cli::SchemaArgs, io_utils, schema::{Column, Schema}, sort::ColumnKind, table};

/// One `--json` listing entry: the column's own serialized fields plus the
/// comparator kind its key resolves to.
#[derive(Serialize)]
struct ColumnListing<'a> {
    #[serde(flatten)]
    column: &'a Column,
    #[serde(rename = "type")]
    kind: ColumnKind,
}

pub fn execute(args: &SchemaArgs) -> Result<()> {
    let records = io_utils::load_records(&args.input)?;
    let schema = Schema::derive(&records);

    if args.json {
        let entries: Vec<ColumnListing> = schema
            .columns
            .iter()
            .map(|column| ColumnListing {
                column,
                kind: ColumnKind::for_key(&column.key),
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&entries).context("Serializing schema to JSON")?;
        println!("{rendered}");
        info!("Listed {} column(s) from {:?}", schema.len(), args.input);
        return Ok(());
    }

    if schema.is_empty() {
        info!("No columns derived from {:?}", args.input);
        return Ok(());
    }

    let headers = vec!["#".to_string(), "key".to_string(), "type".to_string()];
    let rows: Vec<Vec<String>> = schema
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            vec![
                (idx + 1).to_string(),
                column.key.clone(),
                ColumnKind::for_key(&column.key).to_string(),
            ]
        })
        .collect();
    table::print_table(&headers, &rows);
    info!("Listed {} column(s) from {:?}", schema.len(), args.input);
    Ok(())
}
