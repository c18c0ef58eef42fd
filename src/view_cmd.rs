use std::io::{self, BufRead};

use anyhow::{Context, Result, anyhow};
use log::info;

use crate::{
    cli::{self, ViewArgs},
    io_utils, table,
    view::TableView,
};

pub fn execute(args: &ViewArgs) -> Result<()> {
    if args.interactive && io_utils::is_dash(&args.input) {
        return Err(anyhow!(
            "--interactive requires a file input; stdin is reserved for activations"
        ));
    }
    let records = io_utils::load_records(&args.input)?;
    let mut view = TableView::new(records);

    for key in cli::split_activations(&args.activate) {
        view.activate_column(&key);
    }
    let shown = render(&view, args.limit);
    info!(
        "Displayed {shown} row(s) across {} column(s) from {:?}",
        view.schema().len(),
        args.input
    );

    if args.interactive {
        for line in io::stdin().lock().lines() {
            let line = line.context("Reading activation from stdin")?;
            let key = line.trim();
            if key.is_empty() {
                continue;
            }
            view.activate_column(key);
            render(&view, args.limit);
        }
    }
    Ok(())
}

/// Renders the view to stdout and returns the number of rows shown. A view
/// with no columns prints nothing.
fn render(view: &TableView, limit: Option<usize>) -> usize {
    if view.schema().is_empty() {
        return 0;
    }
    let headers = table::header_labels(view.schema());
    let records = view.records();
    let shown = limit.unwrap_or(records.len()).min(records.len());
    table::print_table(&headers, &records[..shown]);
    shown
}
