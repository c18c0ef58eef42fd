use std::borrow::Cow;
use std::fmt::Write as _;

use itertools::Itertools;

use crate::schema::Schema;

const ASCENDING_MARKER: &str = "▲";
const DESCENDING_MARKER: &str = "▼";

/// Header labels in schema order, with a direction marker appended to the
/// column whose sort state is set. The marker tracks the stored toggle
/// state, matching the state the next activation will flip.
pub fn header_labels(schema: &Schema) -> Vec<String> {
    schema
        .columns
        .iter()
        .map(|column| match column.direction {
            Some(direction) => {
                let marker = if direction.is_ascending() {
                    ASCENDING_MARKER
                } else {
                    DESCENDING_MARKER
                };
                format!("{} {marker}", column.label)
            }
            None => column.label.clone(),
        })
        .collect()
}

/// Renders one aligned table: a header line, a dash separator, then rows.
/// Widths are measured in characters; control characters in cells are
/// replaced with spaces so multi-line values cannot break the alignment.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|header| cell_width(header)).collect_vec();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(cell_width(cell));
        }
    }
    for width in &mut widths {
        *width = (*width).max(1);
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths));

    let separator_widths = widths.iter().map(|width| (*width).max(3)).collect_vec();
    let separator_cells = separator_widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect_vec();
    let _ = writeln!(output, "{}", format_row(&separator_cells, &separator_widths));

    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths));
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (idx, width) in widths.iter().enumerate() {
        let cell = cells.get(idx).map(String::as_str).unwrap_or("");
        let sanitized = sanitize_cell(cell);
        if idx > 0 {
            line.push_str("  ");
        }
        let padding = width.saturating_sub(cell_width(sanitized.as_ref()));
        line.push_str(sanitized.as_ref());
        line.push_str(&" ".repeat(padding));
    }
    while line.ends_with(' ') {
        line.pop();
    }
    line
}

fn cell_width(value: &str) -> usize {
    value.chars().count()
}

fn sanitize_cell(value: &str) -> Cow<'_, str> {
    if value.chars().any(char::is_control) {
        Cow::Owned(
            value
                .chars()
                .map(|ch| if ch.is_control() { ' ' } else { ch })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}
