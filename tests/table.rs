mod common;

use common::records;
use tabview::schema::Schema;
use tabview::sort::SortDirection;
use tabview::table::{header_labels, render_table};

#[test]
fn render_table_aligns_columns() {
    let headers = vec!["rx".to_string(), "name".to_string()];
    let rows = vec![
        vec!["4".to_string(), "Tylenol".to_string()],
        vec!["12".to_string(), "Advil".to_string()],
    ];

    let rendered = render_table(&headers, &rows);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec!["rx  name", "---  -------", "4   Tylenol", "12  Advil"]
    );
}

#[test]
fn render_table_normalizes_control_characters() {
    let headers = vec!["dosage".to_string()];
    let rows = vec![vec!["250mg\ttwice daily\nwith water".to_string()]];

    let rendered = render_table(&headers, &rows);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "250mg twice daily with water");
}

#[test]
fn render_table_pads_short_rows() {
    let headers = vec!["a".to_string(), "b".to_string()];
    let rows = vec![vec!["only".to_string()]];

    let rendered = render_table(&headers, &rows);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[2], "only");
}

#[test]
fn header_labels_mark_the_active_column() {
    let raw = records(r#"[{"name": "x", "price": "2"}]"#);
    let mut schema = Schema::derive(&raw);

    assert_eq!(header_labels(&schema), vec!["name", "price"]);

    schema.apply_direction(1, SortDirection::Descending);
    assert_eq!(header_labels(&schema), vec!["name", "price ▼"]);

    schema.apply_direction(1, SortDirection::Ascending);
    assert_eq!(header_labels(&schema), vec!["name", "price ▲"]);
}

#[test]
fn marker_moves_with_the_active_column() {
    let raw = records(r#"[{"name": "x", "price": "2"}]"#);
    let mut schema = Schema::derive(&raw);

    schema.apply_direction(1, SortDirection::Descending);
    schema.apply_direction(0, SortDirection::Descending);
    assert_eq!(header_labels(&schema), vec!["name ▼", "price"]);
}
