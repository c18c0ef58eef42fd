#![allow(dead_code)]

use tabview::view::TableView;

/// Parses a JSON array literal into raw records for view construction.
pub fn records(json: &str) -> Vec<serde_json::Value> {
    match serde_json::from_str(json).expect("test records parse") {
        serde_json::Value::Array(records) => records,
        other => panic!("test records must be a JSON array, got {other}"),
    }
}

/// Collects one column of the view's dataset in current record order.
pub fn column_values(view: &TableView, key: &str) -> Vec<String> {
    let index = view
        .schema()
        .column_index(key)
        .unwrap_or_else(|| panic!("column '{key}' not in schema"));
    view.records()
        .iter()
        .map(|record| record[index].clone())
        .collect()
}
