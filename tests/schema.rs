mod common;

use common::records;
use tabview::schema::Schema;
use tabview::sort::SortDirection;

#[test]
fn derive_collects_keys_in_first_seen_order() {
    let raw = records(r#"[{"b": 1, "a": 2}, {"c": 3, "a": 4}]"#);
    let schema = Schema::derive(&raw);
    assert_eq!(schema.keys(), vec!["b", "a", "c"]);
}

#[test]
fn derive_of_empty_input_yields_empty_schema() {
    let schema = Schema::derive(&[]);
    assert!(schema.is_empty());
    assert_eq!(schema.len(), 0);
}

#[test]
fn derive_skips_non_object_elements() {
    let raw = records(r#"[null, 7, "loose", [1, 2], {"only": true}]"#);
    let schema = Schema::derive(&raw);
    assert_eq!(schema.keys(), vec!["only"]);
}

#[test]
fn labels_start_as_keys_with_no_direction() {
    let raw = records(r#"[{"price": "2"}]"#);
    let schema = Schema::derive(&raw);
    assert_eq!(schema.columns[0].label, "price");
    assert!(schema.columns[0].direction.is_none());
    assert!(schema.active_column().is_none());
}

#[test]
fn column_index_finds_known_keys_only() {
    let raw = records(r#"[{"name": "x", "price": "2"}]"#);
    let schema = Schema::derive(&raw);
    assert_eq!(schema.column_index("name"), Some(0));
    assert_eq!(schema.column_index("price"), Some(1));
    assert_eq!(schema.column_index("missing"), None);
}

#[test]
fn apply_direction_keeps_at_most_one_column_active() {
    let raw = records(r#"[{"a": 1, "b": 2, "c": 3}]"#);
    let mut schema = Schema::derive(&raw);

    schema.apply_direction(0, SortDirection::Descending);
    assert_eq!(schema.active_column().map(|c| c.key.as_str()), Some("a"));

    schema.apply_direction(2, SortDirection::Ascending);
    let active: Vec<_> = schema
        .columns
        .iter()
        .filter(|column| column.direction.is_some())
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].key, "c");
    assert_eq!(active[0].direction, Some(SortDirection::Ascending));
}

#[test]
fn schema_serializes_directions_only_when_set() {
    let raw = records(r#"[{"name": "x", "price": "2"}]"#);
    let mut schema = Schema::derive(&raw);
    schema.apply_direction(1, SortDirection::Descending);

    let serialized = serde_json::to_value(&schema).expect("schema serializes");
    assert_eq!(
        serialized,
        serde_json::json!({
            "columns": [
                {"key": "name", "label": "name"},
                {"key": "price", "label": "price", "direction": "descending"}
            ]
        })
    );

    schema.apply_direction(1, SortDirection::Ascending);
    let serialized = serde_json::to_value(&schema).expect("schema serializes");
    assert_eq!(serialized["columns"][1]["direction"], "ascending");
}

#[test]
fn apply_direction_out_of_range_only_clears() {
    let raw = records(r#"[{"a": 1}]"#);
    let mut schema = Schema::derive(&raw);
    schema.apply_direction(0, SortDirection::Descending);
    schema.apply_direction(9, SortDirection::Ascending);
    assert!(schema.active_column().is_none());
}
