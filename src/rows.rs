//! Record normalization against a derived schema.
//!
//! Raw records are ragged: each JSON object carries its own key set. This
//! module widens every record to the full schema, producing one string cell
//! per column in schema order.
//!
//! A cell keeps the source value's display text only when the key is present
//! **and** the value is loosely truthy. `null`, `false`, numeric zero, and
//! the empty string all normalize to `""` exactly like a missing key. That
//! collapse is deliberate: the comparators downstream rely on `""` being the
//! single marker for "absent", so a legitimate `0` is normalized away the
//! same as no value at all.

use serde_json::Value;

use crate::schema::Schema;

/// A normalized record: one cell per schema column, in schema order.
pub type Record = Vec<String>;

/// Widens every raw record to the schema. The output always has one record
/// per input element, each with exactly `schema.len()` cells; non-object
/// elements produce all-empty records.
pub fn normalize(records: &[Value], schema: &Schema) -> Vec<Record> {
    records
        .iter()
        .map(|record| normalize_record(record, schema))
        .collect()
}

fn normalize_record(record: &Value, schema: &Schema) -> Record {
    schema
        .columns
        .iter()
        .map(|column| {
            record
                .get(column.key.as_str())
                .filter(|value| !is_loosely_falsy(value))
                .map(display_text)
                .unwrap_or_default()
        })
        .collect()
}

/// Loose truthiness over JSON values, the way dynamic languages coerce a
/// value in boolean position. Empty arrays and empty objects are truthy;
/// the string `"0"` is truthy while the number `0` is not.
pub fn is_loosely_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Display text for a JSON value: strings verbatim, everything else as its
/// compact JSON rendering.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
