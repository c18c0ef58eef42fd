//! Column schema derived from raw records.
//!
//! The schema is built exactly once, by scanning the raw record collection
//! for field keys in first-seen order: record order first, document key
//! order within each record. Key order and membership never change after
//! derivation; the only mutable part is each column's sort direction, and
//! at most one column holds a direction at any time.

use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

use crate::sort::SortDirection;

/// One derived column: its field key, the label shown in headers, and the
/// sort direction it currently holds.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    /// Collects the distinct field keys across `records` in first-seen
    /// order. Non-object elements and empty objects contribute nothing;
    /// empty input yields an empty schema. Labels start out identical to
    /// their keys and every direction starts unset.
    pub fn derive(records: &[Value]) -> Self {
        let columns = records
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|object| object.keys())
            .unique()
            .map(|key| Column {
                key: key.clone(),
                label: key.clone(),
                direction: None,
            })
            .collect();
        Schema { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of `key` in the schema, or `None` for unknown keys.
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.key == key)
    }

    /// Field keys in schema order.
    pub fn keys(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.key.clone()).collect()
    }

    /// The column currently holding a sort direction, if any.
    pub fn active_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.direction.is_some())
    }

    /// Clears every column's direction, then stores `direction` on the
    /// column at `index`. Out-of-range indexes only clear.
    pub fn apply_direction(&mut self, index: usize, direction: SortDirection) {
        for column in &mut self.columns {
            column.direction = None;
        }
        if let Some(column) = self.columns.get_mut(index) {
            column.direction = Some(direction);
        }
    }
}
