use log::debug;
use serde_json::Value;

use crate::{
    rows::{self, Record},
    schema::Schema,
    sort::{self, ColumnKind, SortDirection},
};

/// Sortable tabular view over a collection of raw records.
///
/// Construction derives the column schema and normalizes every record; from
/// then on the schema's key set and the dataset's membership never change.
/// The one mutating entry point is [`TableView::activate_column`], which
/// moves the direction marker and reorders the dataset in place.
#[derive(Debug, Clone)]
pub struct TableView {
    schema: Schema,
    records: Vec<Record>,
}

impl TableView {
    pub fn new(raw: Vec<Value>) -> Self {
        let schema = Schema::derive(&raw);
        let records = rows::normalize(&raw, &schema);
        TableView { schema, records }
    }

    /// Ordered columns with their current directions, for header rendering.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The dataset in its current order, for row rendering.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Toggles the sort state of the column named `key` and reorders the
    /// dataset accordingly. Unknown keys leave the view untouched.
    ///
    /// The activated column moves to the opposite of its current toggle
    /// state (first activation stores descending); every other column's
    /// state is cleared in the same step. Callers re-read
    /// [`schema()`](Self::schema) and [`records()`](Self::records)
    /// afterwards; there is nothing to return.
    pub fn activate_column(&mut self, key: &str) {
        let Some(index) = self.schema.column_index(key) else {
            debug!("Ignoring activation of unknown column '{key}'");
            return;
        };
        let direction = SortDirection::toggled(self.schema.columns[index].direction);
        self.schema.apply_direction(index, direction);
        let kind = ColumnKind::for_key(key);
        sort::sort_records(&mut self.records, index, kind, direction);
        debug!("Activated column '{key}' ({kind}, {direction})");
    }
}
