//! Comparator selection and in-place record reordering.
//!
//! Every column maps to one of four comparator kinds purely by key name;
//! cell values are never inspected to pick a rule. The two directions are
//! not mirror images of each other: flipping the direction swaps which
//! operand order is used *and* which fallback stands in for a missing cell.
//!
//! - **Descending** compares `a` against `b` with missing cells counting
//!   as `0` (numeric kinds) or the empty string (text).
//! - **Ascending** compares `b` against `a` with missing cells counting
//!   as `+infinity` (numeric kinds) or `"z"` (text).
//!
//! So the descending state actually yields smallest-first output and vice
//! versa. Downstream callers and their fixtures depend on exactly this
//! mapping; do not swap the branches to make the names literal.
//!
//! A cell is "missing" under loose numeric rules: empty, unparsable, or a
//! literal zero all take the fallback. Comparators never fail; malformed
//! values degrade to the fallback of the active branch.

use std::{cmp::Ordering, fmt, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

static PHONE_STRIP: OnceLock<Regex> = OnceLock::new();

/// Toggle state stored per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// State entered by activating a column currently in `current`.
    ///
    /// An unsorted column counts as ascending for toggle purposes, so the
    /// first activation lands on `Descending`; afterwards the two states
    /// alternate and `None` is never re-entered.
    pub fn toggled(current: Option<SortDirection>) -> SortDirection {
        match current {
            Some(SortDirection::Descending) => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparator family for a column, a closed enumeration resolved once per
/// sort from the column key alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Number,
    Date,
    Phone,
    String,
}

impl ColumnKind {
    pub fn for_key(key: &str) -> Self {
        match key {
            "price" => ColumnKind::Number,
            "fda_date_approved" => ColumnKind::Date,
            "phone" => ColumnKind::Phone,
            _ => ColumnKind::String,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Number => "number",
            ColumnKind::Date => "date",
            ColumnKind::Phone => "phone",
            ColumnKind::String => "string",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reorders `records` in place by the cell at `index`, using the comparator
/// selected by `kind` under `direction`. Records too short to have the cell
/// compare as if it were empty.
pub fn sort_records(
    records: &mut [Vec<String>],
    index: usize,
    kind: ColumnKind,
    direction: SortDirection,
) {
    records.sort_by(|a, b| {
        let left = a.get(index).map(String::as_str).unwrap_or("");
        let right = b.get(index).map(String::as_str).unwrap_or("");
        compare_cells(left, right, kind, direction)
    });
}

/// Compares two cells under the comparator selected by `kind`.
pub fn compare_cells(a: &str, b: &str, kind: ColumnKind, direction: SortDirection) -> Ordering {
    match kind {
        ColumnKind::Number => compare_numeric(a, b, direction),
        ColumnKind::String => compare_text(a, b, direction),
        ColumnKind::Date => compare_numeric(&date_key(a), &date_key(b), direction),
        ColumnKind::Phone => compare_numeric(&phone_key(a), &phone_key(b), direction),
    }
}

fn compare_numeric(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let left = coerce_number(a);
    let right = coerce_number(b);
    match direction {
        SortDirection::Descending => present_or(left, 0.0).total_cmp(&present_or(right, 0.0)),
        SortDirection::Ascending => {
            present_or(right, f64::INFINITY).total_cmp(&present_or(left, f64::INFINITY))
        }
    }
}

fn compare_text(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let left = a.to_lowercase();
    let right = b.to_lowercase();
    match direction {
        SortDirection::Descending => left.cmp(&right),
        SortDirection::Ascending => non_empty_or(&right, "z").cmp(non_empty_or(&left, "z")),
    }
}

/// Whitespace-only and empty cells coerce to zero; anything unparsable
/// becomes NaN so [`present_or`] can treat it as missing.
fn coerce_number(cell: &str) -> f64 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

fn present_or(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        fallback
    } else {
        value
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Rewrites a `DD/MM/YYYY` cell into the digit string `YYYYMMDD` by
/// reversing its `/`-separated segments. Cells without a separator pass
/// through unchanged; whatever fails to read as a number afterwards is
/// handled by the numeric fallback.
fn date_key(cell: &str) -> String {
    cell.split('/').rev().collect()
}

/// Drops the formatting characters `(`, `)`, and `-` so a phone cell can be
/// compared as one long number. Other punctuation is left alone.
fn phone_key(cell: &str) -> String {
    let strip = PHONE_STRIP.get_or_init(|| Regex::new(r"[()\-]").expect("static phone pattern"));
    strip.replace_all(cell, "").into_owned()
}
