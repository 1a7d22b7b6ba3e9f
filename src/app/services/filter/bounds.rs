//! Range derivation for filter bound defaults
//!
//! Bounds are computed over non-missing values only; a column with no data
//! yields `None` and the caller must not substitute zeros. Whether bounds
//! come from the full corpus or the currently filtered subset is the
//! caller's policy, not decided here.

use crate::app::models::{NumericField, TestRecord, TextField};

/// Min/max over the non-missing values of a numeric column
pub fn numeric_bounds(table: &[TestRecord], field: NumericField) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in table.iter().filter_map(|row| row.numeric(field)) {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    bounds
}

/// Earliest/latest dates in a table
///
/// ISO formatting makes the lexicographic bounds equal the chronological
/// ones.
pub fn date_bounds(table: &[TestRecord]) -> Option<(String, String)> {
    let mut bounds: Option<(&str, &str)> = None;
    for date in table.iter().filter_map(|row| row.date.as_deref()) {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(date), max.max(date)),
            None => (date, date),
        });
    }
    bounds.map(|(min, max)| (min.to_string(), max.to_string()))
}

/// Sorted distinct non-missing values of a text column
///
/// Used to populate equality and membership filter choices.
pub fn distinct_values(table: &[TestRecord], field: TextField) -> Vec<String> {
    let mut values: Vec<String> = table
        .iter()
        .filter_map(|row| row.text(field))
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}
