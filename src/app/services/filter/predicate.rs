//! Filter predicates and their matching rules

use chrono::NaiveDate;
use tracing::debug;

use crate::app::models::{NumericField, TestRecord, TextField};
use crate::constants::{DATE_FORMAT, WILDCARD_ALL};

/// One independent filter constraint against a single field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Text equality; the wildcard literal `"All"` disables the predicate
    Equals { field: TextField, value: String },

    /// Inclusive numeric range; rows with the field missing are excluded
    NumericRange {
        field: NumericField,
        min: f64,
        max: f64,
    },

    /// Inclusive date range compared as ISO strings
    DateRange { from: String, to: String },

    /// Set membership; an empty set is a no-op, not an exclude-all
    OneOf {
        field: TextField,
        values: Vec<String>,
    },
}

impl Predicate {
    /// Whether a record satisfies this predicate
    pub fn matches(&self, record: &TestRecord) -> bool {
        match self {
            Predicate::Equals { field, value } => {
                if value == WILDCARD_ALL {
                    return true;
                }
                record.text(*field) == Some(value.as_str())
            }
            Predicate::NumericRange { field, min, max } => match record.numeric(*field) {
                Some(value) => *min <= value && value <= *max,
                // missing means excluded, not zero
                None => false,
            },
            Predicate::DateRange { from, to } => match record.date.as_deref() {
                Some(date) => from.as_str() <= date && date <= to.as_str(),
                None => false,
            },
            Predicate::OneOf { field, values } => {
                if values.is_empty() {
                    return true;
                }
                match record.text(*field) {
                    Some(value) => values.iter().any(|candidate| candidate == value),
                    None => false,
                }
            }
        }
    }

    /// Build a numeric range predicate from raw text bounds
    ///
    /// Both bounds must be present and parse; otherwise the predicate is
    /// dropped entirely so a malformed bound can never wrongly exclude rows.
    pub fn numeric_range_from_input(
        field: NumericField,
        min_text: &str,
        max_text: &str,
    ) -> Option<Predicate> {
        let min_text = min_text.trim();
        let max_text = max_text.trim();
        if min_text.is_empty() || max_text.is_empty() {
            return None;
        }
        match (min_text.parse::<f64>(), max_text.parse::<f64>()) {
            (Ok(min), Ok(max)) => Some(Predicate::NumericRange { field, min, max }),
            _ => {
                debug!(
                    "ignoring numeric filter with unparsable bounds '{min_text}'..'{max_text}'"
                );
                None
            }
        }
    }

    /// Build a date range predicate from raw text bounds
    ///
    /// Bounds must both be valid ISO dates; a malformed bound drops the
    /// predicate rather than filtering on garbage.
    pub fn date_range_from_input(from_text: &str, to_text: &str) -> Option<Predicate> {
        let from_text = from_text.trim();
        let to_text = to_text.trim();
        let from_ok = NaiveDate::parse_from_str(from_text, DATE_FORMAT).is_ok();
        let to_ok = NaiveDate::parse_from_str(to_text, DATE_FORMAT).is_ok();
        if from_ok && to_ok {
            Some(Predicate::DateRange {
                from: from_text.to_string(),
                to: to_text.to_string(),
            })
        } else {
            debug!("ignoring date filter with invalid bounds '{from_text}'..'{to_text}'");
            None
        }
    }
}
