//! Bounds derivation over non-missing values

use crate::app::models::{NumericField, TestRecord, TextField};
use crate::app::services::filter::bounds::{date_bounds, distinct_values, numeric_bounds};

fn table() -> Vec<TestRecord> {
    let mut a = TestRecord::empty("a");
    a.date = Some("2025-04-01".to_string());
    a.powder_charge_gr = Some(23.0);
    a.calibre = Some("223".to_string());

    let mut b = TestRecord::empty("b");
    b.date = Some("2025-03-15".to_string());
    b.powder_charge_gr = Some(24.2);
    b.calibre = Some("6.5CM".to_string());

    // c has nothing to contribute
    let c = TestRecord::empty("c");

    vec![a, b, c]
}

#[test]
fn test_numeric_bounds_ignore_missing_rows() {
    let bounds = numeric_bounds(&table(), NumericField::PowderChargeGr);
    assert_eq!(bounds, Some((23.0, 24.2)));
}

#[test]
fn test_numeric_bounds_none_when_column_empty() {
    // group_es_mm is missing in every row; the caller must not see zeros
    assert_eq!(numeric_bounds(&table(), NumericField::GroupEsMm), None);
    assert_eq!(numeric_bounds(&[], NumericField::PowderChargeGr), None);
}

#[test]
fn test_numeric_bounds_single_value_collapses() {
    let mut row = TestRecord::empty("only");
    row.sd_fps = Some(8.5);
    assert_eq!(numeric_bounds(&[row], NumericField::SdFps), Some((8.5, 8.5)));
}

#[test]
fn test_date_bounds_lexicographic_equals_chronological() {
    let bounds = date_bounds(&table()).unwrap();
    assert_eq!(bounds, ("2025-03-15".to_string(), "2025-04-01".to_string()));
}

#[test]
fn test_date_bounds_none_without_dates() {
    assert_eq!(date_bounds(&[TestRecord::empty("undated")]), None);
}

#[test]
fn test_distinct_values_sorted_and_deduped() {
    let mut table = table();
    let mut duplicate = TestRecord::empty("d");
    duplicate.calibre = Some("223".to_string());
    table.push(duplicate);

    let values = distinct_values(&table, TextField::Calibre);
    assert_eq!(values, vec!["223".to_string(), "6.5CM".to_string()]);

    // a column nobody filled in
    assert!(distinct_values(&table, TextField::PrimerBrand).is_empty());
}
