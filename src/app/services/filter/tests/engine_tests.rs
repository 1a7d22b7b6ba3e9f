//! Filter engine behavior, above all the selection carryover invariant

use crate::app::models::{NumericField, TestRecord};
use crate::app::services::filter::{FilterEngine, Predicate};

/// Three rows at distinct charges so range predicates can single them out
fn table() -> Vec<TestRecord> {
    ["a", "b", "c"]
        .iter()
        .zip([23.0, 23.5, 24.0])
        .map(|(id, charge)| {
            let mut row = TestRecord::empty(*id);
            row.powder_charge_gr = Some(charge);
            row
        })
        .collect()
}

fn charge_range(min: f64, max: f64) -> Vec<Predicate> {
    vec![Predicate::NumericRange {
        field: NumericField::PowderChargeGr,
        min,
        max,
    }]
}

#[test]
fn test_no_predicates_passes_everything_selected() {
    let mut engine = FilterEngine::new();
    let filtered = engine.apply(&table(), &[]);
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|row| row.selected));
}

#[test]
fn test_predicates_combine_with_and() {
    let mut engine = FilterEngine::new();
    let mut predicates = charge_range(23.0, 24.0);
    predicates.push(Predicate::NumericRange {
        field: NumericField::PowderChargeGr,
        min: 23.4,
        max: 23.6,
    });

    let filtered = engine.apply(&table(), &predicates);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].test_id, "b");
}

#[test]
fn test_manual_deselection_survives_tightening_and_loosening() {
    let mut engine = FilterEngine::new();

    let view = engine.apply(&table(), &[]);
    assert_eq!(view.len(), 3);
    engine.set_selected("a", false);

    // Tighten: drop row c
    let tightened = engine.apply(&table(), &charge_range(22.9, 23.6));
    assert_eq!(tightened.len(), 2);
    assert!(!tightened.iter().find(|r| r.test_id == "a").unwrap().selected);
    assert!(tightened.iter().find(|r| r.test_id == "b").unwrap().selected);

    // Loosen again: a's deselection still holds
    let loosened = engine.apply(&table(), &charge_range(22.0, 25.0));
    assert_eq!(loosened.len(), 3);
    assert!(!loosened.iter().find(|r| r.test_id == "a").unwrap().selected);
}

#[test]
fn test_filtered_out_row_reappears_as_selected() {
    let mut engine = FilterEngine::new();

    // B arrives deselected in the incoming table
    let mut input = table();
    input[1].selected = false;

    // First filter removes B; A and C keep their flags
    let without_b = engine.apply(&input, &charge_range(23.9, 24.1));
    assert_eq!(without_b.len(), 1);
    assert_eq!(without_b[0].test_id, "c");

    let mixed = engine.apply(&table(), &charge_range(22.9, 24.1));
    let b = mixed.iter().find(|r| r.test_id == "b").unwrap();
    // B was never re-observed while deselected, so it comes back selected
    assert!(b.selected);
}

#[test]
fn test_tracked_flag_wins_over_incoming_table_flag() {
    let mut engine = FilterEngine::new();
    engine.apply(&table(), &[]);
    engine.set_selected("b", false);

    // A fresh corpus rebuild hands every row back as selected
    let rebuilt = engine.apply(&table(), &[]);
    let b = rebuilt.iter().find(|r| r.test_id == "b").unwrap();
    assert!(!b.selected);
}

#[test]
fn test_incoming_flag_adopted_for_untracked_rows() {
    let mut engine = FilterEngine::new();
    let mut input = table();
    input[0].selected = false;

    let filtered = engine.apply(&input, &[]);
    assert!(!filtered.iter().find(|r| r.test_id == "a").unwrap().selected);
}

#[test]
fn test_never_seen_rows_default_to_selected() {
    let mut engine = FilterEngine::new();
    engine.apply(&table(), &charge_range(23.4, 23.6));

    // A new test directory appears between scans
    let mut grown = table();
    let mut new_row = TestRecord::empty("d");
    new_row.powder_charge_gr = Some(24.5);
    grown.push(new_row);

    let filtered = engine.apply(&grown, &[]);
    assert!(filtered.iter().find(|r| r.test_id == "d").unwrap().selected);
}

#[test]
fn test_select_and_deselect_all() {
    let mut engine = FilterEngine::new();
    engine.apply(&table(), &[]);

    engine.deselect_all();
    let view = engine.apply(&table(), &[]);
    assert!(view.iter().all(|row| !row.selected));

    engine.select_all();
    let view = engine.apply(&table(), &[]);
    assert!(view.iter().all(|row| row.selected));
}

#[test]
fn test_reset_forgets_selections() {
    let mut engine = FilterEngine::new();
    engine.apply(&table(), &[]);
    engine.set_selected("a", false);

    engine.reset();
    assert!(engine.is_selected("a"));
    let view = engine.apply(&table(), &[]);
    assert!(view.iter().all(|row| row.selected));
}

#[test]
fn test_input_table_is_not_mutated() {
    let mut engine = FilterEngine::new();
    let input = table();
    let before = input.clone();
    engine.apply(&input, &charge_range(23.4, 23.6));
    assert_eq!(input, before);
}
