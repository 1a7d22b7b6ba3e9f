//! Filter evaluation with selection carryover
//!
//! The engine owns an identity-keyed map from `test_id` to the user's
//! selection flag. The carryover rule, in precedence order:
//!
//! 1. an id the engine is still tracking keeps its recorded flag, whatever
//!    the incoming table says;
//! 2. an id the engine is not tracking adopts the incoming row's flag;
//! 3. after filtering, ids that fell out of view are dropped from the map,
//!    so a row that later reappears defaults back to selected.
//!
//! Rule 3 is a deliberate product decision: a row the user never re-observed
//! after it was filtered away does not inherit a stale deselection.

use std::collections::HashMap;

use tracing::debug;

use crate::app::models::TestRecord;

use super::predicate::Predicate;

/// Stateful filter evaluator for one analysis session
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    /// Selection flags keyed by `test_id`, covering only rows still in view
    selection: HashMap<String, bool>,
}

impl FilterEngine {
    /// Create an engine with no recorded selections
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply AND-combined predicates to a table, carrying selection over
    ///
    /// The input table is unchanged; the returned rows are clones with their
    /// `selected` flags reassigned by identity per the carryover rule.
    pub fn apply(&mut self, table: &[TestRecord], predicates: &[Predicate]) -> Vec<TestRecord> {
        // Adopt incoming flags for ids not already tracked
        for row in table {
            self.selection
                .entry(row.test_id.clone())
                .or_insert(row.selected);
        }

        let mut filtered: Vec<TestRecord> = table
            .iter()
            .filter(|row| predicates.iter().all(|predicate| predicate.matches(row)))
            .cloned()
            .collect();

        for row in &mut filtered {
            row.selected = self.selection.get(&row.test_id).copied().unwrap_or(true);
        }

        // Stop tracking rows that fell out of view; on reappearance they
        // default back to selected
        self.selection
            .retain(|id, _| filtered.iter().any(|row| &row.test_id == id));

        debug!(
            "filter pass: {} of {} rows match {} predicate(s)",
            filtered.len(),
            table.len(),
            predicates.len()
        );

        filtered
    }

    /// Record a manual selection change for a row currently in view
    pub fn set_selected(&mut self, test_id: &str, selected: bool) {
        self.selection.insert(test_id.to_string(), selected);
    }

    /// Whether a row is currently selected (default true when untracked)
    pub fn is_selected(&self, test_id: &str) -> bool {
        self.selection.get(test_id).copied().unwrap_or(true)
    }

    /// Mark every tracked row selected
    pub fn select_all(&mut self) {
        for flag in self.selection.values_mut() {
            *flag = true;
        }
    }

    /// Mark every tracked row deselected
    pub fn deselect_all(&mut self) {
        for flag in self.selection.values_mut() {
            *flag = false;
        }
    }

    /// Forget all recorded selections
    pub fn reset(&mut self) {
        self.selection.clear();
    }
}
