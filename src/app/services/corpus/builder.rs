//! Directory scan and table assembly

use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::models::TestRecord;
use crate::app::services::merger::merge;
use crate::app::services::name_parser::parse_directory_name;
use crate::app::services::record_file::{load_record_file, record_file_path};
use crate::constants::EARLY_DATE_SENTINEL;

/// Counters describing one corpus scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Immediate subdirectories considered (hidden ones excluded)
    pub directories: usize,
    /// Rows whose directory carried a structured record file
    pub with_record_file: usize,
    /// Rows built from the legacy name parse alone
    pub legacy_only: usize,
}

/// Build the full corpus table for a tests root directory
///
/// Returns the rows sorted by `(date, powder_charge_gr)` ascending, with
/// missing dates ordered first via an early sentinel. A missing or
/// unreadable root yields an empty table; surfacing that condition to the
/// user is the caller's job.
pub fn build_corpus(root: &Path) -> Vec<TestRecord> {
    build_corpus_with_stats(root).0
}

/// Build the corpus and report scan counters alongside it
pub fn build_corpus_with_stats(root: &Path) -> (Vec<TestRecord>, ScanStats) {
    let mut stats = ScanStats::default();

    if !root.is_dir() {
        warn!("tests directory does not exist: {}", root.display());
        return (Vec::new(), stats);
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!("skipping unreadable entry under '{}': {}", root.display(), error);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            debug!("skipping hidden directory '{name}'");
            continue;
        }

        stats.directories += 1;
        if record_file_path(entry.path()).exists() {
            stats.with_record_file += 1;
        } else {
            stats.legacy_only += 1;
        }

        let parsed = parse_directory_name(&name);
        let file = load_record_file(entry.path());
        records.push(merge(&parsed, &file));
    }

    sort_corpus(&mut records);

    info!(
        "corpus built: {} tests ({} with record file, {} legacy-only)",
        records.len(),
        stats.with_record_file,
        stats.legacy_only
    );

    (records, stats)
}

/// Order rows by date then powder charge, both ascending
///
/// Missing values sort first: dates through the sentinel, charges through
/// negative infinity. The comparison never fails on absent fields.
fn sort_corpus(records: &mut [TestRecord]) {
    records.sort_by(|a, b| {
        let date_a = a.date.as_deref().unwrap_or(EARLY_DATE_SENTINEL);
        let date_b = b.date.as_deref().unwrap_or(EARLY_DATE_SENTINEL);
        date_a.cmp(date_b).then_with(|| {
            let charge_a = a.powder_charge_gr.unwrap_or(f64::NEG_INFINITY);
            let charge_b = b.powder_charge_gr.unwrap_or(f64::NEG_INFINITY);
            charge_a.total_cmp(&charge_b)
        })
    });
}
