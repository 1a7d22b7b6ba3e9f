//! Chronograph CSV ingestion
//!
//! Raw per-shot chronograph exports sit next to the record file as
//! `*Rifle_Cartridge*.csv` with a `Velocity(fps)` column. The structured
//! record's `chrono` section supersedes this path as the authoritative
//! velocity source; these stats are only computed for directories that have
//! the export but no stored summary, and the corpus builder does not depend
//! on them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{CHRONO_CSV_MARKER, VELOCITY_COLUMN};
use crate::{Error, Result};

/// Velocity summary computed from raw chronograph samples
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityStats {
    pub avg_velocity_fps: f64,
    /// Population standard deviation over all samples
    pub sd_fps: f64,
    /// Extreme spread: fastest minus slowest shot
    pub es_fps: f64,
    pub samples: usize,
}

/// Compute velocity statistics from the first chronograph CSV in a directory
///
/// Returns `None` when no export exists, the velocity column is absent, no
/// sample parses, or any I/O error occurs. Failures are logged, never
/// propagated; a missing chronograph is a normal state for a test.
pub fn load_velocity_stats(test_dir: &Path) -> Option<VelocityStats> {
    match try_load(test_dir) {
        Ok(stats) => stats,
        Err(error) => {
            debug!("chronograph data unusable in '{}': {}", test_dir.display(), error);
            None
        }
    }
}

fn try_load(test_dir: &Path) -> Result<Option<VelocityStats>> {
    let Some(csv_path) = find_chrono_csv(test_dir)? else {
        return Ok(None);
    };

    let mut reader = csv::Reader::from_path(&csv_path)
        .map_err(|e| Error::chrono_csv(csv_path.display().to_string(), "opening export", Some(e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::chrono_csv(csv_path.display().to_string(), "reading headers", Some(e)))?;
    let Some(velocity_index) = headers.iter().position(|name| name.trim() == VELOCITY_COLUMN)
    else {
        return Err(Error::chrono_csv(
            csv_path.display().to_string(),
            format!("no '{VELOCITY_COLUMN}' column"),
            None,
        ));
    };

    // Blank cells and non-numeric rows (summary footers etc.) are skipped
    let mut velocities = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                debug!("skipping malformed row in '{}': {}", csv_path.display(), error);
                continue;
            }
        };
        if let Some(value) = row.get(velocity_index) {
            if let Ok(velocity) = value.trim().parse::<f64>() {
                velocities.push(velocity);
            }
        }
    }

    Ok(summarize(&velocities))
}

/// Locate the first chronograph export, name-sorted for determinism
fn find_chrono_csv(test_dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(test_dir)
        .map_err(|e| Error::io(format!("listing '{}'", test_dir.display()), e))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "csv")
                && path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().contains(CHRONO_CSV_MARKER))
        })
        .collect();

    candidates.sort();
    Ok(candidates.into_iter().next())
}

fn summarize(velocities: &[f64]) -> Option<VelocityStats> {
    if velocities.is_empty() {
        return None;
    }

    let samples = velocities.len();
    let mean = velocities.iter().sum::<f64>() / samples as f64;
    let variance =
        velocities.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / samples as f64;
    let fastest = velocities.iter().cloned().fold(f64::MIN, f64::max);
    let slowest = velocities.iter().cloned().fold(f64::MAX, f64::min);

    Some(VelocityStats {
        avg_velocity_fps: mean,
        sd_fps: variance.sqrt(),
        es_fps: fastest - slowest,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_export(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_stats_from_export() {
        let dir = TempDir::new().unwrap();
        write_export(
            &dir,
            "Rifle_Cartridge_2025.csv",
            "Shot,Velocity(fps)\n1,2840\n2,2850\n3,2860\n",
        );

        let stats = load_velocity_stats(dir.path()).unwrap();
        assert_eq!(stats.samples, 3);
        assert!((stats.avg_velocity_fps - 2850.0).abs() < 1e-9);
        assert!((stats.es_fps - 20.0).abs() < 1e-9);
        // population SD of {2840, 2850, 2860}
        assert!((stats.sd_fps - 8.1649658).abs() < 1e-6);
    }

    #[test]
    fn test_blank_and_non_numeric_cells_skipped() {
        let dir = TempDir::new().unwrap();
        write_export(
            &dir,
            "Rifle_Cartridge_2025.csv",
            "Shot,Velocity(fps)\n1,2840\n2,\n3,avg\n4,2860\n",
        );

        let stats = load_velocity_stats(dir.path()).unwrap();
        assert_eq!(stats.samples, 2);
        assert!((stats.es_fps - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_export_yields_none() {
        let dir = TempDir::new().unwrap();
        write_export(&dir, "notes.csv", "Velocity(fps)\n2840\n");
        assert_eq!(load_velocity_stats(dir.path()), None);
    }

    #[test]
    fn test_missing_velocity_column_yields_none() {
        let dir = TempDir::new().unwrap();
        write_export(&dir, "Rifle_Cartridge_2025.csv", "Shot,Speed\n1,2840\n");
        assert_eq!(load_velocity_stats(dir.path()), None);
    }

    #[test]
    fn test_empty_export_yields_none() {
        let dir = TempDir::new().unwrap();
        write_export(&dir, "Rifle_Cartridge_2025.csv", "Shot,Velocity(fps)\n");
        assert_eq!(load_velocity_stats(dir.path()), None);
    }

    #[test]
    fn test_missing_directory_yields_none() {
        assert_eq!(load_velocity_stats(Path::new("/no/such/dir")), None);
    }
}
