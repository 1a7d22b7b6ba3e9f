//! Application constants for loadbook
//!
//! This module contains the naming conventions, conversion factors, and
//! default values shared across the record engine.

// =============================================================================
// Record Store Layout
// =============================================================================

/// File name of the authoritative structured record inside each test directory
pub const GROUP_FILE_NAME: &str = "group.yaml";

/// Substring identifying a chronograph export CSV inside a test directory
pub const CHRONO_CSV_MARKER: &str = "Rifle_Cartridge";

/// Column header carrying per-shot velocities in chronograph exports
pub const VELOCITY_COLUMN: &str = "Velocity(fps)";

// =============================================================================
// Legacy Encoded Names
// =============================================================================

/// Separator between the date and the remaining encoded fields
pub const DATE_SEPARATOR: &str = "__";

/// Number of single-underscore tokens after the date separator
///
/// distance, calibre, rifle, case, bullet brand/model/weight,
/// powder brand/model/charge, coal, b2o, primer brand/model.
pub const LEGACY_FIELD_COUNT: usize = 14;

// =============================================================================
// Units and Ordering
// =============================================================================

/// Minutes of angle subtended by one unit of linear spread at one unit of
/// distance, scaled for mm over metres: MOA = mm * MOA_FACTOR / (m * 1000)
pub const MOA_FACTOR: f64 = 3438.0;

/// ISO date format used throughout the record store
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sort key substituted for records without a date so ordering never fails
pub const EARLY_DATE_SENTINEL: &str = "0000-00-00";

// =============================================================================
// Filtering
// =============================================================================

/// Wildcard literal that disables an equality predicate
pub const WILDCARD_ALL: &str = "All";
