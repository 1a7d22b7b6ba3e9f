//! Command-line argument definitions for the loadbook CLI
//!
//! The CLI is a thin consumer of the record engine: it resolves a tests
//! root, builds the corpus, and applies whatever filter flags were given.
//! Anything not expressible as a flag lives in the library API instead.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "loadbook",
    version,
    about = "Aggregate and query precision rifle load-development test records",
    long_about = "Scans a tests directory in which every subdirectory is one load-development \
                  test (an encoded directory name plus an optional group.yaml record file), \
                  builds a unified table across both sources, and evaluates range, equality \
                  and membership filters against it."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the corpus and list matching tests
    Scan(ScanArgs),
    /// Print every known field of a single test
    Show(ShowArgs),
    /// Print derived min/max filter bounds for the corpus
    Bounds(BoundsArgs),
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Tests root directory (defaults to the configured tests_dir)
    #[arg(short = 'r', long = "root", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Only tests of this calibre ("All" disables the filter)
    #[arg(long, value_name = "CALIBRE", default_value = "All")]
    pub calibre: String,

    /// Only tests shot with this rifle ("All" disables the filter)
    #[arg(long, value_name = "RIFLE", default_value = "All")]
    pub rifle: String,

    /// Only tests using this bullet brand ("All" disables the filter)
    #[arg(long = "bullet-brand", value_name = "BRAND", default_value = "All")]
    pub bullet_brand: String,

    /// Only tests using this powder brand ("All" disables the filter)
    #[arg(long = "powder-brand", value_name = "BRAND", default_value = "All")]
    pub powder_brand: String,

    /// Earliest test date, yyyy-MM-dd (requires --date-to)
    #[arg(long = "date-from", value_name = "DATE")]
    pub date_from: Option<String>,

    /// Latest test date, yyyy-MM-dd (requires --date-from)
    #[arg(long = "date-to", value_name = "DATE")]
    pub date_to: Option<String>,

    /// Minimum powder charge in grains (requires --charge-max)
    #[arg(long = "charge-min", value_name = "GRAINS")]
    pub charge_min: Option<String>,

    /// Maximum powder charge in grains (requires --charge-min)
    #[arg(long = "charge-max", value_name = "GRAINS")]
    pub charge_max: Option<String>,

    /// Minimum group extreme spread in MOA (requires --group-moa-max)
    #[arg(long = "group-moa-min", value_name = "MOA")]
    pub group_moa_min: Option<String>,

    /// Maximum group extreme spread in MOA (requires --group-moa-min)
    #[arg(long = "group-moa-max", value_name = "MOA")]
    pub group_moa_max: Option<String>,

    /// Minimum average velocity in fps (requires --velocity-max)
    #[arg(long = "velocity-min", value_name = "FPS")]
    pub velocity_min: Option<String>,

    /// Maximum average velocity in fps (requires --velocity-min)
    #[arg(long = "velocity-max", value_name = "FPS")]
    pub velocity_max: Option<String>,

    /// Keep only these light conditions (repeatable; no flag means all)
    #[arg(long = "light", value_name = "CONDITION")]
    pub light: Vec<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Directory name of the test to print
    #[arg(value_name = "TEST_ID")]
    pub test_id: String,

    /// Tests root directory (defaults to the configured tests_dir)
    #[arg(short = 'r', long = "root", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Arguments for the bounds command
#[derive(Debug, Clone, Parser)]
pub struct BoundsArgs {
    /// Tests root directory (defaults to the configured tests_dir)
    #[arg(short = 'r', long = "root", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults_to_wildcards() {
        let args = Args::parse_from(["loadbook", "scan"]);
        let Some(Commands::Scan(scan)) = args.command else {
            panic!("expected scan subcommand");
        };
        assert_eq!(scan.calibre, "All");
        assert_eq!(scan.powder_brand, "All");
        assert!(scan.light.is_empty());
        assert_eq!(scan.date_from, None);
        assert_eq!(scan.log_level, "info");
    }

    #[test]
    fn test_scan_filter_flags_parse() {
        let args = Args::parse_from([
            "loadbook",
            "scan",
            "--root",
            "/tmp/tests",
            "--calibre",
            "223",
            "--charge-min",
            "23.0",
            "--charge-max",
            "24.0",
            "--light",
            "Sunny",
            "--light",
            "Overcast",
        ]);
        let Some(Commands::Scan(scan)) = args.command else {
            panic!("expected scan subcommand");
        };
        assert_eq!(
            scan.root.as_deref(),
            Some(std::path::Path::new("/tmp/tests"))
        );
        assert_eq!(scan.calibre, "223");
        assert_eq!(scan.charge_min.as_deref(), Some("23.0"));
        assert_eq!(scan.light, vec!["Sunny", "Overcast"]);
    }

    #[test]
    fn test_show_requires_test_id() {
        assert!(Args::try_parse_from(["loadbook", "show"]).is_err());

        let args = Args::parse_from(["loadbook", "show", "2025-04-15__300__223"]);
        let Some(Commands::Show(show)) = args.command else {
            panic!("expected show subcommand");
        };
        assert_eq!(show.test_id, "2025-04-15__300__223");
    }
}
