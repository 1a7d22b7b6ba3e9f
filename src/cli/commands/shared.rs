//! Shared components for CLI commands
//!
//! Logging setup, tests-root resolution, and the handful of formatting
//! helpers the subcommands have in common.

use std::path::PathBuf;

use tracing::debug;

use crate::app::models::TestRecord;
use crate::config::Config;
use crate::{Error, Result};

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins when set; otherwise the command's `--log-level` flag
/// scopes the filter to this crate.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("loadbook={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the tests root: explicit flag first, then the saved configuration
pub fn resolve_tests_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }

    let config = Config::load()?;
    if config.tests_dir.as_os_str().is_empty() {
        return Err(Error::configuration(
            "no tests directory configured; pass --root or set tests_dir in the config file",
        ));
    }
    Ok(config.tests_dir)
}

/// Render an optional value for tabular output
pub fn display<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Render an optional float to one decimal place
pub fn display_f1(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// One-line summary of a test for scan output
pub fn summary_line(record: &TestRecord) -> String {
    format!(
        "{:<10}  {:>5}  {:<8}  {:>7}  {:>8}  {:>7}  {}",
        display(&record.date),
        display(&record.distance_m),
        display(&record.calibre),
        display_f1(&record.powder_charge_gr),
        display_f1(&record.group_es_moa),
        display_f1(&record.avg_velocity_fps),
        record.test_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_helpers_use_dash_for_missing() {
        assert_eq!(display::<u32>(&None), "-");
        assert_eq!(display(&Some(300u32)), "300");
        assert_eq!(display_f1(&None), "-");
        assert_eq!(display_f1(&Some(23.45)), "23.4");
    }

    #[test]
    fn test_explicit_root_wins_over_config() {
        let root = resolve_tests_root(Some(PathBuf::from("/tmp/somewhere"))).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/somewhere"));
    }
}
