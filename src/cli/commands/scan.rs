//! Scan command: build the corpus and list tests matching the filter flags

use colored::Colorize;
use tracing::{info, warn};

use super::shared::{resolve_tests_root, setup_logging, summary_line};
use crate::app::models::{NumericField, TextField};
use crate::app::services::corpus::build_corpus_with_stats;
use crate::app::services::filter::{FilterEngine, Predicate};
use crate::cli::args::ScanArgs;
use crate::Result;

/// Run the scan command
pub fn run_scan(args: ScanArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let root = resolve_tests_root(args.root.clone())?;
    info!("Scanning tests root '{}'", root.display());

    let (corpus, stats) = build_corpus_with_stats(&root);
    let predicates = build_predicates(&args);

    let mut engine = FilterEngine::new();
    let matching = engine.apply(&corpus, &predicates);

    println!(
        "{}",
        format!(
            "{:<10}  {:>5}  {:<8}  {:>7}  {:>8}  {:>7}  {}",
            "date", "dist", "calibre", "charge", "es moa", "fps", "test"
        )
        .bold()
    );
    for record in &matching {
        println!("{}", summary_line(record));
    }

    println!();
    println!(
        "{} of {} tests matched ({} with record files, {} from directory names alone)",
        matching.len().to_string().bold(),
        stats.directories,
        stats.with_record_file,
        stats.legacy_only,
    );

    Ok(())
}

/// Translate the filter flags into predicates
///
/// Range flags are only honoured in pairs; a half-specified range is
/// reported and skipped rather than guessed at.
fn build_predicates(args: &ScanArgs) -> Vec<Predicate> {
    let mut predicates = vec![
        Predicate::Equals {
            field: TextField::Calibre,
            value: args.calibre.clone(),
        },
        Predicate::Equals {
            field: TextField::Rifle,
            value: args.rifle.clone(),
        },
        Predicate::Equals {
            field: TextField::BulletBrand,
            value: args.bullet_brand.clone(),
        },
        Predicate::Equals {
            field: TextField::PowderBrand,
            value: args.powder_brand.clone(),
        },
    ];

    push_date_range(&mut predicates, &args.date_from, &args.date_to);
    push_numeric_range(
        &mut predicates,
        NumericField::PowderChargeGr,
        "charge",
        &args.charge_min,
        &args.charge_max,
    );
    push_numeric_range(
        &mut predicates,
        NumericField::GroupEsMoa,
        "group-moa",
        &args.group_moa_min,
        &args.group_moa_max,
    );
    push_numeric_range(
        &mut predicates,
        NumericField::AvgVelocityFps,
        "velocity",
        &args.velocity_min,
        &args.velocity_max,
    );

    if !args.light.is_empty() {
        predicates.push(Predicate::OneOf {
            field: TextField::LightConditions,
            values: args.light.clone(),
        });
    }

    predicates
}

fn push_date_range(predicates: &mut Vec<Predicate>, from: &Option<String>, to: &Option<String>) {
    match (from, to) {
        (Some(from), Some(to)) => match Predicate::date_range_from_input(from, to) {
            Some(predicate) => predicates.push(predicate),
            None => warn!("Ignoring unparsable date range '{}'..'{}'", from, to),
        },
        (None, None) => {}
        _ => warn!("Ignoring half-specified date range; give both --date-from and --date-to"),
    }
}

fn push_numeric_range(
    predicates: &mut Vec<Predicate>,
    field: NumericField,
    name: &str,
    min: &Option<String>,
    max: &Option<String>,
) {
    match (min, max) {
        (Some(min), Some(max)) => match Predicate::numeric_range_from_input(field, min, max) {
            Some(predicate) => predicates.push(predicate),
            None => warn!("Ignoring unparsable {} range '{}'..'{}'", name, min, max),
        },
        (None, None) => {}
        _ => warn!(
            "Ignoring half-specified {} range; give both --{}-min and --{}-max",
            name, name, name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn scan_args(extra: &[&str]) -> ScanArgs {
        let mut argv = vec!["loadbook", "scan"];
        argv.extend_from_slice(extra);
        let crate::cli::args::Args {
            command: Some(crate::cli::args::Commands::Scan(args)),
        } = crate::cli::args::Args::parse_from(argv)
        else {
            panic!("expected scan subcommand");
        };
        args
    }

    #[test]
    fn test_wildcard_flags_still_produce_equality_predicates() {
        // All four equality predicates are always present; the wildcard
        // value makes them pass-through at match time.
        let predicates = build_predicates(&scan_args(&[]));
        assert_eq!(predicates.len(), 4);
    }

    #[test]
    fn test_paired_range_flags_add_predicates() {
        let predicates = build_predicates(&scan_args(&[
            "--charge-min",
            "23.0",
            "--charge-max",
            "24.0",
            "--date-from",
            "2025-04-01",
            "--date-to",
            "2025-04-30",
            "--light",
            "Sunny",
        ]));
        assert_eq!(predicates.len(), 7);
    }

    #[test]
    fn test_half_specified_range_is_skipped() {
        let predicates = build_predicates(&scan_args(&["--charge-min", "23.0"]));
        assert_eq!(predicates.len(), 4);
    }

    #[test]
    fn test_unparsable_range_is_skipped() {
        let predicates =
            build_predicates(&scan_args(&["--charge-min", "abc", "--charge-max", "24.0"]));
        assert_eq!(predicates.len(), 4);
    }
}
