//! Bounds command: print derived filter bounds for the corpus

use colored::Colorize;

use super::shared::{resolve_tests_root, setup_logging};
use crate::app::models::{NumericField, TestRecord, TextField};
use crate::app::services::corpus::build_corpus;
use crate::app::services::filter::bounds::{date_bounds, distinct_values, numeric_bounds};
use crate::cli::args::BoundsArgs;
use crate::Result;

/// Run the bounds command
pub fn run_bounds(args: BoundsArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let root = resolve_tests_root(args.root.clone())?;
    let corpus = build_corpus(&root);

    println!(
        "{} ({} tests)",
        "Derived filter bounds".bold(),
        corpus.len()
    );

    match date_bounds(&corpus) {
        Some((from, to)) => println!("  dates:           {} .. {}", from, to),
        None => println!("  dates:           no dated tests"),
    }

    let numeric_columns = [
        ("distance (m)", NumericField::DistanceM),
        ("bullet (gr)", NumericField::BulletWeightGr),
        ("charge (gr)", NumericField::PowderChargeGr),
        ("group ES (mm)", NumericField::GroupEsMm),
        ("group ES (MOA)", NumericField::GroupEsMoa),
        ("mean radius (MOA)", NumericField::MeanRadiusMoa),
        ("velocity (fps)", NumericField::AvgVelocityFps),
        ("SD (fps)", NumericField::SdFps),
        ("ES (fps)", NumericField::EsFps),
    ];
    for (label, field) in numeric_columns {
        print_numeric(&corpus, label, field);
    }

    let text_columns = [
        ("calibres", TextField::Calibre),
        ("rifles", TextField::Rifle),
        ("bullet brands", TextField::BulletBrand),
        ("powder brands", TextField::PowderBrand),
        ("light conditions", TextField::LightConditions),
    ];
    for (label, field) in text_columns {
        let values = distinct_values(&corpus, field);
        println!("  {:<16} {}", format!("{}:", label), values.join(", "));
    }

    Ok(())
}

fn print_numeric(corpus: &[TestRecord], label: &str, field: NumericField) {
    match numeric_bounds(corpus, field) {
        Some((min, max)) => println!("  {:<16} {:.2} .. {:.2}", format!("{}:", label), min, max),
        None => println!("  {:<16} no values", format!("{}:", label)),
    }
}
