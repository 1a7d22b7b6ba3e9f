//! Show command: print every known field of a single test

use colored::Colorize;

use super::shared::{display, display_f1, resolve_tests_root, setup_logging};
use crate::app::models::TestRecord;
use crate::app::services::chrono_csv::load_velocity_stats;
use crate::app::services::corpus::build_corpus;
use crate::cli::args::ShowArgs;
use crate::{Error, Result};

/// Run the show command
pub fn run_show(args: ShowArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let root = resolve_tests_root(args.root.clone())?;
    let corpus = build_corpus(&root);

    let record = corpus
        .iter()
        .find(|record| record.test_id == args.test_id)
        .ok_or_else(|| {
            Error::record_file(
                root.display().to_string(),
                format!("no test named '{}'", args.test_id),
                None,
            )
        })?;

    print_record(record);

    // No stored chrono summary: fall back to the raw export, if any
    if record.avg_velocity_fps.is_none() {
        if let Some(stats) = load_velocity_stats(&root.join(&args.test_id)) {
            println!("\n{}", "Velocity (raw chronograph export)".bold());
            println!("  average (fps):   {:.1}", stats.avg_velocity_fps);
            println!("  SD (fps):        {:.1}", stats.sd_fps);
            println!("  ES (fps):        {:.1}", stats.es_fps);
            println!("  samples:         {}", stats.samples);
        }
    }

    Ok(())
}

fn print_record(record: &TestRecord) {
    println!("{}", record.test_id.bold());

    println!("\n{}", "Test".bold());
    println!("  date:            {}", display(&record.date));
    println!("  distance (m):    {}", display(&record.distance_m));
    println!("  shots:           {}", display(&record.shots));
    println!("  notes:           {}", display(&record.notes));

    println!("\n{}", "Platform".bold());
    println!("  calibre:         {}", display(&record.calibre));
    println!("  rifle:           {}", display(&record.rifle));
    println!("  barrel (in):     {}", display_f1(&record.barrel_length_in));
    println!("  twist rate:      {}", display(&record.twist_rate));

    println!("\n{}", "Ammunition".bold());
    println!("  bullet:          {} {}", display(&record.bullet_brand), display(&record.bullet_model));
    println!("  bullet (gr):     {}", display_f1(&record.bullet_weight_gr));
    println!("  bullet lot:      {}", display(&record.bullet_lot));
    println!("  powder:          {} {}", display(&record.powder_brand), display(&record.powder_model));
    println!("  charge (gr):     {}", display_f1(&record.powder_charge_gr));
    println!("  powder lot:      {}", display(&record.powder_lot));
    println!("  case:            {}", display(&record.case_brand));
    println!("  case lot:        {}", display(&record.case_lot));
    println!("  neck turned:     {}", display(&record.neck_turned));
    println!("  sizing:          {}", display(&record.brass_sizing));
    println!("  bushing:         {}", display_f1(&record.bushing_size));
    println!("  shoulder bump:   {}", display_f1(&record.shoulder_bump));
    println!("  primer:          {} {}", display(&record.primer_brand), display(&record.primer_model));
    println!("  primer lot:      {}", display(&record.primer_lot));
    println!("  COAL (in):       {}", display_f1(&record.coal_in));
    println!("  B2O (in):        {}", display_f1(&record.b2o_in));

    println!("\n{}", "Environment".bold());
    println!("  temperature (C): {}", display_f1(&record.temperature_c));
    println!("  humidity (%):    {}", display_f1(&record.humidity_pct));
    println!("  pressure (hPa):  {}", display_f1(&record.pressure_hpa));
    println!("  wind (m/s):      {}", display_f1(&record.wind_speed_ms));
    println!("  wind direction:  {}", display(&record.wind_direction));
    println!("  light:           {}", display(&record.light_conditions));

    println!("\n{}", "Group".bold());
    println!("  ES (mm):         {}", display_f1(&record.group_es_mm));
    println!("  ES (MOA):        {}", display_f1(&record.group_es_moa));
    println!("  ES x (mm):       {}", display_f1(&record.group_es_x_mm));
    println!("  ES x (MOA):      {}", display_f1(&record.group_es_x_moa));
    println!("  ES y (mm):       {}", display_f1(&record.group_es_y_mm));
    println!("  ES y (MOA):      {}", display_f1(&record.group_es_y_moa));
    println!("  mean radius (mm):  {}", display_f1(&record.mean_radius_mm));
    println!("  mean radius (MOA): {}", display_f1(&record.mean_radius_moa));
    println!("  POI x (mm):      {}", display_f1(&record.poi_x_mm));
    println!("  POI x (MOA):     {}", display_f1(&record.poi_x_moa));
    println!("  POI y (mm):      {}", display_f1(&record.poi_y_mm));
    println!("  POI y (MOA):     {}", display_f1(&record.poi_y_moa));

    println!("\n{}", "Velocity".bold());
    println!("  average (fps):   {}", display_f1(&record.avg_velocity_fps));
    println!("  SD (fps):        {}", display_f1(&record.sd_fps));
    println!("  ES (fps):        {}", display_f1(&record.es_fps));
}
