//! Writer behavior: persistence, section omission, and load-back fidelity

use tempfile::TempDir;

use crate::app::models::TestRecord;
use crate::app::services::record_file::{
    load_record_file, record_file_path, save_record_file, schema::RecordFile,
};

fn edited_record() -> TestRecord {
    let mut record = TestRecord::empty("2025-04-15__edited");
    record.date = Some("2025-04-15".to_string());
    record.distance_m = Some(300);
    record.calibre = Some("6.5CM".to_string());
    record.powder_brand = Some("ADI".to_string());
    record.powder_charge_gr = Some(41.8);
    record.shots = Some(10);
    record.group_es_mm = Some(38.0);
    record.avg_velocity_fps = Some(2705.0);
    record
}

#[test]
fn test_saved_record_loads_back_identically() {
    let dir = TempDir::new().unwrap();
    let record = edited_record();

    save_record_file(dir.path(), &record).unwrap();
    let mut loaded = load_record_file(dir.path());

    // Identity comes from the directory, not from the file
    loaded.test_id = record.test_id.clone();
    assert_eq!(loaded, record);
}

#[test]
fn test_save_overwrites_previous_contents() {
    let dir = TempDir::new().unwrap();
    let mut record = edited_record();

    save_record_file(dir.path(), &record).unwrap();
    record.powder_charge_gr = Some(42.0);
    record.notes = Some("warmer load".to_string());
    save_record_file(dir.path(), &record).unwrap();

    let loaded = load_record_file(dir.path());
    assert_eq!(loaded.powder_charge_gr, Some(42.0));
    assert_eq!(loaded.notes.as_deref(), Some("warmer load"));
}

#[test]
fn test_empty_sections_are_omitted_from_yaml() {
    let dir = TempDir::new().unwrap();
    let mut record = TestRecord::empty("t");
    record.date = Some("2025-04-15".to_string());

    save_record_file(dir.path(), &record).unwrap();
    let text = std::fs::read_to_string(record_file_path(dir.path())).unwrap();

    assert!(text.contains("date:"));
    assert!(!text.contains("platform:"));
    assert!(!text.contains("environment:"));
    assert!(!text.contains("chrono:"));
}

#[test]
fn test_selected_flag_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut record = edited_record();
    record.selected = false;

    save_record_file(dir.path(), &record).unwrap();
    let text = std::fs::read_to_string(record_file_path(dir.path())).unwrap();
    assert!(!text.contains("selected"));

    // Loads back with the in-memory default
    let loaded = load_record_file(dir.path());
    assert!(loaded.selected);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("does-not-exist");

    let result = save_record_file(&gone, &edited_record());
    assert!(result.is_err());
}

#[test]
fn test_nested_shape_round_trips_through_flat_record() {
    let record = edited_record();
    let nested = RecordFile::from_record(&record);
    let flattened = nested.flatten(&record.test_id);
    assert_eq!(flattened, record);
}
