//! Two-source record merging
//!
//! Every test has two partially-overlapping sources of truth: the legacy
//! encoded directory name and the structured record file. The merge rule is
//! fixed: a present record-file value always wins, the name parse fills the
//! gaps, and `test_id` always comes from the parsed record because the
//! directory name is the canonical identity.
//!
//! After the field-level merge, linear target measurements gain derived MOA
//! counterparts where those are still missing, using the merged distance.
//! Merging is pure and idempotent: no input is mutated, and merging the same
//! inputs twice yields the same row.

use crate::app::models::TestRecord;
use crate::app::services::units::mm_to_moa;

/// Merge the name-parse fallback and the record-file values into one row
pub fn merge(parsed: &TestRecord, file: &TestRecord) -> TestRecord {
    let mut merged = TestRecord {
        test_id: parsed.test_id.clone(),
        date: pick(&file.date, &parsed.date),
        distance_m: file.distance_m.or(parsed.distance_m),
        notes: pick(&file.notes, &parsed.notes),

        calibre: pick(&file.calibre, &parsed.calibre),
        rifle: pick(&file.rifle, &parsed.rifle),
        barrel_length_in: file.barrel_length_in.or(parsed.barrel_length_in),
        twist_rate: pick(&file.twist_rate, &parsed.twist_rate),

        bullet_brand: pick(&file.bullet_brand, &parsed.bullet_brand),
        bullet_model: pick(&file.bullet_model, &parsed.bullet_model),
        bullet_weight_gr: file.bullet_weight_gr.or(parsed.bullet_weight_gr),
        bullet_lot: pick(&file.bullet_lot, &parsed.bullet_lot),
        powder_brand: pick(&file.powder_brand, &parsed.powder_brand),
        powder_model: pick(&file.powder_model, &parsed.powder_model),
        powder_charge_gr: file.powder_charge_gr.or(parsed.powder_charge_gr),
        powder_lot: pick(&file.powder_lot, &parsed.powder_lot),
        case_brand: pick(&file.case_brand, &parsed.case_brand),
        case_lot: pick(&file.case_lot, &parsed.case_lot),
        neck_turned: pick(&file.neck_turned, &parsed.neck_turned),
        brass_sizing: pick(&file.brass_sizing, &parsed.brass_sizing),
        bushing_size: file.bushing_size.or(parsed.bushing_size),
        shoulder_bump: file.shoulder_bump.or(parsed.shoulder_bump),
        primer_brand: pick(&file.primer_brand, &parsed.primer_brand),
        primer_model: pick(&file.primer_model, &parsed.primer_model),
        primer_lot: pick(&file.primer_lot, &parsed.primer_lot),
        coal_in: file.coal_in.or(parsed.coal_in),
        b2o_in: file.b2o_in.or(parsed.b2o_in),

        temperature_c: file.temperature_c.or(parsed.temperature_c),
        humidity_pct: file.humidity_pct.or(parsed.humidity_pct),
        pressure_hpa: file.pressure_hpa.or(parsed.pressure_hpa),
        wind_speed_ms: file.wind_speed_ms.or(parsed.wind_speed_ms),
        wind_direction: pick(&file.wind_direction, &parsed.wind_direction),
        light_conditions: pick(&file.light_conditions, &parsed.light_conditions),

        shots: file.shots.or(parsed.shots),
        group_es_mm: file.group_es_mm.or(parsed.group_es_mm),
        group_es_moa: file.group_es_moa.or(parsed.group_es_moa),
        mean_radius_mm: file.mean_radius_mm.or(parsed.mean_radius_mm),
        mean_radius_moa: file.mean_radius_moa.or(parsed.mean_radius_moa),
        group_es_x_mm: file.group_es_x_mm.or(parsed.group_es_x_mm),
        group_es_x_moa: file.group_es_x_moa.or(parsed.group_es_x_moa),
        group_es_y_mm: file.group_es_y_mm.or(parsed.group_es_y_mm),
        group_es_y_moa: file.group_es_y_moa.or(parsed.group_es_y_moa),
        poi_x_mm: file.poi_x_mm.or(parsed.poi_x_mm),
        poi_x_moa: file.poi_x_moa.or(parsed.poi_x_moa),
        poi_y_mm: file.poi_y_mm.or(parsed.poi_y_mm),
        poi_y_moa: file.poi_y_moa.or(parsed.poi_y_moa),

        avg_velocity_fps: file.avg_velocity_fps.or(parsed.avg_velocity_fps),
        sd_fps: file.sd_fps.or(parsed.sd_fps),
        es_fps: file.es_fps.or(parsed.es_fps),

        selected: true,
    };

    fill_derived_moa(&mut merged);
    merged
}

/// Fill missing MOA fields from their mm counterparts at the merged distance
///
/// A stored MOA value is left untouched even if it disagrees with the mm
/// value; the mm-from-MOA direction is never derived.
fn fill_derived_moa(record: &mut TestRecord) {
    let distance_m = record.distance_m;

    record.group_es_moa = record
        .group_es_moa
        .or_else(|| mm_to_moa(record.group_es_mm, distance_m));
    record.mean_radius_moa = record
        .mean_radius_moa
        .or_else(|| mm_to_moa(record.mean_radius_mm, distance_m));
    record.group_es_x_moa = record
        .group_es_x_moa
        .or_else(|| mm_to_moa(record.group_es_x_mm, distance_m));
    record.group_es_y_moa = record
        .group_es_y_moa
        .or_else(|| mm_to_moa(record.group_es_y_mm, distance_m));
    record.poi_x_moa = record
        .poi_x_moa
        .or_else(|| mm_to_moa(record.poi_x_mm, distance_m));
    record.poi_y_moa = record
        .poi_y_moa
        .or_else(|| mm_to_moa(record.poi_y_mm, distance_m));
}

fn pick<T: Clone>(file: &Option<T>, parsed: &Option<T>) -> Option<T> {
    file.clone().or_else(|| parsed.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_fixture() -> TestRecord {
        let mut record = TestRecord::empty("2025-04-15__fixture");
        record.date = Some("2025-04-15".to_string());
        record.distance_m = Some(100);
        record.calibre = Some("223".to_string());
        record.rifle = Some("Tikka T3X".to_string());
        record.powder_charge_gr = Some(23.5);
        record
    }

    fn file_fixture() -> TestRecord {
        let mut record = TestRecord::empty("ignored-id");
        record.calibre = Some("223 Rem".to_string());
        record.powder_charge_gr = Some(23.44);
        record.shots = Some(5);
        record.group_es_mm = Some(100.0);
        record
    }

    #[test]
    fn test_file_value_wins_over_parsed() {
        let merged = merge(&parsed_fixture(), &file_fixture());
        assert_eq!(merged.calibre.as_deref(), Some("223 Rem"));
        assert_eq!(merged.powder_charge_gr, Some(23.44));
    }

    #[test]
    fn test_parsed_fills_missing_file_fields() {
        let merged = merge(&parsed_fixture(), &file_fixture());
        assert_eq!(merged.date.as_deref(), Some("2025-04-15"));
        assert_eq!(merged.rifle.as_deref(), Some("Tikka T3X"));
        assert_eq!(merged.distance_m, Some(100));
    }

    #[test]
    fn test_test_id_always_from_parsed_record() {
        let merged = merge(&parsed_fixture(), &file_fixture());
        assert_eq!(merged.test_id, "2025-04-15__fixture");
    }

    #[test]
    fn test_field_missing_in_both_stays_missing() {
        let merged = merge(&parsed_fixture(), &file_fixture());
        assert_eq!(merged.avg_velocity_fps, None);
        assert_eq!(merged.temperature_c, None);
    }

    #[test]
    fn test_moa_fill_in_uses_merged_distance() {
        // group_es_mm from the file, distance_m from the name parse
        let merged = merge(&parsed_fixture(), &file_fixture());
        let moa = merged.group_es_moa.unwrap();
        assert!((moa - 3.438).abs() < 0.001);
    }

    #[test]
    fn test_stored_moa_not_recomputed() {
        let mut file = file_fixture();
        file.group_es_moa = Some(9.99); // deliberately inconsistent with the mm value

        let merged = merge(&parsed_fixture(), &file);
        assert_eq!(merged.group_es_moa, Some(9.99));
    }

    #[test]
    fn test_no_moa_without_distance() {
        let mut parsed = parsed_fixture();
        parsed.distance_m = None;
        let merged = merge(&parsed, &file_fixture());
        assert_eq!(merged.group_es_moa, None);
    }

    #[test]
    fn test_merge_is_pure_and_idempotent() {
        let parsed = parsed_fixture();
        let file = file_fixture();

        let first = merge(&parsed, &file);
        let second = merge(&parsed, &file);
        assert_eq!(first, second);

        // Inputs are untouched
        assert_eq!(parsed, parsed_fixture());
        assert_eq!(file, file_fixture());

        // Re-merging the merged row against the same file is stable
        let remerged = merge(&first, &file);
        assert_eq!(remerged.test_id, first.test_id);
        assert_eq!(remerged.group_es_moa, first.group_es_moa);
        assert_eq!(remerged.powder_charge_gr, first.powder_charge_gr);
    }
}
