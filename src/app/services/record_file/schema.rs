//! On-disk schema of the structured record file
//!
//! The YAML layout mirrors how the data is thought about at the bench:
//! top-level test info plus `platform`, `ammo` (with `bullet`, `powder`,
//! `case`, `primer` subsections), `environment`, `group`, and `chrono`
//! sections. Every key is optional; `null` and absent are equivalent and
//! both flatten to a missing field, never to zero.
//!
//! A few free-form keys (`twist_rate`, `wind_dir_deg`, `neck_turned`) appear
//! in the wild both as strings and as bare YAML scalars, so they use a
//! scalar-tolerant deserializer rather than failing the whole file.

use serde::{Deserialize, Deserializer, Serialize};

use crate::app::models::TestRecord;

/// Top-level structure of `group.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammo: Option<Ammo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrono: Option<ChronoResults>,
}

/// Rifle platform section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calibre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rifle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barrel_length_in: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar_string"
    )]
    pub twist_rate: Option<String>,
}

/// Ammunition section with component subsections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ammo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powder: Option<Powder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primer: Option<Primer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coal_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b2o_in: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bullet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_gr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Powder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_gr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Case {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar_string"
    )]
    pub neck_turned: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brass_sizing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bushing_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_bump: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Primer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
}

/// Shooting conditions section
///
/// On-disk key names predate the flat model: `humidity_percent`,
/// `wind_speed_mps`, `wind_dir_deg` and `weather` map to the record's
/// `humidity_pct`, `wind_speed_ms`, `wind_direction` and `light_conditions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_hpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed_mps: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar_string"
    )]
    pub wind_dir_deg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
}

/// Measured target results section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_es_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_es_moa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_radius_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_radius_moa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_es_x_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_es_x_moa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_es_y_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_es_y_moa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_x_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_x_moa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_y_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_y_moa: Option<f64>,
}

/// Chronograph summary section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronoResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_velocity_fps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_fps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es_fps: Option<f64>,
}

impl RecordFile {
    /// Flatten the nested sections into the flat corpus row shape
    ///
    /// Raw stored values pass through untouched; in particular no unit
    /// conversion happens here, and stored MOA values are kept as-is.
    pub fn flatten(&self, test_id: &str) -> TestRecord {
        let mut record = TestRecord::empty(test_id);

        record.date = self.date.clone();
        record.distance_m = self.distance_m;
        record.notes = self.notes.clone();

        if let Some(platform) = &self.platform {
            record.calibre = platform.calibre.clone();
            record.rifle = platform.rifle.clone();
            record.barrel_length_in = platform.barrel_length_in;
            record.twist_rate = platform.twist_rate.clone();
        }

        if let Some(ammo) = &self.ammo {
            record.coal_in = ammo.coal_in;
            record.b2o_in = ammo.b2o_in;
            if let Some(bullet) = &ammo.bullet {
                record.bullet_brand = bullet.brand.clone();
                record.bullet_model = bullet.model.clone();
                record.bullet_weight_gr = bullet.weight_gr;
                record.bullet_lot = bullet.lot.clone();
            }
            if let Some(powder) = &ammo.powder {
                record.powder_brand = powder.brand.clone();
                record.powder_model = powder.model.clone();
                record.powder_charge_gr = powder.charge_gr;
                record.powder_lot = powder.lot.clone();
            }
            if let Some(case) = &ammo.case {
                record.case_brand = case.brand.clone();
                record.case_lot = case.lot.clone();
                record.neck_turned = case.neck_turned.clone();
                record.brass_sizing = case.brass_sizing.clone();
                record.bushing_size = case.bushing_size;
                record.shoulder_bump = case.shoulder_bump;
            }
            if let Some(primer) = &ammo.primer {
                record.primer_brand = primer.brand.clone();
                record.primer_model = primer.model.clone();
                record.primer_lot = primer.lot.clone();
            }
        }

        if let Some(environment) = &self.environment {
            record.temperature_c = environment.temperature_c;
            record.humidity_pct = environment.humidity_percent;
            record.pressure_hpa = environment.pressure_hpa;
            record.wind_speed_ms = environment.wind_speed_mps;
            record.wind_direction = environment.wind_dir_deg.clone();
            record.light_conditions = environment.weather.clone();
        }

        if let Some(group) = &self.group {
            record.shots = group.shots;
            record.group_es_mm = group.group_es_mm;
            record.group_es_moa = group.group_es_moa;
            record.mean_radius_mm = group.mean_radius_mm;
            record.mean_radius_moa = group.mean_radius_moa;
            record.group_es_x_mm = group.group_es_x_mm;
            record.group_es_x_moa = group.group_es_x_moa;
            record.group_es_y_mm = group.group_es_y_mm;
            record.group_es_y_moa = group.group_es_y_moa;
            record.poi_x_mm = group.poi_x_mm;
            record.poi_x_moa = group.poi_x_moa;
            record.poi_y_mm = group.poi_y_mm;
            record.poi_y_moa = group.poi_y_moa;
        }

        if let Some(chrono) = &self.chrono {
            record.avg_velocity_fps = chrono.avg_velocity_fps;
            record.sd_fps = chrono.sd_fps;
            record.es_fps = chrono.es_fps;
        }

        record
    }

    /// Rebuild the nested on-disk shape from a flat record
    ///
    /// Sections with no data at all are omitted rather than written as empty
    /// mappings. The transient `selected` flag is not represented on disk.
    pub fn from_record(record: &TestRecord) -> Self {
        let platform = Platform {
            calibre: record.calibre.clone(),
            rifle: record.rifle.clone(),
            barrel_length_in: record.barrel_length_in,
            twist_rate: record.twist_rate.clone(),
        };

        let bullet = Bullet {
            brand: record.bullet_brand.clone(),
            model: record.bullet_model.clone(),
            weight_gr: record.bullet_weight_gr,
            lot: record.bullet_lot.clone(),
        };
        let powder = Powder {
            brand: record.powder_brand.clone(),
            model: record.powder_model.clone(),
            charge_gr: record.powder_charge_gr,
            lot: record.powder_lot.clone(),
        };
        let case = Case {
            brand: record.case_brand.clone(),
            lot: record.case_lot.clone(),
            neck_turned: record.neck_turned.clone(),
            brass_sizing: record.brass_sizing.clone(),
            bushing_size: record.bushing_size,
            shoulder_bump: record.shoulder_bump,
        };
        let primer = Primer {
            brand: record.primer_brand.clone(),
            model: record.primer_model.clone(),
            lot: record.primer_lot.clone(),
        };
        let ammo = Ammo {
            bullet: some_unless_default(bullet),
            powder: some_unless_default(powder),
            case: some_unless_default(case),
            primer: some_unless_default(primer),
            coal_in: record.coal_in,
            b2o_in: record.b2o_in,
        };

        let environment = Environment {
            temperature_c: record.temperature_c,
            humidity_percent: record.humidity_pct,
            pressure_hpa: record.pressure_hpa,
            wind_speed_mps: record.wind_speed_ms,
            wind_dir_deg: record.wind_direction.clone(),
            weather: record.light_conditions.clone(),
        };

        let group = GroupResults {
            shots: record.shots,
            group_es_mm: record.group_es_mm,
            group_es_moa: record.group_es_moa,
            mean_radius_mm: record.mean_radius_mm,
            mean_radius_moa: record.mean_radius_moa,
            group_es_x_mm: record.group_es_x_mm,
            group_es_x_moa: record.group_es_x_moa,
            group_es_y_mm: record.group_es_y_mm,
            group_es_y_moa: record.group_es_y_moa,
            poi_x_mm: record.poi_x_mm,
            poi_x_moa: record.poi_x_moa,
            poi_y_mm: record.poi_y_mm,
            poi_y_moa: record.poi_y_moa,
        };

        let chrono = ChronoResults {
            avg_velocity_fps: record.avg_velocity_fps,
            sd_fps: record.sd_fps,
            es_fps: record.es_fps,
        };

        Self {
            date: record.date.clone(),
            distance_m: record.distance_m,
            notes: record.notes.clone(),
            platform: some_unless_default(platform),
            ammo: some_unless_default(ammo),
            environment: some_unless_default(environment),
            group: some_unless_default(group),
            chrono: some_unless_default(chrono),
        }
    }
}

fn some_unless_default<T: Default + PartialEq>(section: T) -> Option<T> {
    if section == T::default() {
        None
    } else {
        Some(section)
    }
}

/// Accept a YAML string, number, or boolean where a string is expected
///
/// Numbers render without a trailing `.0` so `wind_dir_deg: 270` reads back
/// as `"270"`.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(f64),
        Flag(bool),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => {
            if number.fract() == 0.0 {
                format!("{}", number as i64)
            } else {
                format!("{number}")
            }
        }
        Scalar::Flag(flag) => flag.to_string(),
    }))
}
