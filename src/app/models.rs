//! Data models for load-development test records
//!
//! This module contains the flat record type that one test directory reduces
//! to, plus the typed field selectors the filter engine and range deriver use
//! instead of stringly-keyed column lookups.

// =============================================================================
// Test Record Structure
// =============================================================================

/// One row of the corpus table: everything known about a single test
///
/// Every field except `test_id` is optional. A `None` means the value was
/// absent in both the legacy directory name and the structured record file;
/// it is never conflated with a numeric zero, and downstream filters exclude
/// rows with missing values rather than treating them as in-range.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    /// Canonical identity: the test directory name, unique within a corpus
    pub test_id: String,

    // Test info
    /// Test date as ISO `yyyy-MM-dd`; lexicographic order equals chronological
    pub date: Option<String>,
    /// Target distance in metres
    pub distance_m: Option<u32>,
    pub notes: Option<String>,

    // Platform
    pub calibre: Option<String>,
    pub rifle: Option<String>,
    pub barrel_length_in: Option<f64>,
    pub twist_rate: Option<String>,

    // Ammunition
    pub bullet_brand: Option<String>,
    pub bullet_model: Option<String>,
    pub bullet_weight_gr: Option<f64>,
    pub bullet_lot: Option<String>,
    pub powder_brand: Option<String>,
    pub powder_model: Option<String>,
    pub powder_charge_gr: Option<f64>,
    pub powder_lot: Option<String>,
    pub case_brand: Option<String>,
    pub case_lot: Option<String>,
    pub neck_turned: Option<String>,
    pub brass_sizing: Option<String>,
    pub bushing_size: Option<f64>,
    pub shoulder_bump: Option<f64>,
    pub primer_brand: Option<String>,
    pub primer_model: Option<String>,
    pub primer_lot: Option<String>,
    /// Cartridge overall length in inches
    pub coal_in: Option<f64>,
    /// Base-to-ogive length in inches
    pub b2o_in: Option<f64>,

    // Environment
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    pub wind_direction: Option<String>,
    pub light_conditions: Option<String>,

    // Target results
    pub shots: Option<u32>,
    pub group_es_mm: Option<f64>,
    pub group_es_moa: Option<f64>,
    pub mean_radius_mm: Option<f64>,
    pub mean_radius_moa: Option<f64>,
    pub group_es_x_mm: Option<f64>,
    pub group_es_x_moa: Option<f64>,
    pub group_es_y_mm: Option<f64>,
    pub group_es_y_moa: Option<f64>,
    pub poi_x_mm: Option<f64>,
    pub poi_x_moa: Option<f64>,
    pub poi_y_mm: Option<f64>,
    pub poi_y_moa: Option<f64>,

    // Velocity results
    pub avg_velocity_fps: Option<f64>,
    pub sd_fps: Option<f64>,
    pub es_fps: Option<f64>,

    /// Transient selection flag used by the filter engine; never persisted
    pub selected: bool,
}

impl TestRecord {
    /// Create a record carrying only its identity, everything else missing
    ///
    /// This is the degraded fallback shape: a directory whose name fails to
    /// parse and whose record file contributes nothing still occupies a row.
    pub fn empty(test_id: impl Into<String>) -> Self {
        Self {
            test_id: test_id.into(),
            date: None,
            distance_m: None,
            notes: None,
            calibre: None,
            rifle: None,
            barrel_length_in: None,
            twist_rate: None,
            bullet_brand: None,
            bullet_model: None,
            bullet_weight_gr: None,
            bullet_lot: None,
            powder_brand: None,
            powder_model: None,
            powder_charge_gr: None,
            powder_lot: None,
            case_brand: None,
            case_lot: None,
            neck_turned: None,
            brass_sizing: None,
            bushing_size: None,
            shoulder_bump: None,
            primer_brand: None,
            primer_model: None,
            primer_lot: None,
            coal_in: None,
            b2o_in: None,
            temperature_c: None,
            humidity_pct: None,
            pressure_hpa: None,
            wind_speed_ms: None,
            wind_direction: None,
            light_conditions: None,
            shots: None,
            group_es_mm: None,
            group_es_moa: None,
            mean_radius_mm: None,
            mean_radius_moa: None,
            group_es_x_mm: None,
            group_es_x_moa: None,
            group_es_y_mm: None,
            group_es_y_moa: None,
            poi_x_mm: None,
            poi_x_moa: None,
            poi_y_mm: None,
            poi_y_moa: None,
            avg_velocity_fps: None,
            sd_fps: None,
            es_fps: None,
            selected: true,
        }
    }

    /// Read a numeric field by selector
    ///
    /// Integer-backed fields (distance, shot count) are widened to `f64` so
    /// the filter engine and range deriver can treat all numeric columns
    /// uniformly.
    pub fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::DistanceM => self.distance_m.map(f64::from),
            NumericField::BarrelLengthIn => self.barrel_length_in,
            NumericField::BulletWeightGr => self.bullet_weight_gr,
            NumericField::PowderChargeGr => self.powder_charge_gr,
            NumericField::BushingSize => self.bushing_size,
            NumericField::ShoulderBump => self.shoulder_bump,
            NumericField::CoalIn => self.coal_in,
            NumericField::B2oIn => self.b2o_in,
            NumericField::TemperatureC => self.temperature_c,
            NumericField::HumidityPct => self.humidity_pct,
            NumericField::PressureHpa => self.pressure_hpa,
            NumericField::WindSpeedMs => self.wind_speed_ms,
            NumericField::Shots => self.shots.map(f64::from),
            NumericField::GroupEsMm => self.group_es_mm,
            NumericField::GroupEsMoa => self.group_es_moa,
            NumericField::MeanRadiusMm => self.mean_radius_mm,
            NumericField::MeanRadiusMoa => self.mean_radius_moa,
            NumericField::GroupEsXMm => self.group_es_x_mm,
            NumericField::GroupEsYMm => self.group_es_y_mm,
            NumericField::PoiXMm => self.poi_x_mm,
            NumericField::PoiYMm => self.poi_y_mm,
            NumericField::AvgVelocityFps => self.avg_velocity_fps,
            NumericField::SdFps => self.sd_fps,
            NumericField::EsFps => self.es_fps,
        }
    }

    /// Read a text field by selector
    pub fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Calibre => self.calibre.as_deref(),
            TextField::Rifle => self.rifle.as_deref(),
            TextField::TwistRate => self.twist_rate.as_deref(),
            TextField::BulletBrand => self.bullet_brand.as_deref(),
            TextField::BulletModel => self.bullet_model.as_deref(),
            TextField::PowderBrand => self.powder_brand.as_deref(),
            TextField::PowderModel => self.powder_model.as_deref(),
            TextField::CaseBrand => self.case_brand.as_deref(),
            TextField::PrimerBrand => self.primer_brand.as_deref(),
            TextField::PrimerModel => self.primer_model.as_deref(),
            TextField::WindDirection => self.wind_direction.as_deref(),
            TextField::LightConditions => self.light_conditions.as_deref(),
        }
    }
}

// =============================================================================
// Field Selectors
// =============================================================================

/// Numeric columns a range predicate or bounds derivation can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    DistanceM,
    BarrelLengthIn,
    BulletWeightGr,
    PowderChargeGr,
    BushingSize,
    ShoulderBump,
    CoalIn,
    B2oIn,
    TemperatureC,
    HumidityPct,
    PressureHpa,
    WindSpeedMs,
    Shots,
    GroupEsMm,
    GroupEsMoa,
    MeanRadiusMm,
    MeanRadiusMoa,
    GroupEsXMm,
    GroupEsYMm,
    PoiXMm,
    PoiYMm,
    AvgVelocityFps,
    SdFps,
    EsFps,
}

/// Text columns an equality or set-membership predicate can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Calibre,
    Rifle,
    TwistRate,
    BulletBrand,
    BulletModel,
    PowderBrand,
    PowderModel,
    CaseBrand,
    PrimerBrand,
    PrimerModel,
    WindDirection,
    LightConditions,
}
