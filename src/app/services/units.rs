//! Linear-to-angular unit conversion
//!
//! Group and dispersion measurements are stored in millimetres on target;
//! normalizing them to minutes of angle makes results comparable across
//! test distances.

use crate::constants::MOA_FACTOR;

/// Convert a linear spread in millimetres to minutes of angle at a distance
///
/// Returns `None` when either input is missing or the distance is zero, so
/// callers can feed raw optional fields straight through without guarding.
///
/// This is a fill-in conversion only: a stored MOA value always wins over a
/// recomputation, and the reverse derivation (mm from MOA) is never done.
pub fn mm_to_moa(mm: Option<f64>, distance_m: Option<u32>) -> Option<f64> {
    let mm = mm?;
    let distance_m = distance_m?;
    if distance_m == 0 {
        return None;
    }
    Some((mm * MOA_FACTOR) / (f64::from(distance_m) * 1000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_conversion() {
        // 100 mm at 300 m is roughly 1.15 MOA
        let moa = mm_to_moa(Some(100.0), Some(300)).unwrap();
        assert!((moa - 1.146).abs() < 0.001);
    }

    #[test]
    fn test_missing_inputs_yield_missing() {
        assert_eq!(mm_to_moa(None, Some(300)), None);
        assert_eq!(mm_to_moa(Some(100.0), None), None);
        assert_eq!(mm_to_moa(None, None), None);
    }

    #[test]
    fn test_zero_distance_yields_missing() {
        assert_eq!(mm_to_moa(Some(100.0), Some(0)), None);
    }

    #[test]
    fn test_scales_linearly_with_spread() {
        let one = mm_to_moa(Some(10.0), Some(100)).unwrap();
        let two = mm_to_moa(Some(20.0), Some(100)).unwrap();
        assert!((two - 2.0 * one).abs() < 1e-12);
    }
}
