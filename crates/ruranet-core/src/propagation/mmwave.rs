//! Millimetre-wave (FR2) propagation, 24-100 GHz.
//!
//! Free-space loss plus a flat NLOS penalty and a linear material
//! attenuation term. No terrain classes.

use super::free_space_path_loss;
use crate::error::{ensure_range, Result};
use crate::types::LosCondition;

pub const MODEL_NAME: &str = "mmWave";

/// Valid carrier band in Hz.
pub const FREQUENCY_RANGE_HZ: (f64, f64) = (24e9, 100e9);

/// Extra loss applied without line of sight (dB).
pub const NLOS_PENALTY_DB: f64 = 20.0;

/// mmWave path loss in dB.
///
/// # Arguments
/// * `frequency_hz` - Carrier frequency in Hz (24-100 GHz).
/// * `distance_m` - Distance in metres (> 0).
/// * `los` - Line-of-sight condition.
/// * `material_attenuation_db_per_m` - Obstruction loss per metre of path.
pub fn path_loss(
    frequency_hz: f64,
    distance_m: f64,
    los: LosCondition,
    material_attenuation_db_per_m: f64,
) -> Result<f64> {
    ensure_range(
        MODEL_NAME,
        "frequency (Hz)",
        frequency_hz,
        FREQUENCY_RANGE_HZ.0,
        FREQUENCY_RANGE_HZ.1,
    )?;

    let fspl = free_space_path_loss(frequency_hz, distance_m)?;
    let penalty = match los {
        LosCondition::Los => 0.0,
        LosCondition::Nlos => NLOS_PENALTY_DB,
    };

    Ok(fspl + penalty + material_attenuation_db_per_m * distance_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_los_without_material_is_free_space() {
        let pl = path_loss(28e9, 100.0, LosCondition::Los, 0.0).unwrap();
        let fspl = free_space_path_loss(28e9, 100.0).unwrap();
        assert_eq!(pl, fspl);
        assert!((pl - 101.3849).abs() < 0.001, "PL={:.4}", pl);
    }

    #[test]
    fn test_nlos_penalty_and_material() {
        let los = path_loss(39e9, 50.0, LosCondition::Los, 0.0).unwrap();
        let nlos = path_loss(39e9, 50.0, LosCondition::Nlos, 0.0).unwrap();
        assert_relative_eq!(nlos - los, NLOS_PENALTY_DB, epsilon = 1e-9);

        let lossy = path_loss(39e9, 50.0, LosCondition::Los, 0.2).unwrap();
        assert_relative_eq!(lossy - los, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_band_limits() {
        let err = path_loss(3.5e9, 100.0, LosCondition::Los, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterRange);
        assert!(path_loss(24e9, 100.0, LosCondition::Los, 0.0).is_ok());
        assert!(path_loss(100e9, 100.0, LosCondition::Los, 0.0).is_ok());
        assert!(path_loss(101e9, 100.0, LosCondition::Los, 0.0).is_err());
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut previous = f64::NEG_INFINITY;
        for step in 1..=500 {
            let d = step as f64 * 2.0;
            let pl = path_loss(60e9, d, LosCondition::Nlos, 0.05).unwrap();
            assert!(pl >= previous);
            previous = pl;
        }
    }
}
