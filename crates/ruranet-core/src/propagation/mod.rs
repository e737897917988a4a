//! RF path-loss models for cellular coverage planning.
//!
//! Each submodule is a set of pure functions implementing one model's
//! path-loss equation. All logarithms are base 10 and every function is
//! deterministic: no hidden state, no randomness.
//!
//! | Model | Band | Distance | Module |
//! |-------|------|----------|--------|
//! | Okumura-Hata | 150-1500 MHz | 1-20 km | [`okumura_hata`] |
//! | COST-231 Hata | 1500-2000 MHz | 1-20 km | [`cost231`] |
//! | 3GPP TR 38.901 | 0.5-100 GHz | 10-10000 m | [`tr38901`] |
//! | mmWave | 24-100 GHz | > 0 m | [`mmwave`] |
//!
//! # Example
//!
//! ```
//! use ruranet_core::propagation::{free_space_path_loss, okumura_hata};
//! use ruranet_core::types::AreaType;
//!
//! // Free-space path loss at 1 km, 900 MHz
//! let fspl = free_space_path_loss(900e6, 1000.0).unwrap();
//! assert!((fspl - 91.53).abs() < 0.1);
//!
//! // Okumura-Hata, large city, 5 km
//! let pl = okumura_hata::path_loss(900.0, 50.0, 1.5, 5.0, AreaType::Urban).unwrap();
//! assert!((pl - 146.96).abs() < 0.01);
//! ```

pub mod cost231;
pub mod mmwave;
pub mod okumura_hata;
pub mod tr38901;

use std::f64::consts::PI;

use crate::error::{PropagationError, Result};
use crate::types::AreaType;

/// Speed of light used by the 5G formulas (m/s).
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Default mobile antenna height for the terrestrial models (m).
pub const DEFAULT_MOBILE_HEIGHT_M: f64 = 1.5;

/// Free-space path loss (Friis equation).
///
/// FSPL = 20 * log10(4 * pi * d / lambda)
///
/// # Arguments
/// * `frequency_hz` - Carrier frequency in Hz (must be > 0).
/// * `distance_m` - Distance in metres (must be > 0).
pub fn free_space_path_loss(frequency_hz: f64, distance_m: f64) -> Result<f64> {
    if !(frequency_hz > 0.0) {
        return Err(PropagationError::range(
            "FSPL",
            "frequency (Hz)",
            frequency_hz,
            f64::MIN_POSITIVE,
            f64::INFINITY,
        ));
    }
    if !(distance_m > 0.0) {
        return Err(PropagationError::range(
            "FSPL",
            "distance (m)",
            distance_m,
            f64::MIN_POSITIVE,
            f64::INFINITY,
        ));
    }

    let wavelength = SPEED_OF_LIGHT / frequency_hz;
    Ok(20.0 * (4.0 * PI * distance_m / wavelength).log10())
}

// ---------------------------------------------------------------------------
// Hata-family helpers
// ---------------------------------------------------------------------------

/// Large-city mobile antenna height correction a(hm), f >= 300 MHz.
pub(crate) fn large_city_mobile_correction(mobile_height_m: f64) -> f64 {
    3.2 * (11.75 * mobile_height_m).log10().powi(2) - 4.97
}

/// Small/medium-city mobile antenna height correction a(hm), f < 300 MHz.
pub(crate) fn small_city_mobile_correction(mobile_height_m: f64) -> f64 {
    8.29 * (1.54 * mobile_height_m).log10().powi(2) - 1.1
}

/// Applies the area-type adjustment to an urban baseline loss.
pub(crate) fn area_adjusted(l_urban: f64, frequency_mhz: f64, area: AreaType) -> f64 {
    let log_f = frequency_mhz.log10();
    let open_area_term = 4.78 * log_f.powi(2) - 18.33 * log_f + 40.94;

    match area {
        AreaType::Urban => l_urban,
        AreaType::Suburban => l_urban - 2.0 * (frequency_mhz / 28.0).log10().powi(2) - 5.4,
        AreaType::Rural => l_urban - open_area_term,
        AreaType::Open => l_urban - open_area_term - 10.0,
    }
}

/// Shared operating-range check for the Hata family.
pub(crate) fn check_hata_ranges(
    model: &'static str,
    frequency_mhz: (f64, f64, f64),
    antenna_height_m: f64,
    mobile_height_m: f64,
    distance_km: f64,
) -> Result<()> {
    use crate::error::ensure_range;

    let (f, f_min, f_max) = frequency_mhz;
    ensure_range(model, "frequency (MHz)", f, f_min, f_max)?;
    ensure_range(model, "antenna height (m)", antenna_height_m, 30.0, 200.0)?;
    ensure_range(model, "mobile height (m)", mobile_height_m, 1.0, 10.0)?;
    ensure_range(model, "distance (km)", distance_km, 1.0, 20.0)
}
