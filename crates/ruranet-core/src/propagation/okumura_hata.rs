//! Okumura-Hata macro-cell model (150-1500 MHz).

use super::{
    area_adjusted, check_hata_ranges, large_city_mobile_correction, small_city_mobile_correction,
    DEFAULT_MOBILE_HEIGHT_M,
};
use crate::error::Result;
use crate::radius::{self, SearchBracket};
use crate::types::AreaType;

pub const MODEL_NAME: &str = "Okumura-Hata";

/// Valid carrier band in MHz.
pub const FREQUENCY_RANGE_MHZ: (f64, f64) = (150.0, 1500.0);

/// Okumura-Hata path loss in dB.
///
/// Valid ranges: frequency 150-1500 MHz, base-station height 30-200 m,
/// mobile height 1-10 m, distance 1-20 km.
///
/// # Arguments
/// * `frequency_mhz` - Carrier frequency in MHz.
/// * `antenna_height_m` - Base-station antenna height in metres.
/// * `mobile_height_m` - Mobile antenna height in metres.
/// * `distance_km` - Distance in kilometres.
/// * `area` - Terrain class.
pub fn path_loss(
    frequency_mhz: f64,
    antenna_height_m: f64,
    mobile_height_m: f64,
    distance_km: f64,
    area: AreaType,
) -> Result<f64> {
    check_hata_ranges(
        MODEL_NAME,
        (frequency_mhz, FREQUENCY_RANGE_MHZ.0, FREQUENCY_RANGE_MHZ.1),
        antenna_height_m,
        mobile_height_m,
        distance_km,
    )?;

    let a_hm = if frequency_mhz < 300.0 {
        small_city_mobile_correction(mobile_height_m)
    } else {
        large_city_mobile_correction(mobile_height_m)
    };

    let log_hb = antenna_height_m.log10();
    let l_urban = 69.55 + 26.16 * frequency_mhz.log10() - 13.82 * log_hb - a_hm
        + (44.9 - 6.55 * log_hb) * distance_km.log10();

    Ok(area_adjusted(l_urban, frequency_mhz, area))
}

/// Maximum distance (km) at which the received signal stays at or above
/// `receiver_sensitivity_dbm`, searched over 1-20 km.
///
/// Returns `None` if the link budget already fails at 1 km.
pub fn coverage_radius(
    frequency_mhz: f64,
    antenna_height_m: f64,
    antenna_power_dbm: f64,
    receiver_sensitivity_dbm: f64,
    area: AreaType,
    mobile_height_m: Option<f64>,
) -> Result<Option<f64>> {
    let mobile_height_m = mobile_height_m.unwrap_or(DEFAULT_MOBILE_HEIGHT_M);
    radius::solve(
        |d| path_loss(frequency_mhz, antenna_height_m, mobile_height_m, d, area),
        antenna_power_dbm,
        receiver_sensitivity_dbm,
        SearchBracket::default(),
    )
}
