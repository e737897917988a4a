//! COST-231 Hata extension for the 1500-2000 MHz PCS/DCS band.

use super::{
    area_adjusted, check_hata_ranges, large_city_mobile_correction, DEFAULT_MOBILE_HEIGHT_M,
};
use crate::error::Result;
use crate::radius::{self, SearchBracket};
use crate::types::AreaType;

pub const MODEL_NAME: &str = "COST-231";

/// Valid carrier band in MHz.
pub const FREQUENCY_RANGE_MHZ: (f64, f64) = (1500.0, 2000.0);

/// Metropolitan centre correction added to the urban baseline (dB).
const METROPOLITAN_CORRECTION_DB: f64 = 3.0;

/// COST-231 path loss in dB.
///
/// Same argument list and ranges as [`super::okumura_hata::path_loss`], but
/// valid from 1500 to 2000 MHz.
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

    let a_hm = large_city_mobile_correction(mobile_height_m);
    let log_hb = antenna_height_m.log10();
    let l_urban = 46.3 + 33.9 * frequency_mhz.log10() - 13.82 * log_hb - a_hm
        + (44.9 - 6.55 * log_hb) * distance_km.log10()
        + METROPOLITAN_CORRECTION_DB;

    Ok(area_adjusted(l_urban, frequency_mhz, area))
}

/// Maximum distance (km) meeting `receiver_sensitivity_dbm`, searched over 1-20 km.
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
