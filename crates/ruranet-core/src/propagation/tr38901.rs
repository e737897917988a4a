//! 3GPP TR 38.901 path loss for the FR1 and FR2 bands (0.5-100 GHz).
//!
//! Each scenario has a LOS formula and an NLOS formula. The NLOS result is
//! floored at the LOS value for the same geometry, so NLOS loss never drops
//! below LOS loss.
//!
//! ```
//! use ruranet_core::propagation::tr38901::{path_loss, SiteGeometry};
//! use ruranet_core::types::{LosCondition, Scenario};
//!
//! let geometry = SiteGeometry::default();
//! let pl = path_loss(3.5e9, 200.0, Scenario::UrbanMacro, LosCondition::Los, &geometry).unwrap();
//! assert!((pl - 89.51).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use super::{free_space_path_loss, large_city_mobile_correction, SPEED_OF_LIGHT};
use crate::error::{ensure_range, PropagationError, Result};
use crate::types::{LosCondition, Scenario};

pub const MODEL_NAME: &str = "3GPP TR 38.901";

/// Valid carrier band in Hz.
pub const FREQUENCY_RANGE_HZ: (f64, f64) = (0.5e9, 100e9);

/// Valid 2D distance in metres.
pub const DISTANCE_RANGE_M: (f64, f64) = (10.0, 10_000.0);

/// Station heights and clutter geometry around the link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteGeometry {
    /// Base-station antenna height in metres
    pub bs_height_m: f64,
    /// User-equipment antenna height in metres
    pub ut_height_m: f64,
    /// Mean building height in metres (RMa NLOS)
    pub building_height_m: f64,
    /// Mean street width in metres (RMa NLOS)
    pub street_width_m: f64,
}

impl Default for SiteGeometry {
    fn default() -> Self {
        Self {
            bs_height_m: 10.0,
            ut_height_m: 1.5,
            building_height_m: 20.0,
            street_width_m: 20.0,
        }
    }
}

impl SiteGeometry {
    fn validate(&self) -> Result<()> {
        let checks = [
            ("base-station height (m)", self.bs_height_m),
            ("UE height (m)", self.ut_height_m),
            ("building height (m)", self.building_height_m),
            ("street width (m)", self.street_width_m),
        ];
        for (name, value) in checks {
            if !(value > 0.0 && value.is_finite()) {
                return Err(PropagationError::range(
                    MODEL_NAME,
                    name,
                    value,
                    f64::MIN_POSITIVE,
                    f64::MAX,
                ));
            }
        }
        Ok(())
    }

    /// 3D distance for a 2D ground distance.
    fn distance_3d(&self, distance_2d_m: f64) -> f64 {
        let dh = self.bs_height_m - self.ut_height_m;
        (distance_2d_m * distance_2d_m + dh * dh).sqrt()
    }
}

/// TR 38.901 path loss in dB.
///
/// # Arguments
/// * `frequency_hz` - Carrier frequency in Hz (0.5-100 GHz).
/// * `distance_2d_m` - Ground distance between BS and UE in metres (10-10000 m).
/// * `scenario` - Deployment scenario.
/// * `los` - Line-of-sight condition.
/// * `geometry` - Antenna heights and clutter geometry.
pub fn path_loss(
    frequency_hz: f64,
    distance_2d_m: f64,
    scenario: Scenario,
    los: LosCondition,
    geometry: &SiteGeometry,
) -> Result<f64> {
    ensure_range(
        MODEL_NAME,
        "frequency (Hz)",
        frequency_hz,
        FREQUENCY_RANGE_HZ.0,
        FREQUENCY_RANGE_HZ.1,
    )?;
    ensure_range(
        MODEL_NAME,
        "distance (m)",
        distance_2d_m,
        DISTANCE_RANGE_M.0,
        DISTANCE_RANGE_M.1,
    )?;
    geometry.validate()?;

    let link = Link {
        frequency_hz,
        f_ghz: frequency_hz / 1e9,
        d_2d: distance_2d_m,
        d_3d: geometry.distance_3d(distance_2d_m),
        geometry,
    };

    let pl_los = match scenario {
        Scenario::UrbanMacro => link.uma_los(),
        Scenario::UrbanMicro => link.umi_los(),
        Scenario::RuralMacro => link.rma_los()?,
        Scenario::IndoorOffice | Scenario::IndoorShoppingMall => link.inh_los(),
    };

    if los == LosCondition::Los {
        return Ok(pl_los);
    }

    let pl_nlos = match scenario {
        Scenario::UrbanMacro => link.uma_nlos(),
        Scenario::UrbanMicro => link.umi_nlos(),
        Scenario::RuralMacro => link.rma_nlos(),
        Scenario::IndoorOffice => link.inh_office_nlos(),
        Scenario::IndoorShoppingMall => link.inh_mall_nlos(),
    };

    Ok(pl_los.max(pl_nlos))
}

/// Per-call link quantities shared by the scenario formulas.
struct Link<'a> {
    frequency_hz: f64,
    f_ghz: f64,
    d_2d: f64,
    d_3d: f64,
    geometry: &'a SiteGeometry,
}

impl Link<'_> {
    fn uma_los(&self) -> f64 {
        let g = self.geometry;
        let dbp = 4.0 * g.bs_height_m * g.ut_height_m * self.frequency_hz / SPEED_OF_LIGHT;

        if self.d_2d < dbp {
            28.0 + 22.0 * self.d_3d.log10() + 20.0 * self.f_ghz.log10()
        } else {
            let dh = g.bs_height_m - g.ut_height_m;
            28.0 + 40.0 * self.d_3d.log10() + 20.0 * self.f_ghz.log10()
                - 9.0 * (dbp * dbp + dh * dh).log10()
        }
    }

    fn uma_nlos(&self) -> f64 {
        13.54 + 39.08 * self.d_3d.log10() + 20.0 * self.f_ghz.log10()
            - 0.6 * (self.geometry.ut_height_m - 1.5)
    }

    fn umi_los(&self) -> f64 {
        32.4 + 21.0 * self.d_3d.log10() + 20.0 * self.f_ghz.log10()
    }

    fn umi_nlos(&self) -> f64 {
        35.3 * self.d_3d.log10() + 22.4 + 21.3 * self.f_ghz.log10()
            - 0.3 * (self.geometry.ut_height_m - 1.5)
    }

    fn rma_los(&self) -> Result<f64> {
        let g = self.geometry;
        let dbp = 2.0 * std::f64::consts::PI * g.bs_height_m * g.ut_height_m * self.frequency_hz
            / SPEED_OF_LIGHT;
        let d = self.d_2d;

        // Near-field regime is clamped to the 10 m reference distance.
        let pl = if d < 10.0 {
            free_space_path_loss(self.frequency_hz, 10.0)? + 21.0 * (d / 10.0).log10()
        } else if d <= dbp {
            free_space_path_loss(self.frequency_hz, d)? + 21.0 * (d / 10.0).log10()
        } else {
            free_space_path_loss(self.frequency_hz, dbp)?
                + 21.0 * (dbp / 10.0).log10()
                + 40.0 * (d / dbp).log10()
        };
        Ok(pl)
    }

    fn rma_nlos(&self) -> f64 {
        let g = self.geometry;
        let h = g.building_height_m;
        let w = g.street_width_m;
        let h_bs = g.bs_height_m;

        161.04 - 7.1 * w.log10() + 7.5 * h.log10()
            - (24.37 - 3.7 * (h / h_bs).powi(2)) * h_bs.log10()
            + (43.42 - 3.1 * h_bs.log10()) * (self.d_3d.log10() - 3.0)
            + 20.0 * self.f_ghz.log10()
            - large_city_mobile_correction(g.ut_height_m)
    }

    fn inh_los(&self) -> f64 {
        32.4 + 17.3 * self.d_3d.log10() + 20.0 * self.f_ghz.log10()
    }

    fn inh_office_nlos(&self) -> f64 {
        38.3 * self.d_3d.log10() + 17.3 + 24.9 * self.f_ghz.log10()
    }

    fn inh_mall_nlos(&self) -> f64 {
        42.7 * self.d_3d.log10() + 11.3 + 20.0 * self.f_ghz.log10()
    }
}
