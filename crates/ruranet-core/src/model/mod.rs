//! Model selection: binds a transmitter's parameters to one path-loss function.
//!
//! [`ModelSelector::bind`] does all configuration checks up front, so a sweep
//! never discovers a missing field halfway through. The bound
//! [`PathLossModel`] is a plain `Copy` value; each call to
//! [`PathLossModel::path_loss`] only checks the per-point operating range.

pub mod catalog;

use serde::Serialize;

use crate::error::{PropagationError, Result};
use crate::propagation::tr38901::SiteGeometry;
use crate::propagation::{cost231, mmwave, okumura_hata, tr38901, DEFAULT_MOBILE_HEIGHT_M};
use crate::radius::{self, SearchBracket};
use crate::transmitter::TransmitterConfig;
use crate::types::{AreaType, LosCondition, PropagationModelId, Scenario, Technology};

/// A propagation model with every parameter except distance fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PathLossModel {
    OkumuraHata {
        frequency_mhz: f64,
        antenna_height_m: f64,
        mobile_height_m: f64,
        area: AreaType,
    },
    Cost231 {
        frequency_mhz: f64,
        antenna_height_m: f64,
        mobile_height_m: f64,
        area: AreaType,
    },
    Tr38901 {
        frequency_hz: f64,
        scenario: Scenario,
        los: LosCondition,
        geometry: SiteGeometry,
    },
    MmWave {
        frequency_hz: f64,
        los: LosCondition,
        material_attenuation_db_per_m: f64,
    },
}

impl PathLossModel {
    pub fn id(&self) -> PropagationModelId {
        match self {
            PathLossModel::OkumuraHata { .. } => PropagationModelId::OkumuraHata,
            PathLossModel::Cost231 { .. } => PropagationModelId::Cost231,
            PathLossModel::Tr38901 { .. } => PropagationModelId::Tr38901,
            PathLossModel::MmWave { .. } => PropagationModelId::MmWave,
        }
    }

    /// Path loss in dB at `distance_km` from the transmitter.
    pub fn path_loss(&self, distance_km: f64) -> Result<f64> {
        match *self {
            PathLossModel::OkumuraHata {
                frequency_mhz,
                antenna_height_m,
                mobile_height_m,
                area,
            } => okumura_hata::path_loss(
                frequency_mhz,
                antenna_height_m,
                mobile_height_m,
                distance_km,
                area,
            ),
            PathLossModel::Cost231 {
                frequency_mhz,
                antenna_height_m,
                mobile_height_m,
                area,
            } => cost231::path_loss(
                frequency_mhz,
                antenna_height_m,
                mobile_height_m,
                distance_km,
                area,
            ),
            PathLossModel::Tr38901 {
                frequency_hz,
                scenario,
                los,
                ref geometry,
            } => tr38901::path_loss(frequency_hz, distance_km * 1000.0, scenario, los, geometry),
            PathLossModel::MmWave {
                frequency_hz,
                los,
                material_attenuation_db_per_m,
            } => mmwave::path_loss(
                frequency_hz,
                distance_km * 1000.0,
                los,
                material_attenuation_db_per_m,
            ),
        }
    }

    /// The bound model as a closure over distance in km.
    pub fn as_fn(&self) -> impl Fn(f64) -> Result<f64> + Copy + Send + Sync {
        let model = *self;
        move |distance_km| model.path_loss(distance_km)
    }

    /// Distance bracket for the radius solver.
    pub fn radius_bounds(&self) -> SearchBracket {
        match self {
            PathLossModel::OkumuraHata { .. } | PathLossModel::Cost231 { .. } => {
                SearchBracket::default()
            }
            PathLossModel::Tr38901 { .. } => SearchBracket::new(0.01, 10.0),
            PathLossModel::MmWave { .. } => SearchBracket::new(0.001, 10.0),
        }
    }

    /// Maximum distance in km at which the signal still meets `sensitivity_dbm`.
    pub fn coverage_radius(&self, tx_power_dbm: f64, sensitivity_dbm: f64) -> Result<Option<f64>> {
        radius::solve(
            self.as_fn(),
            tx_power_dbm,
            sensitivity_dbm,
            self.radius_bounds(),
        )
    }

    /// Whether the carrier lies inside the model's valid band.
    pub fn frequency_in_band(&self) -> bool {
        let (value, (min, max)) = match *self {
            PathLossModel::OkumuraHata { frequency_mhz, .. } => {
                (frequency_mhz, okumura_hata::FREQUENCY_RANGE_MHZ)
            }
            PathLossModel::Cost231 { frequency_mhz, .. } => {
                (frequency_mhz, cost231::FREQUENCY_RANGE_MHZ)
            }
            PathLossModel::Tr38901 { frequency_hz, .. } => {
                (frequency_hz, tr38901::FREQUENCY_RANGE_HZ)
            }
            PathLossModel::MmWave { frequency_hz, .. } => {
                (frequency_hz, mmwave::FREQUENCY_RANGE_HZ)
            }
        };
        (min..=max).contains(&value)
    }
}

/// Builds a [`PathLossModel`] from transmitter parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelSelector;

impl ModelSelector {
    /// Binds the transmitter's model, checking required fields first.
    ///
    /// A carrier outside the model's band is only logged: binding succeeds
    /// and every point of a later sweep will be skipped.
    pub fn bind(tx: &TransmitterConfig) -> Result<PathLossModel> {
        let model = match tx.propagation_model {
            PropagationModelId::OkumuraHata => PathLossModel::OkumuraHata {
                frequency_mhz: tx.frequency,
                antenna_height_m: tx.antenna_height,
                mobile_height_m: tx.mobile_height.unwrap_or(DEFAULT_MOBILE_HEIGHT_M),
                area: tx.terrain_type,
            },
            PropagationModelId::Cost231 => PathLossModel::Cost231 {
                frequency_mhz: tx.frequency,
                antenna_height_m: tx.antenna_height,
                mobile_height_m: tx.mobile_height.unwrap_or(DEFAULT_MOBILE_HEIGHT_M),
                area: tx.terrain_type,
            },
            PropagationModelId::Tr38901 => bind_tr38901(tx)?,
            PropagationModelId::MmWave => PathLossModel::MmWave {
                frequency_hz: tx.frequency_hz(),
                los: required(tx.los_condition, catalog::MMWAVE_ID, "los_condition")?,
                material_attenuation_db_per_m: tx
                    .material_attenuation
                    .unwrap_or(catalog::DEFAULT_MATERIAL_ATTENUATION),
            },
        };

        if !model.frequency_in_band() {
            tracing::warn!(
                model = %model.id(),
                frequency_mhz = tx.frequency,
                "carrier frequency outside model band; every grid point will be skipped"
            );
        }
        tracing::debug!(model = %model.id(), "propagation model bound");

        Ok(model)
    }
}

fn required<T>(value: Option<T>, model: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(PropagationError::MissingRequiredField { model, field })
}

fn bind_tr38901(tx: &TransmitterConfig) -> Result<PathLossModel> {
    let model = catalog::TR38901_ID;
    let defaults = SiteGeometry::default();

    // Only 5G deployments carry the scenario fields; older generations
    // fall back to an urban macro LOS link.
    if tx.technology != Technology::Nr {
        return Ok(PathLossModel::Tr38901 {
            frequency_hz: tx.frequency_hz(),
            scenario: tx.scenario.unwrap_or(Scenario::UrbanMacro),
            los: tx.los_condition.unwrap_or(LosCondition::Los),
            geometry: SiteGeometry {
                bs_height_m: tx.h_bs.unwrap_or(defaults.bs_height_m),
                ut_height_m: tx.h_ut.unwrap_or(defaults.ut_height_m),
                building_height_m: tx.h.unwrap_or(defaults.building_height_m),
                street_width_m: tx.w.unwrap_or(defaults.street_width_m),
            },
        });
    }

    let scenario = required(tx.scenario, model, "scenario")?;
    let los = required(tx.los_condition, model, "los_condition")?;
    let bs_height_m = required(tx.h_bs, model, "h_bs")?;
    let ut_height_m = required(tx.h_ut, model, "h_ut")?;

    let (building_height_m, street_width_m) = if scenario.needs_clutter_geometry() {
        (required(tx.h, model, "h")?, required(tx.w, model, "w")?)
    } else {
        (
            tx.h.unwrap_or(defaults.building_height_m),
            tx.w.unwrap_or(defaults.street_width_m),
        )
    };

    Ok(PathLossModel::Tr38901 {
        frequency_hz: tx.frequency_hz(),
        scenario,
        los,
        geometry: SiteGeometry {
            bs_height_m,
            ut_height_m,
            building_height_m,
            street_width_m,
        },
    })
}
