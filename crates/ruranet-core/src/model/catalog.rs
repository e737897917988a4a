//! Static description of the available propagation models.
//!
//! Front ends use this to build their parameter forms: which scenarios a
//! model knows, which fields it needs and what the optional fields default to.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::propagation::{cost231, mmwave, okumura_hata, tr38901};
use crate::types::{PropagationModelId, Scenario, Technology};

pub const TR38901_ID: &str = "3GPP_TR_38901";
pub const MMWAVE_ID: &str = "mmWave";

/// Material attenuation used when a mmWave request leaves it out (dB/m).
pub const DEFAULT_MATERIAL_ATTENUATION: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub id: PropagationModelId,
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: Vec<Technology>,
    /// Frequency band in MHz
    pub frequency_range_mhz: (f64, f64),
    /// Scenario or condition choices shown to the user
    pub scenarios: Vec<&'static str>,
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
    /// Optional fields that become required for a given scenario
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub required_for: BTreeMap<&'static str, Vec<&'static str>>,
    /// Values used for optional fields that are left out
    pub defaults: Vec<(&'static str, f64)>,
}

/// All implemented models, in catalog order.
pub fn available_models() -> Vec<ModelDescriptor> {
    PropagationModelId::ALL.iter().map(|&id| describe(id)).collect()
}

/// Descriptor for one model identifier, as received on the wire.
pub fn model_parameters(id: &str) -> Result<ModelDescriptor> {
    let id: PropagationModelId = id.parse()?;
    Ok(describe(id))
}

fn describe(id: PropagationModelId) -> ModelDescriptor {
    let legacy = vec![Technology::Gsm, Technology::Umts, Technology::Lte];
    let terrains = vec!["URBAN", "SUBURBAN", "RURAL", "OPEN"];

    match id {
        PropagationModelId::OkumuraHata => ModelDescriptor {
            id,
            name: okumura_hata::MODEL_NAME,
            description: "Empirical macro-cell model for 150-1500 MHz",
            technologies: legacy,
            frequency_range_mhz: okumura_hata::FREQUENCY_RANGE_MHZ,
            scenarios: terrains,
            required: vec!["frequency", "antenna_height", "terrain_type"],
            optional: vec!["mobile_height"],
            required_for: BTreeMap::new(),
            defaults: vec![("mobile_height", 1.5)],
        },
        PropagationModelId::Cost231 => ModelDescriptor {
            id,
            name: cost231::MODEL_NAME,
            description: "Hata extension for the 1500-2000 MHz band",
            technologies: legacy,
            frequency_range_mhz: cost231::FREQUENCY_RANGE_MHZ,
            scenarios: terrains,
            required: vec!["frequency", "antenna_height", "terrain_type"],
            optional: vec!["mobile_height"],
            required_for: BTreeMap::new(),
            defaults: vec![("mobile_height", 1.5)],
        },
        PropagationModelId::Tr38901 => ModelDescriptor {
            id,
            name: tr38901::MODEL_NAME,
            description: "3GPP TR 38.901 model for the FR1 and FR2 bands",
            technologies: vec![Technology::Nr],
            frequency_range_mhz: hz_to_mhz(tr38901::FREQUENCY_RANGE_HZ),
            scenarios: Scenario::ALL.iter().map(|s| s.as_str()).collect(),
            required: vec!["scenario", "los_condition", "h_bs", "h_ut"],
            optional: vec!["h", "w"],
            required_for: Scenario::ALL
                .iter()
                .filter(|s| s.needs_clutter_geometry())
                .map(|s| (s.as_str(), vec!["h", "w"]))
                .collect(),
            defaults: vec![("h", 20.0), ("w", 20.0)],
        },
        PropagationModelId::MmWave => ModelDescriptor {
            id,
            name: mmwave::MODEL_NAME,
            description: "Millimetre-wave model for 24-100 GHz",
            technologies: vec![Technology::Nr],
            frequency_range_mhz: hz_to_mhz(mmwave::FREQUENCY_RANGE_HZ),
            scenarios: vec!["LOS", "NLOS"],
            required: vec!["los_condition"],
            optional: vec!["material_attenuation"],
            required_for: BTreeMap::new(),
            defaults: vec![("material_attenuation", DEFAULT_MATERIAL_ATTENUATION)],
        },
    }
}

fn hz_to_mhz((min, max): (f64, f64)) -> (f64, f64) {
    (min / 1e6, max / 1e6)
}
