//! Scenario files: a named set of transmitter sites evaluated together.
//!
//! ```yaml
//! name: casablanca-downtown
//! receiver_sensitivity_dbm: -100.0
//! sites:
//!   - name: anfa
//!     transmitter:
//!       technology: "4G"
//!       propagation_model: OKUMURA_HATA
//!       frequency: 900
//!       antenna_height: 50
//!       antenna_power: 43
//!       terrain_type: URBAN
//!       longitude: -7.6
//!       latitude: 33.57
//!       radius: 5
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use ruranet_core::types::{
    AreaType, GeoPoint, LosCondition, PropagationModelId, Scenario, Technology,
};
use ruranet_core::TransmitterConfig;

use crate::error::{Result, SimError};

/// Receiver sensitivity used when a scenario does not set one (dBm)
pub const DEFAULT_SENSITIVITY_DBM: f64 = -100.0;

fn default_sensitivity() -> f64 {
    DEFAULT_SENSITIVITY_DBM
}

/// A named transmitter site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub transmitter: TransmitterConfig,
}

/// Batch of sites sharing a receiver sensitivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    /// Scenario name
    pub name: String,
    /// Sensitivity for the coverage radius of every site (dBm)
    #[serde(default = "default_sensitivity")]
    pub receiver_sensitivity_dbm: f64,
    /// Coverage profile from the configuration file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    pub sites: Vec<Site>,
}

impl ScenarioFile {
    /// Read and validate a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
        let scenario = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            name = %scenario.name,
            sites = scenario.sites.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Parse and validate a scenario from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self> {
        let scenario: Self =
            serde_yaml::from_str(yaml).map_err(|e| SimError::Scenario(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Structural checks only; transmitter parameters are checked per site
    /// when the scenario runs.
    pub fn validate(&self) -> Result<()> {
        if self.sites.is_empty() {
            return Err(SimError::Scenario(format!(
                "scenario '{}' has no sites",
                self.name
            )));
        }
        if !self.receiver_sensitivity_dbm.is_finite() {
            return Err(SimError::Scenario(
                "receiver_sensitivity_dbm must be finite".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for site in &self.sites {
            if !seen.insert(site.name.as_str()) {
                return Err(SimError::Scenario(format!(
                    "duplicate site name '{}'",
                    site.name
                )));
            }
        }
        Ok(())
    }

    /// A scenario with one site per propagation model.
    pub fn example() -> Self {
        let center = GeoPoint::new(-7.6, 33.57);
        let sites = vec![
            Site {
                name: "macro-hata".to_string(),
                transmitter: TransmitterConfig::new(
                    Technology::Gsm,
                    PropagationModelId::OkumuraHata,
                    900.0,
                    50.0,
                    43.0,
                    AreaType::Urban,
                    center,
                    5.0,
                )
                .with_population_density(800.0),
            },
            Site {
                name: "macro-cost231".to_string(),
                transmitter: TransmitterConfig::new(
                    Technology::Lte,
                    PropagationModelId::Cost231,
                    1800.0,
                    40.0,
                    43.0,
                    AreaType::Suburban,
                    GeoPoint::new(-7.55, 33.59),
                    5.0,
                ),
            },
            Site {
                name: "uma-3500".to_string(),
                transmitter: TransmitterConfig::new(
                    Technology::Nr,
                    PropagationModelId::Tr38901,
                    3500.0,
                    25.0,
                    46.0,
                    AreaType::Urban,
                    GeoPoint::new(-7.62, 33.58),
                    2.0,
                )
                .with_5g(Scenario::UrbanMacro, LosCondition::Nlos, 25.0, 1.5)
                .with_clutter(20.0, 20.0),
            },
            Site {
                name: "mmwave-28g".to_string(),
                transmitter: TransmitterConfig::new(
                    Technology::Nr,
                    PropagationModelId::MmWave,
                    28000.0,
                    10.0,
                    30.0,
                    AreaType::Urban,
                    GeoPoint::new(-7.61, 33.575),
                    0.5,
                )
                .with_los(LosCondition::Los),
            },
        ];

        Self {
            name: "example".to_string(),
            receiver_sensitivity_dbm: DEFAULT_SENSITIVITY_DBM,
            profile: None,
            sites,
        }
    }

    /// Example scenario as YAML.
    pub fn example_yaml() -> String {
        serde_yaml::to_string(&Self::example()).unwrap_or_default()
    }
}
