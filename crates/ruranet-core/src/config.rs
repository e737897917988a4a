//! # Configuration System
//!
//! YAML configuration for coverage runs:
//!
//! - Grid sampling (resolution, degree conversion, longitude scaling)
//! - Coverage tier thresholds
//! - Radius solver tolerance
//! - Parallel evaluation
//! - Logging
//! - Named coverage profiles (e.g. a fine grid for small cells)
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `RURANET_CONFIG` environment variable
//! 2. `./ruranet.yaml` (current directory)
//! 3. `~/.config/ruranet/config.yaml` (user config)
//! 4. `/etc/ruranet/config.yaml` (system config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! coverage:
//!   grid:
//!     resolution_km: 0.05
//!     scaling: cos_latitude
//!   thresholds:
//!     fair_dbm: -105.0
//!   parallel: true
//!
//! solver:
//!   tolerance_km: 0.001
//!
//! logging:
//!   level: debug
//!   format: compact
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::coverage::CoverageConfig;
use crate::grid::GridConfig;
use crate::model::PathLossModel;
use crate::observe::LogConfig;
use crate::radius::{SearchBracket, MIN_TOLERANCE_KM};

/// Error type for configuration operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration file or profile not found
    #[error("config not found: {0}")]
    NotFound(String),
    /// Failed to read or write configuration file
    #[error("failed to read config: {0}")]
    ReadError(String),
    /// Failed to parse configuration
    #[error("failed to parse config: {0}")]
    ParseError(String),
    /// Invalid configuration value
    #[error("invalid config: {0}")]
    ValidationError(String),
}

/// Radius solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Bisection stops once the bracket is this narrow (km)
    pub tolerance_km: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance_km: SearchBracket::default().tolerance_km,
        }
    }
}

impl SolverConfig {
    /// Search bracket for `model` with the configured tolerance.
    pub fn bracket_for(&self, model: &PathLossModel) -> SearchBracket {
        model.radius_bounds().with_tolerance(self.tolerance_km)
    }
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuranetConfig {
    /// Configuration version
    pub version: String,
    /// Evaluator settings: grid, thresholds, parallelism
    pub coverage: CoverageConfig,
    /// Radius solver settings
    pub solver: SolverConfig,
    /// Logging configuration
    pub logging: LogConfig,
    /// Named coverage profiles (name -> settings)
    pub profiles: BTreeMap<String, CoverageConfig>,
}

impl Default for RuranetConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            coverage: CoverageConfig::default(),
            solver: SolverConfig::default(),
            logging: LogConfig::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl RuranetConfig {
    /// Load configuration from the default search path.
    ///
    /// Returns default config if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("RURANET_CONFIG") {
            if Path::new(&path).exists() {
                return Self::load_from(Path::new(&path));
            }
            tracing::warn!(path = %path, "RURANET_CONFIG points to a missing file");
        }

        for path in &Self::config_search_paths() {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        Ok(Self::default())
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
    }

    /// Replace the coverage settings with a named profile.
    pub fn with_profile(&self, name: &str) -> Result<Self, ConfigError> {
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::NotFound(format!("profile '{}' not found", name)))?;

        let mut config = self.clone();
        config.coverage = *profile;
        Ok(config)
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./ruranet.yaml")];

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "ruranet") {
            paths.push(config_dir.config_dir().join("config.yaml"));
        }

        paths.push(PathBuf::from("/etc/ruranet/config.yaml"));

        paths
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.coverage
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        for (name, profile) in &self.profiles {
            profile
                .validate()
                .map_err(|e| ConfigError::ValidationError(format!("profile '{}': {}", name, e)))?;
        }

        if !(self.solver.tolerance_km >= MIN_TOLERANCE_KM) {
            return Err(ConfigError::ValidationError(format!(
                "solver tolerance_km must be at least {} km, got {}",
                MIN_TOLERANCE_KM, self.solver.tolerance_km
            )));
        }

        Ok(())
    }

    /// Generate example configuration YAML.
    pub fn example_yaml() -> String {
        let config = Self {
            profiles: {
                let mut profiles = BTreeMap::new();
                profiles.insert(
                    "small_cell".to_string(),
                    CoverageConfig {
                        grid: GridConfig {
                            resolution_km: 0.01,
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                );
                profiles.insert(
                    "regional".to_string(),
                    CoverageConfig {
                        grid: GridConfig {
                            resolution_km: 0.5,
                            scaling: crate::grid::DegreeScaling::CosLatitude,
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                );
                profiles
            },
            ..Default::default()
        };

        serde_yaml::to_string(&config).unwrap_or_default()
    }
}
