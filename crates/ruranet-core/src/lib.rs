//! # Cellular Coverage Core
//!
//! Radio propagation models and a grid-based coverage evaluator for planning
//! 2G/3G/4G/5G base-station deployments.
//!
//! ## Overview
//!
//! - **Model formulas** ([`propagation`]): Okumura-Hata, COST-231,
//!   3GPP TR 38.901 and a millimetre-wave model, as pure functions
//! - **Model selection** ([`model`]): binds a transmitter's parameters to one
//!   path-loss function of distance, checking required fields up front
//! - **Radius solver** ([`radius`]): bisection for the largest distance that
//!   still meets a receiver sensitivity
//! - **Grid sampling** ([`grid`]): square lattice around the transmitter
//! - **Coverage evaluation** ([`coverage`]): per-point signal, tiers, covered
//!   area, percentage and population
//!
//! ## Data Flow
//!
//! ```text
//! TransmitterConfig → ModelSelector::bind → PathLossModel
//!                                              │
//! GridSampler → lattice points → CoverageEvaluator → CoverageResult
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use ruranet_core::prelude::*;
//!
//! let tx = TransmitterConfig::from_json(r#"{
//!     "technology": "4G", "propagation_model": "OKUMURA_HATA",
//!     "frequency": 900, "antenna_height": 50, "antenna_power": 43,
//!     "terrain_type": "URBAN", "longitude": -7.6, "latitude": 33.57,
//!     "radius": 5, "population_density": 800
//! }"#).unwrap();
//!
//! let result = simulate(&tx, &RuranetConfig::default()).unwrap();
//! println!("{:.1}% covered", result.coverage_percentage());
//! ```

pub mod config;
pub mod coverage;
pub mod error;
pub mod grid;
pub mod model;
pub mod observe;
pub mod propagation;
pub mod radius;
pub mod signal_map;
pub mod transmitter;
pub mod types;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::{ConfigError, RuranetConfig, SolverConfig};
pub use coverage::{
    simulate, CancelToken, CoverageCell, CoverageConfig, CoverageEvaluator, CoverageResult,
    CoverageTier, Thresholds, TierStats,
};
pub use error::{ErrorKind, PropagationError, Result};
pub use grid::{DegreeScaling, GridConfig, GridSampler};
pub use model::{ModelSelector, PathLossModel};
pub use signal_map::SignalMap;
pub use transmitter::TransmitterConfig;
pub use types::{AreaType, GeoPoint, LosCondition, PropagationModelId, Scenario, Technology};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::RuranetConfig;
    pub use crate::coverage::{simulate, CoverageConfig, CoverageEvaluator, CoverageResult};
    pub use crate::error::{PropagationError, Result};
    pub use crate::model::{ModelSelector, PathLossModel};
    pub use crate::transmitter::TransmitterConfig;
    pub use crate::types::{
        AreaType, GeoPoint, LosCondition, PropagationModelId, Scenario, Technology,
    };
}
