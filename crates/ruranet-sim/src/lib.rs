//! # Scenario Runner
//!
//! Batch coverage evaluation on top of `ruranet-core`: a YAML scenario lists
//! named transmitter sites, and the runner produces one JSON report with a
//! coverage result, coverage radius and timing per site.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ruranet_core::RuranetConfig;
//! use ruranet_sim::{ScenarioFile, SimulationRunner};
//!
//! let scenario = ScenarioFile::load(Path::new("scenario.yaml")).unwrap();
//! let report = SimulationRunner::new(RuranetConfig::default()).run(&scenario).unwrap();
//! report.write_json(Path::new("report.json")).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod runner;
pub mod scenario;

pub use error::{Result, SimError};
pub use runner::{
    ReportSummary, ScenarioReport, SimulationRunner, SiteError, SiteOutcome, SiteReport,
};
pub use scenario::{ScenarioFile, Site, DEFAULT_SENSITIVITY_DBM};
