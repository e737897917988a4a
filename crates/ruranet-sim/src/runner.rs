//! Scenario execution and reporting.
//!
//! Every site is validated, bound to its model, solved for a coverage radius
//! and swept independently. A site that fails is recorded with its error
//! kind and message while the remaining sites still run.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

use ruranet_core::{
    radius, CancelToken, CoverageEvaluator, CoverageResult, ErrorKind, ModelSelector,
    PropagationError, RuranetConfig,
};

use crate::error::{Result, SimError};
use crate::scenario::{ScenarioFile, Site};

/// Site failure, serialized next to the site name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&PropagationError> for SiteError {
    fn from(err: &PropagationError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// What happened to one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteOutcome {
    Completed {
        /// Largest distance meeting the receiver sensitivity (km)
        coverage_radius_km: Option<f64>,
        /// Wall-clock time for the radius solve and the sweep
        elapsed_ms: f64,
        coverage: CoverageResult,
    },
    Failed(SiteError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: SiteOutcome,
}

impl SiteReport {
    pub fn coverage(&self) -> Option<&CoverageResult> {
        match &self.outcome {
            SiteOutcome::Completed { coverage, .. } => Some(coverage),
            SiteOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SiteError> {
        match &self.outcome {
            SiteOutcome::Completed { .. } => None,
            SiteOutcome::Failed(err) => Some(err),
        }
    }
}

/// Totals across all sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub sites: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Sum of the per-site covered areas; overlaps are counted twice
    pub total_area_km2: f64,
}

/// Outcome of a whole scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub receiver_sensitivity_dbm: f64,
    pub summary: ReportSummary,
    pub sites: Vec<SiteReport>,
}

impl ScenarioReport {
    fn new(scenario: &ScenarioFile, sites: Vec<SiteReport>) -> Self {
        let mut summary = ReportSummary {
            sites: sites.len(),
            ..Default::default()
        };
        for site in &sites {
            match site.coverage() {
                Some(coverage) => {
                    summary.succeeded += 1;
                    summary.total_area_km2 += coverage.area_covered_km2();
                }
                None => summary.failed += 1,
            }
        }

        Self {
            scenario: scenario.name.clone(),
            receiver_sensitivity_dbm: scenario.receiver_sensitivity_dbm,
            summary,
            sites,
        }
    }

    pub fn site(&self, name: &str) -> Option<&SiteReport> {
        self.sites.iter().find(|s| s.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Encode(e.to_string()))
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| SimError::io(path, e))?;
        tracing::info!(path = %path.display(), "report written");
        Ok(())
    }
}

/// Runs scenarios against one configuration.
#[derive(Debug, Clone, Default)]
pub struct SimulationRunner {
    config: RuranetConfig,
    cancel: CancelToken,
}

impl SimulationRunner {
    pub fn new(config: RuranetConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    pub fn config(&self) -> &RuranetConfig {
        &self.config
    }

    /// Token that stops the current sweep and fails the remaining sites.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Evaluate every site of `scenario`.
    ///
    /// Only scenario-level problems (an unknown profile, a structurally
    /// invalid scenario) are returned as errors.
    pub fn run(&self, scenario: &ScenarioFile) -> Result<ScenarioReport> {
        scenario.validate()?;
        let config = match &scenario.profile {
            Some(profile) => self.config.with_profile(profile)?,
            None => self.config.clone(),
        };

        let span = tracing::info_span!("scenario", name = %scenario.name);
        let _enter = span.enter();
        tracing::info!(sites = scenario.sites.len(), "running scenario");

        let sites: Vec<SiteReport> = scenario
            .sites
            .iter()
            .map(|site| {
                let sensitivity_dbm = scenario.receiver_sensitivity_dbm;
                let outcome = match self.run_site(site, sensitivity_dbm, &config) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        tracing::warn!(site = %site.name, error = %err, "site failed");
                        SiteOutcome::Failed(SiteError::from(&err))
                    }
                };
                SiteReport {
                    name: site.name.clone(),
                    outcome,
                }
            })
            .collect();

        let report = ScenarioReport::new(scenario, sites);
        tracing::info!(
            succeeded = report.summary.succeeded,
            failed = report.summary.failed,
            total_area_km2 = report.summary.total_area_km2,
            "scenario complete"
        );
        Ok(report)
    }

    fn run_site(
        &self,
        site: &Site,
        sensitivity_dbm: f64,
        config: &RuranetConfig,
    ) -> std::result::Result<SiteOutcome, PropagationError> {
        let tx = &site.transmitter;
        tx.validate()?;
        let model = ModelSelector::bind(tx)?;
        let start = Instant::now();

        let bracket = config.solver.bracket_for(&model);
        let coverage_radius_km =
            match radius::solve(model.as_fn(), tx.antenna_power, sensitivity_dbm, bracket) {
                Ok(km) => km,
                Err(err) if err.is_point_recoverable() => {
                    tracing::warn!(site = %site.name, error = %err, "coverage radius unavailable");
                    None
                }
                Err(err) => return Err(err),
            };

        let evaluator = CoverageEvaluator::new(model, tx, &config.coverage)?;
        let coverage = evaluator.evaluate_with_cancel(&self.cancel)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            site = %site.name,
            radius_km = ?coverage_radius_km,
            area_km2 = coverage.area_covered_km2(),
            elapsed_ms,
            "site complete"
        );

        Ok(SiteOutcome::Completed {
            coverage_radius_km,
            elapsed_ms,
            coverage,
        })
    }
}
