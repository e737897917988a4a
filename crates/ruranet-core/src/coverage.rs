//! Grid coverage evaluation.
//!
//! For every lattice point inside the search disc the evaluator computes the
//! distance to the transmitter, applies the bound path-loss model and records
//! `signal = tx_power - path_loss`. Signals are classified into tiers; points
//! at or above the fair threshold contribute one square cell each to the
//! covered area.
//!
//! A point whose distance falls outside the model's operating range is
//! skipped and counted, it does not abort the sweep. Any other error does.
//!
//! ```
//! use ruranet_core::coverage::{CoverageConfig, CoverageEvaluator};
//! use ruranet_core::model::ModelSelector;
//! use ruranet_core::transmitter::TransmitterConfig;
//! use ruranet_core::types::{AreaType, GeoPoint, PropagationModelId, Technology};
//!
//! let tx = TransmitterConfig::new(
//!     Technology::Gsm,
//!     PropagationModelId::OkumuraHata,
//!     900.0,
//!     50.0,
//!     43.0,
//!     AreaType::Urban,
//!     GeoPoint::new(-7.6, 33.57),
//!     2.0,
//! );
//! let model = ModelSelector::bind(&tx).unwrap();
//! let result = CoverageEvaluator::new(model, &tx, &CoverageConfig::default())
//!     .unwrap()
//!     .evaluate()
//!     .unwrap();
//! assert!(result.coverage_percentage() > 0.0);
//! assert!(result.population_covered().is_none());
//! ```

use std::f64::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RuranetConfig;
use crate::error::{PropagationError, Result};
use crate::grid::{GridConfig, GridPoints, GridSampler, LatticePoint};
use crate::model::{ModelSelector, PathLossModel};
use crate::signal_map::SignalMap;
use crate::transmitter::TransmitterConfig;
use crate::types::GeoPoint;

/// Slack on the disc boundary so points at exactly the radius are kept.
const DISC_EPSILON_KM: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Signal-strength thresholds in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub excellent_dbm: f64,
    pub good_dbm: f64,
    /// Minimum signal counted as covered
    pub fair_dbm: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            excellent_dbm: -70.0,
            good_dbm: -85.0,
            fair_dbm: -100.0,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        if !(self.excellent_dbm > self.good_dbm && self.good_dbm > self.fair_dbm) {
            return Err(PropagationError::InvalidParameter(format!(
                "thresholds must decrease: excellent {} > good {} > fair {}",
                self.excellent_dbm, self.good_dbm, self.fair_dbm
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    Excellent,
    Good,
    Fair,
    NoCoverage,
}

impl CoverageTier {
    pub fn classify(signal_dbm: f64, thresholds: &Thresholds) -> Self {
        if signal_dbm >= thresholds.excellent_dbm {
            CoverageTier::Excellent
        } else if signal_dbm >= thresholds.good_dbm {
            CoverageTier::Good
        } else if signal_dbm >= thresholds.fair_dbm {
            CoverageTier::Fair
        } else {
            CoverageTier::NoCoverage
        }
    }

    pub fn is_covered(&self) -> bool {
        !matches!(self, CoverageTier::NoCoverage)
    }
}

/// Points and area in one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierCount {
    pub points: usize,
    pub area_km2: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    pub excellent: TierCount,
    pub good: TierCount,
    pub fair: TierCount,
    pub no_coverage: TierCount,
}

impl TierStats {
    pub fn get(&self, tier: CoverageTier) -> TierCount {
        match tier {
            CoverageTier::Excellent => self.excellent,
            CoverageTier::Good => self.good,
            CoverageTier::Fair => self.fair,
            CoverageTier::NoCoverage => self.no_coverage,
        }
    }

    fn slot(&mut self, tier: CoverageTier) -> &mut TierCount {
        match tier {
            CoverageTier::Excellent => &mut self.excellent,
            CoverageTier::Good => &mut self.good,
            CoverageTier::Fair => &mut self.fair,
            CoverageTier::NoCoverage => &mut self.no_coverage,
        }
    }

    fn record(&mut self, tier: CoverageTier, cell_area_km2: f64) {
        let slot = self.slot(tier);
        slot.points += 1;
        slot.area_km2 += cell_area_km2;
    }

    fn merge(&mut self, other: &TierStats) {
        for tier in [
            CoverageTier::Excellent,
            CoverageTier::Good,
            CoverageTier::Fair,
            CoverageTier::NoCoverage,
        ] {
            let theirs = other.get(tier);
            let slot = self.slot(tier);
            slot.points += theirs.points;
            slot.area_km2 += theirs.area_km2;
        }
    }
}

// ---------------------------------------------------------------------------
// Cells and result
// ---------------------------------------------------------------------------

/// Square around a covered point, one grid resolution on a side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageCell {
    pub center: GeoPoint,
    pub signal_dbm: f64,
    pub tier: CoverageTier,
    /// `[min_lon, min_lat, max_lon, max_lat]` in degrees
    pub bbox: [f64; 4],
}

impl CoverageCell {
    /// Closed ring, counter-clockwise from the south-west corner.
    pub fn polygon(&self) -> [GeoPoint; 5] {
        let [x0, y0, x1, y1] = self.bbox;
        [
            GeoPoint::new(x0, y0),
            GeoPoint::new(x1, y0),
            GeoPoint::new(x1, y1),
            GeoPoint::new(x0, y1),
            GeoPoint::new(x0, y0),
        ]
    }
}

/// Outcome of one coverage run. Built once, read through getters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    area_covered_km2: f64,
    coverage_percentage: f64,
    population_covered: Option<u64>,
    signal_strength_data: SignalMap,
    covered_cells: Vec<CoverageCell>,
    tiers: TierStats,
    points_evaluated: usize,
    points_skipped: usize,
}

impl CoverageResult {
    pub fn area_covered_km2(&self) -> f64 {
        self.area_covered_km2
    }

    /// Covered area over the search disc area, in percent.
    pub fn coverage_percentage(&self) -> f64 {
        self.coverage_percentage
    }

    pub fn population_covered(&self) -> Option<u64> {
        self.population_covered
    }

    pub fn signal_strength_data(&self) -> &SignalMap {
        &self.signal_strength_data
    }

    pub fn covered_cells(&self) -> &[CoverageCell] {
        &self.covered_cells
    }

    pub fn tiers(&self) -> &TierStats {
        &self.tiers
    }

    /// Points inside the disc that produced a signal.
    pub fn points_evaluated(&self) -> usize {
        self.points_evaluated
    }

    /// Points inside the disc dropped for being outside the model's range.
    pub fn points_skipped(&self) -> usize {
        self.points_skipped
    }

    /// Square cells can overhang the disc, so the percentage may pass 100.
    pub fn exceeds_full_coverage(&self) -> bool {
        self.coverage_percentage > 100.0
    }
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Shared flag checked between point evaluations.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Evaluator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub grid: GridConfig,
    pub thresholds: Thresholds,
    /// Evaluate rows on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            thresholds: Thresholds::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl CoverageConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.thresholds.validate()
    }
}

/// Partial aggregate over a set of points. Merging is order-independent
/// for every total; cells and keys are kept in row order by the callers.
#[derive(Debug, Default)]
pub(crate) struct Sweep {
    signals: SignalMap,
    cells: Vec<CoverageCell>,
    tiers: TierStats,
    evaluated: usize,
    skipped: usize,
}

impl Sweep {
    pub(crate) fn merge(&mut self, other: Sweep) {
        self.signals.extend(other.signals);
        self.cells.extend(other.cells);
        self.tiers.merge(&other.tiers);
        self.evaluated += other.evaluated;
        self.skipped += other.skipped;
    }
}

/// Runs one bound model over the grid around one transmitter.
#[derive(Debug, Clone)]
pub struct CoverageEvaluator {
    model: PathLossModel,
    sampler: GridSampler,
    tx_power_dbm: f64,
    population_density: Option<f64>,
    thresholds: Thresholds,
    parallel: bool,
}

impl CoverageEvaluator {
    pub fn new(
        model: PathLossModel,
        tx: &TransmitterConfig,
        config: &CoverageConfig,
    ) -> Result<Self> {
        config.validate()?;
        let sampler = GridSampler::new(tx.location(), tx.radius, &config.grid)?;

        Ok(Self {
            model,
            sampler,
            tx_power_dbm: tx.antenna_power,
            population_density: tx.population_density,
            thresholds: config.thresholds,
            parallel: config.parallel,
        })
    }

    pub fn sampler(&self) -> &GridSampler {
        &self.sampler
    }

    pub fn evaluate(&self) -> Result<CoverageResult> {
        self.evaluate_with_cancel(&CancelToken::new())
    }

    /// Like [`evaluate`](Self::evaluate), stopping with `Cancelled` once
    /// `cancel` is set.
    pub fn evaluate_with_cancel(&self, cancel: &CancelToken) -> Result<CoverageResult> {
        let span = tracing::info_span!(
            "coverage",
            model = %self.model.id(),
            radius_km = self.sampler.radius_km()
        );
        let _enter = span.enter();

        tracing::debug!(
            lattice_points = self.sampler.len(),
            parallel = self.parallel,
            "starting grid sweep"
        );

        let sweep = if self.parallel {
            self.sweep_parallel(cancel)?
        } else {
            self.sweep_points(self.sampler.points(), cancel)?
        };

        let result = self.finish(sweep);
        tracing::info!(
            evaluated = result.points_evaluated,
            skipped = result.points_skipped,
            area_km2 = result.area_covered_km2,
            percentage = result.coverage_percentage,
            "grid sweep complete"
        );
        Ok(result)
    }

    #[cfg(feature = "parallel")]
    fn sweep_parallel(&self, cancel: &CancelToken) -> Result<Sweep> {
        crate::parallel::sweep_rows(self, cancel)
    }

    #[cfg(not(feature = "parallel"))]
    fn sweep_parallel(&self, cancel: &CancelToken) -> Result<Sweep> {
        self.sweep_points(self.sampler.points(), cancel)
    }

    /// Evaluates a run of lattice points into a partial aggregate.
    pub(crate) fn sweep_points(&self, points: GridPoints, cancel: &CancelToken) -> Result<Sweep> {
        let mut sweep = Sweep::default();
        for lattice in points {
            if cancel.is_cancelled() {
                return Err(PropagationError::Cancelled);
            }
            self.evaluate_point(lattice, &mut sweep)?;
        }
        Ok(sweep)
    }

    fn evaluate_point(&self, lattice: LatticePoint, sweep: &mut Sweep) -> Result<()> {
        let distance_km = self.sampler.offset_distance_km(lattice.row, lattice.col);
        if distance_km > self.sampler.radius_km() + DISC_EPSILON_KM {
            return Ok(());
        }

        let path_loss = match self.model.path_loss(distance_km) {
            Ok(pl) => pl,
            Err(e) if e.is_point_recoverable() => {
                tracing::trace!(distance_km, error = %e, "point skipped");
                sweep.skipped += 1;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let signal_dbm = self.tx_power_dbm - path_loss;
        let tier = CoverageTier::classify(signal_dbm, &self.thresholds);
        let cell_area = self.cell_area_km2();

        sweep.evaluated += 1;
        sweep.signals.insert(lattice.point, signal_dbm);
        sweep.tiers.record(tier, cell_area);

        if tier.is_covered() {
            let (lon_step, lat_step) = self.sampler.step_deg();
            let (hx, hy) = (lon_step / 2.0, lat_step / 2.0);
            let p = lattice.point;
            sweep.cells.push(CoverageCell {
                center: p,
                signal_dbm,
                tier,
                bbox: [p.longitude - hx, p.latitude - hy, p.longitude + hx, p.latitude + hy],
            });
        }
        Ok(())
    }

    fn cell_area_km2(&self) -> f64 {
        self.sampler.resolution_km() * self.sampler.resolution_km()
    }

    fn finish(&self, sweep: Sweep) -> CoverageResult {
        let area_covered_km2 = sweep.cells.len() as f64 * self.cell_area_km2();
        let search_area_km2 = PI * self.sampler.radius_km().powi(2);
        let coverage_percentage = area_covered_km2 / search_area_km2 * 100.0;

        // Truncated; no estimate without a positive density
        let population_covered = self
            .population_density
            .filter(|&d| d > 0.0)
            .map(|d| (area_covered_km2 * d) as u64);

        CoverageResult {
            area_covered_km2,
            coverage_percentage,
            population_covered,
            signal_strength_data: sweep.signals,
            covered_cells: sweep.cells,
            tiers: sweep.tiers,
            points_evaluated: sweep.evaluated,
            points_skipped: sweep.skipped,
        }
    }
}

/// Validates the transmitter, binds its model and evaluates coverage.
pub fn simulate(tx: &TransmitterConfig, config: &RuranetConfig) -> Result<CoverageResult> {
    tx.validate()?;
    let model = ModelSelector::bind(tx)?;
    CoverageEvaluator::new(model, tx, &config.coverage)?.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{AreaType, LosCondition, PropagationModelId, Scenario, Technology};
    use approx::assert_relative_eq;

    fn hata_tx(radius_km: f64) -> TransmitterConfig {
        TransmitterConfig::new(
            Technology::Gsm,
            PropagationModelId::OkumuraHata,
            900.0,
            50.0,
            43.0,
            AreaType::Urban,
            GeoPoint::new(-7.6, 33.57),
            radius_km,
        )
    }

    fn sequential() -> CoverageConfig {
        CoverageConfig {
            parallel: false,
            ..Default::default()
        }
    }

    fn run(tx: &TransmitterConfig, config: &CoverageConfig) -> CoverageResult {
        let model = ModelSelector::bind(tx).unwrap();
        CoverageEvaluator::new(model, tx, config).unwrap().evaluate().unwrap()
    }

    #[test]
    fn test_classify_boundaries() {
        let t = Thresholds::default();
        assert_eq!(CoverageTier::classify(-50.0, &t), CoverageTier::Excellent);
        assert_eq!(CoverageTier::classify(-70.0, &t), CoverageTier::Excellent);
        assert_eq!(CoverageTier::classify(-70.1, &t), CoverageTier::Good);
        assert_eq!(CoverageTier::classify(-85.0, &t), CoverageTier::Good);
        assert_eq!(CoverageTier::classify(-99.9, &t), CoverageTier::Fair);
        assert_eq!(CoverageTier::classify(-100.0, &t), CoverageTier::Fair);
        assert_eq!(CoverageTier::classify(-100.01, &t), CoverageTier::NoCoverage);
        assert!(!CoverageTier::NoCoverage.is_covered());
    }

    #[test]
    fn test_one_km_hata_sweep() {
        // Only the ring at exactly 1 km is inside the model's distance range
        let result = run(&hata_tx(1.0), &sequential());

        assert!(result.coverage_percentage() > 0.0);
        assert!(result.coverage_percentage() <= 105.0);
        assert!(result.population_covered().is_none());
        assert_eq!(result.points_evaluated(), 12);
        assert_eq!(result.covered_cells().len(), 12);
        assert!(result.points_skipped() > 0);
        assert_relative_eq!(result.area_covered_km2(), 0.12, epsilon = 1e-9);
        assert_relative_eq!(
            result.coverage_percentage(),
            0.12 / PI * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_signal_matches_model() {
        let tx = hata_tx(2.0);
        let result = run(&tx, &sequential());

        let east = GeoPoint::new(-7.6 + 15.0 * 0.1 / 111.0, 33.57);
        let signal = result.signal_strength_data().get(east).unwrap();
        let expected = 43.0
            - crate::propagation::okumura_hata::path_loss(900.0, 50.0, 1.5, 1.5, AreaType::Urban)
                .unwrap();
        assert_relative_eq!(signal, expected, epsilon = 1e-9);
        assert!((signal - -86.30).abs() < 0.01);
    }

    #[test]
    fn test_tier_totals_are_consistent() {
        let result = run(&hata_tx(3.0), &sequential());
        let tiers = result.tiers();
        let covered = tiers.excellent.points + tiers.good.points + tiers.fair.points;
        assert_eq!(covered, result.covered_cells().len());
        assert_eq!(covered + tiers.no_coverage.points, result.points_evaluated());
        assert_eq!(result.signal_strength_data().len(), result.points_evaluated());
        assert_relative_eq!(
            tiers.excellent.area_km2 + tiers.good.area_km2 + tiers.fair.area_km2,
            result.area_covered_km2(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_population_estimate() {
        let tx = hata_tx(1.0).with_population_density(1000.0);
        let result = run(&tx, &sequential());
        // 0.12 km² * 1000 people/km², truncated
        assert_eq!(result.population_covered(), Some(120));

        let tx = hata_tx(1.0).with_population_density(0.0);
        assert!(run(&tx, &sequential()).population_covered().is_none());
    }

    #[test]
    fn test_out_of_band_points_are_skipped() {
        let mut tx = hata_tx(1.5);
        tx.propagation_model = PropagationModelId::Cost231;
        tx.frequency = 100.0;
        let result = run(&tx, &sequential());

        assert_eq!(result.points_evaluated(), 0);
        assert!(result.points_skipped() > 0);
        assert_eq!(result.coverage_percentage(), 0.0);
        assert!(result.signal_strength_data().is_empty());
    }

    #[test]
    fn test_full_disc_coverage_can_exceed_100() {
        let tx = TransmitterConfig::new(
            Technology::Nr,
            PropagationModelId::MmWave,
            28_000.0,
            10.0,
            30.0,
            AreaType::Urban,
            GeoPoint::new(0.0, 0.0),
            0.5,
        )
        .with_los(LosCondition::Los);
        let result = run(&tx, &sequential());

        // Reach is about 2.7 km, so every point but the centre is covered
        assert_eq!(result.points_skipped(), 1);
        assert_eq!(result.tiers().no_coverage.points, 0);
        assert!(result.coverage_percentage() > 99.0);
        assert_eq!(
            result.exceeds_full_coverage(),
            result.coverage_percentage() > 100.0
        );
    }

    #[test]
    fn test_fine_grid_keeps_one_key_per_point() {
        let tx = TransmitterConfig::new(
            Technology::Nr,
            PropagationModelId::MmWave,
            28_000.0,
            10.0,
            30.0,
            AreaType::Urban,
            GeoPoint::new(0.0, 0.0),
            0.002,
        )
        .with_los(LosCondition::Los);
        let model = ModelSelector::bind(&tx).unwrap();

        let fine = CoverageConfig {
            grid: GridConfig {
                resolution_km: 0.0002,
                ..Default::default()
            },
            ..sequential()
        };
        let result = CoverageEvaluator::new(model, &tx, &fine)
            .unwrap()
            .evaluate()
            .unwrap();
        assert!(result.points_evaluated() > 300);
        assert_eq!(result.signal_strength_data().len(), result.points_evaluated());

        // 0.05 m spacing is below the 6-decimal degree keys
        let too_fine = CoverageConfig {
            grid: GridConfig {
                resolution_km: 0.00005,
                ..Default::default()
            },
            ..sequential()
        };
        let err = CoverageEvaluator::new(model, &tx, &too_fine).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_cells_are_resolution_squares() {
        let result = run(&hata_tx(1.2), &sequential());
        let cell = result.covered_cells()[0];
        let ring = cell.polygon();
        assert_eq!(ring[0], ring[4]);
        let width_km = (cell.bbox[2] - cell.bbox[0]) * 111.0;
        let height_km = (cell.bbox[3] - cell.bbox[1]) * 111.0;
        assert_relative_eq!(width_km, 0.1, epsilon = 1e-9);
        assert_relative_eq!(height_km, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_cancelled_sweep() {
        let tx = hata_tx(5.0);
        let model = ModelSelector::bind(&tx).unwrap();
        let evaluator = CoverageEvaluator::new(model, &tx, &sequential()).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let err = evaluator.evaluate_with_cancel(&token).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn test_deterministic() {
        let a = run(&hata_tx(2.0), &sequential());
        let b = run(&hata_tx(2.0), &sequential());
        assert_eq!(a, b);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let tx = hata_tx(2.5).with_population_density(350.0);
        let seq = run(&tx, &sequential());
        let par = run(
            &tx,
            &CoverageConfig {
                parallel: true,
                ..Default::default()
            },
        );
        assert_eq!(seq.points_evaluated(), par.points_evaluated());
        assert_eq!(seq.points_skipped(), par.points_skipped());
        assert_eq!(seq.signal_strength_data(), par.signal_strength_data());
        assert_eq!(seq.covered_cells(), par.covered_cells());
        assert_eq!(seq.population_covered(), par.population_covered());
        assert_relative_eq!(seq.area_covered_km2(), par.area_covered_km2(), epsilon = 1e-9);
    }

    #[test]
    fn test_simulate_rejects_bad_transmitter() {
        let mut tx = hata_tx(1.0);
        tx.latitude = 95.0;
        let err = simulate(&tx, &RuranetConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let tx = TransmitterConfig::new(
            Technology::Nr,
            PropagationModelId::Tr38901,
            3500.0,
            25.0,
            40.0,
            AreaType::Urban,
            GeoPoint::new(0.0, 0.0),
            1.0,
        );
        let err = simulate(&tx, &RuranetConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_simulate_5g_umi() {
        let tx = TransmitterConfig::new(
            Technology::Nr,
            PropagationModelId::Tr38901,
            3500.0,
            10.0,
            40.0,
            AreaType::Urban,
            GeoPoint::new(0.0, 0.0),
            0.5,
        )
        .with_5g(Scenario::UrbanMicro, LosCondition::Nlos, 10.0, 1.5);
        let result = simulate(&tx, &RuranetConfig::default()).unwrap();
        // Centre point sits below the 10 m minimum distance
        assert_eq!(result.points_skipped(), 1);
        assert!(result.coverage_percentage() > 0.0);
    }
}
