//! Parallel coverage sweeps using Rayon.
//!
//! Enabled with the `parallel` feature flag (on by default).
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! ruranet-core = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Every grid point is independent, so rows are handed to the Rayon pool and
//! the partial aggregates merged afterwards. Rows are merged in lattice
//! order, which keeps the cell list identical to a sequential sweep.
//!
//! For a handful of points the sequential sweep is usually faster.

use rayon::prelude::*;

use crate::config::RuranetConfig;
use crate::coverage::{simulate, CancelToken, CoverageEvaluator, CoverageResult, Sweep};
use crate::error::Result;
use crate::transmitter::TransmitterConfig;

/// Sweeps every lattice row on the Rayon pool.
///
/// The first error from any row is returned; cancellation is observed by
/// each worker between points.
pub(crate) fn sweep_rows(evaluator: &CoverageEvaluator, cancel: &CancelToken) -> Result<Sweep> {
    let sampler = evaluator.sampler();
    let rows: Vec<i64> = sampler.rows().collect();

    let partials = rows
        .par_iter()
        .map(|&row| evaluator.sweep_points(sampler.row_points(row), cancel))
        .collect::<Result<Vec<Sweep>>>()?;

    let mut total = Sweep::default();
    for partial in partials {
        total.merge(partial);
    }
    Ok(total)
}

/// Runs [`simulate`] for several transmitters concurrently.
///
/// Results come back in input order, one per transmitter.
pub fn simulate_batch(
    transmitters: &[TransmitterConfig],
    config: &RuranetConfig,
) -> Vec<Result<CoverageResult>> {
    transmitters
        .par_iter()
        .map(|tx| simulate(tx, config))
        .collect()
}
