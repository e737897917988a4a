//! Coverage radius solver.
//!
//! Finds the largest distance at which `tx_power - path_loss(d)` stays at or
//! above the receiver sensitivity, by bisection over a bracket.
//!
//! The path-loss function must be non-decreasing in distance. Every model in
//! [`crate::propagation`] satisfies this, but the solver does not check it.

use serde::{Deserialize, Serialize};

use crate::error::{PropagationError, Result};

/// Smallest accepted stopping tolerance (km).
pub const MIN_TOLERANCE_KM: f64 = 1e-9;

/// Search interval and stopping tolerance, all in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBracket {
    pub min_km: f64,
    pub max_km: f64,
    pub tolerance_km: f64,
}

impl Default for SearchBracket {
    fn default() -> Self {
        Self {
            min_km: 1.0,
            max_km: 20.0,
            tolerance_km: 0.01,
        }
    }
}

impl SearchBracket {
    pub fn new(min_km: f64, max_km: f64) -> Self {
        Self {
            min_km,
            max_km,
            ..Default::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance_km: f64) -> Self {
        self.tolerance_km = tolerance_km;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_km < self.max_km) || !(self.tolerance_km >= MIN_TOLERANCE_KM) {
            return Err(PropagationError::InvalidParameter(format!(
                "search bracket [{}, {}] km with tolerance {} km",
                self.min_km, self.max_km, self.tolerance_km
            )));
        }
        Ok(())
    }
}

/// Maximum distance (km) satisfying the link budget.
///
/// Bisects until the bracket is narrower than `bracket.tolerance_km` and
/// returns the lower end, so the answer always meets the budget.
/// Returns `Ok(None)` when the budget already fails at `bracket.min_km`.
/// Errors from `path_loss_db` are propagated.
///
/// # Arguments
/// * `path_loss_db` - Path loss in dB as a function of distance in km.
/// * `tx_power_dbm` - Transmit power in dBm.
/// * `sensitivity_dbm` - Receiver sensitivity in dBm.
/// * `bracket` - Search interval.
pub fn solve<F>(
    path_loss_db: F,
    tx_power_dbm: f64,
    sensitivity_dbm: f64,
    bracket: SearchBracket,
) -> Result<Option<f64>>
where
    F: Fn(f64) -> Result<f64>,
{
    bracket.validate()?;

    let max_path_loss = tx_power_dbm - sensitivity_dbm;

    if path_loss_db(bracket.min_km)? > max_path_loss {
        return Ok(None);
    }

    let mut lo = bracket.min_km;
    let mut hi = bracket.max_km;

    while hi - lo > bracket.tolerance_km {
        let mid = (lo + hi) / 2.0;
        // Bracket can no longer shrink at this float resolution
        if mid <= lo || mid >= hi {
            break;
        }
        if path_loss_db(mid)? <= max_path_loss {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    tracing::debug!(radius_km = lo, max_path_loss, "coverage radius solved");
    Ok(Some(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Log-distance loss with a known root: PL(d) = 100 + 30 log10(d).
    fn synthetic(d: f64) -> Result<f64> {
        Ok(100.0 + 30.0 * d.log10())
    }

    #[test]
    fn test_converges_to_known_root() {
        // Budget 130 dB -> 30 log10(d) = 30 -> d = 10 km
        let r = solve(synthetic, 30.0, -100.0, SearchBracket::default())
            .unwrap()
            .unwrap();
        assert!((r - 10.0).abs() < 0.01, "radius={}", r);
        assert!(r <= 10.0);
    }

    #[test]
    fn test_various_roots() {
        for &root in &[1.5_f64, 4.2, 7.77, 19.3] {
            let budget = 100.0 + 30.0 * root.log10();
            let r = solve(synthetic, budget - 100.0, -100.0, SearchBracket::default())
                .unwrap()
                .unwrap();
            assert!((r - root).abs() < 0.01, "root {} solved as {}", root, r);
        }
    }

    #[test]
    fn test_root_beyond_bracket_saturates() {
        let r = solve(synthetic, 100.0, -100.0, SearchBracket::default())
            .unwrap()
            .unwrap();
        assert!(r > 19.98 && r <= 20.0);
    }

    #[test]
    fn test_infeasible_budget() {
        let r = solve(synthetic, -10.0, -100.0, SearchBracket::default()).unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn test_custom_tolerance() {
        let bracket = SearchBracket::new(0.01, 10.0).with_tolerance(0.0001);
        let r = solve(synthetic, 30.0 - 15.0, -100.0, bracket).unwrap().unwrap();
        // 30 log10(d) = 15 -> d = sqrt(10)
        assert!((r - 10.0_f64.sqrt()).abs() < 0.0001);
    }

    #[test]
    fn test_errors_propagate() {
        let failing = |d: f64| -> Result<f64> {
            if d > 5.0 {
                Err(PropagationError::range("test", "distance (km)", d, 0.0, 5.0))
            } else {
                Ok(50.0)
            }
        };
        let err = solve(failing, 43.0, -100.0, SearchBracket::default()).unwrap_err();
        assert!(err.is_point_recoverable());
    }

    #[test]
    fn test_rejects_tolerance_below_minimum() {
        for tolerance in [0.0, 1e-20, f64::NAN] {
            let bracket = SearchBracket::default().with_tolerance(tolerance);
            let err = solve(synthetic, 30.0, -100.0, bracket).unwrap_err();
            assert!(matches!(err, PropagationError::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_minimum_tolerance_terminates() {
        let bracket = SearchBracket::default().with_tolerance(MIN_TOLERANCE_KM);
        let r = solve(synthetic, 30.0, -100.0, bracket).unwrap().unwrap();
        assert!((r - 10.0).abs() < 1e-6, "radius={}", r);
    }

    #[test]
    fn test_bracket_narrower_than_tolerance() {
        let lo = 10.0_f64;
        let hi = lo + 4.0 * f64::EPSILON * lo;
        let bracket = SearchBracket::new(lo, hi).with_tolerance(MIN_TOLERANCE_KM);
        let r = solve(synthetic, 30.0, -100.0, bracket).unwrap().unwrap();
        assert_eq!(r, lo);
    }

    #[test]
    fn test_rejects_inverted_bracket() {
        let err = solve(synthetic, 30.0, -100.0, SearchBracket::new(20.0, 1.0)).unwrap_err();
        assert!(matches!(err, PropagationError::InvalidParameter(_)));
    }
}
