//! Grid sampler for coverage sweeps.
//!
//! The lattice is centred on the transmitter. Points sit at integer offsets
//! `(row, col)` from the centre, each offset being one grid resolution in
//! kilometres, converted to degrees with a fixed km-per-degree factor. The
//! sampler covers the whole square bounding box; discarding points outside
//! the search disc is left to the evaluator.
//!
//! Longitude degrees shrink with latitude. The default
//! [`DegreeScaling::Equatorial`] ignores that and uses the same factor on both
//! axes. [`DegreeScaling::CosLatitude`] widens the longitude step by
//! `1 / cos(latitude)` so that every lattice step is one resolution on the
//! ground.

use serde::{Deserialize, Serialize};

use crate::error::{PropagationError, Result};
use crate::signal_map::KEY_PRECISION;
use crate::types::GeoPoint;

/// Kilometres per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Default lattice spacing in kilometres.
pub const DEFAULT_RESOLUTION_KM: f64 = 0.1;

/// Upper bound on lattice half-width, in steps, to keep sweeps finite in practice.
pub const MAX_HALF_STEPS: i64 = 5_000;

/// How degrees of longitude are converted to kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeScaling {
    /// Same factor on both axes
    #[default]
    Equatorial,
    /// Longitude factor scaled by cos(latitude) of the transmitter
    CosLatitude,
}

/// Grid sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Lattice spacing in km
    pub resolution_km: f64,
    /// Degree to km conversion factor
    pub km_per_degree: f64,
    /// Longitude scaling mode
    pub scaling: DegreeScaling,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution_km: DEFAULT_RESOLUTION_KM,
            km_per_degree: KM_PER_DEGREE,
            scaling: DegreeScaling::Equatorial,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.resolution_km > 0.0 && self.resolution_km.is_finite()) {
            return Err(PropagationError::InvalidParameter(format!(
                "grid resolution must be positive, got {} km",
                self.resolution_km
            )));
        }
        if !(self.km_per_degree > 0.0 && self.km_per_degree.is_finite()) {
            return Err(PropagationError::InvalidParameter(format!(
                "km per degree must be positive, got {}",
                self.km_per_degree
            )));
        }
        // Longitude steps are never narrower than latitude steps, so this
        // keeps neighbouring points on distinct signal map keys
        let min_step_deg = 10f64.powi(-(KEY_PRECISION as i32));
        let step_deg = self.resolution_km / self.km_per_degree;
        if step_deg < min_step_deg {
            return Err(PropagationError::InvalidParameter(format!(
                "grid resolution {} km ({:e} degrees) is finer than the {:e} degree key precision",
                self.resolution_km, step_deg, min_step_deg
            )));
        }
        Ok(())
    }

    /// Kilometres per degree of longitude at `latitude`.
    pub fn lon_km_per_degree(&self, latitude: f64) -> f64 {
        match self.scaling {
            DegreeScaling::Equatorial => self.km_per_degree,
            // Clamped so the poles do not collapse the step to zero
            DegreeScaling::CosLatitude => {
                self.km_per_degree * latitude.to_radians().cos().max(1e-6)
            }
        }
    }
}

/// Approximate ground distance in km between two points.
///
/// Uses the flat-earth approximation of `config`: degree differences times
/// the km-per-degree factor, with the longitude factor taken at `a`'s
/// latitude when cosine scaling is enabled.
pub fn distance_km(a: GeoPoint, b: GeoPoint, config: &GridConfig) -> f64 {
    let dlat_km = (b.latitude - a.latitude) * config.km_per_degree;
    let dlon_km = (b.longitude - a.longitude) * config.lon_km_per_degree(a.latitude);
    dlat_km.hypot(dlon_km)
}

/// One lattice position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// Latitude offset from the centre, in steps
    pub row: i64,
    /// Longitude offset from the centre, in steps
    pub col: i64,
    pub point: GeoPoint,
}

/// Square lattice around a transmitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSampler {
    center: GeoPoint,
    radius_km: f64,
    resolution_km: f64,
    lat_step_deg: f64,
    lon_step_deg: f64,
    half_steps: i64,
}

impl GridSampler {
    pub fn new(center: GeoPoint, radius_km: f64, config: &GridConfig) -> Result<Self> {
        config.validate()?;
        if !(radius_km > 0.0 && radius_km.is_finite()) {
            return Err(PropagationError::InvalidParameter(format!(
                "search radius must be positive, got {} km",
                radius_km
            )));
        }

        // Epsilon keeps exact multiples (1.0 / 0.1) from rounding down
        let half_steps = (radius_km / config.resolution_km + 1e-9).floor() as i64;
        if half_steps > MAX_HALF_STEPS {
            return Err(PropagationError::InvalidParameter(format!(
                "grid of {} steps per side exceeds the limit of {}; raise the resolution",
                2 * half_steps + 1,
                2 * MAX_HALF_STEPS + 1
            )));
        }

        Ok(Self {
            center,
            radius_km,
            resolution_km: config.resolution_km,
            lat_step_deg: config.resolution_km / config.km_per_degree,
            lon_step_deg: config.resolution_km / config.lon_km_per_degree(center.latitude),
            half_steps,
        })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn resolution_km(&self) -> f64 {
        self.resolution_km
    }

    /// Number of steps from the centre to the edge of the box.
    pub fn half_steps(&self) -> i64 {
        self.half_steps
    }

    /// Lattice step as (longitude, latitude) degrees.
    pub fn step_deg(&self) -> (f64, f64) {
        (self.lon_step_deg, self.lat_step_deg)
    }

    /// Total number of lattice points in the bounding box.
    pub fn len(&self) -> usize {
        let side = (2 * self.half_steps + 1) as usize;
        side * side
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ground distance of a lattice position from the centre, in km.
    ///
    /// Computed from the integer offsets so that points on the lattice axes
    /// land on exact multiples of the resolution.
    pub fn offset_distance_km(&self, row: i64, col: i64) -> f64 {
        self.resolution_km * ((row * row + col * col) as f64).sqrt()
    }

    /// Coordinates of a lattice position.
    pub fn point_at(&self, row: i64, col: i64) -> GeoPoint {
        GeoPoint::new(
            self.center.longitude + col as f64 * self.lon_step_deg,
            self.center.latitude + row as f64 * self.lat_step_deg,
        )
    }

    /// Row offsets, south to north.
    pub fn rows(&self) -> std::ops::RangeInclusive<i64> {
        -self.half_steps..=self.half_steps
    }

    /// All points, row by row. Each call starts a fresh sequence.
    pub fn points(&self) -> GridPoints {
        GridPoints {
            sampler: *self,
            row: -self.half_steps,
            col: -self.half_steps,
            last_row: self.half_steps,
        }
    }

    /// Points of a single row.
    pub fn row_points(&self, row: i64) -> GridPoints {
        GridPoints {
            sampler: *self,
            row,
            col: -self.half_steps,
            last_row: row,
        }
    }
}

/// Lazy iterator over lattice points.
#[derive(Debug, Clone)]
pub struct GridPoints {
    sampler: GridSampler,
    row: i64,
    col: i64,
    last_row: i64,
}

impl Iterator for GridPoints {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row > self.last_row {
            return None;
        }

        let (row, col) = (self.row, self.col);
        self.col += 1;
        if self.col > self.sampler.half_steps {
            self.col = -self.sampler.half_steps;
            self.row += 1;
        }

        Some(LatticePoint {
            row,
            col,
            point: self.sampler.point_at(row, col),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.row > self.last_row {
            return (0, Some(0));
        }
        let side = 2 * self.sampler.half_steps + 1;
        let remaining_rows = self.last_row - self.row;
        let in_row = self.sampler.half_steps - self.col + 1;
        let n = (remaining_rows * side + in_row) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridPoints {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sampler(radius_km: f64) -> GridSampler {
        GridSampler::new(GeoPoint::new(2.35, 48.85), radius_km, &GridConfig::default()).unwrap()
    }

    #[test]
    fn test_point_count() {
        let s = sampler(1.0);
        assert_eq!(s.half_steps(), 10);
        assert_eq!(s.len(), 21 * 21);
        assert_eq!(s.points().count(), 441);
        assert_eq!(s.points().len(), 441);
    }

    #[test]
    fn test_restartable() {
        let s = sampler(0.5);
        let first: Vec<_> = s.points().collect();
        let second: Vec<_> = s.points().collect();
        assert_eq!(first, second);

        let mut it = s.points();
        it.next();
        let resumed = it.clone();
        assert_eq!(it.count(), resumed.count());
    }

    #[test]
    fn test_bounding_box() {
        let s = sampler(2.0);
        let half_width = 2.0 / KM_PER_DEGREE;
        for p in s.points() {
            assert!((p.point.longitude - 2.35).abs() <= half_width + 1e-12);
            assert!((p.point.latitude - 48.85).abs() <= half_width + 1e-12);
        }
    }

    #[test]
    fn test_centre_is_sampled() {
        let s = sampler(1.0);
        let centre = s.points().find(|p| p.row == 0 && p.col == 0).unwrap();
        assert_eq!(centre.point, GeoPoint::new(2.35, 48.85));
    }

    #[test]
    fn test_axis_offsets_are_exact() {
        let s = sampler(1.0);
        assert_eq!(s.offset_distance_km(0, 10), 1.0);
        assert_eq!(s.offset_distance_km(-10, 0), 1.0);
        assert_relative_eq!(s.offset_distance_km(6, 8), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_distance_matches_coordinates() {
        let s = sampler(1.0);
        for p in s.points() {
            let from_coords = distance_km(s.center(), p.point, &GridConfig::default());
            assert_relative_eq!(
                from_coords,
                s.offset_distance_km(p.row, p.col),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_rows_partition_points() {
        let s = sampler(0.3);
        let by_rows: Vec<_> = s.rows().flat_map(|r| s.row_points(r)).collect();
        let all: Vec<_> = s.points().collect();
        assert_eq!(by_rows, all);
    }

    #[test]
    fn test_cos_latitude_widens_longitude_step() {
        let config = GridConfig {
            scaling: DegreeScaling::CosLatitude,
            ..Default::default()
        };
        let s = GridSampler::new(GeoPoint::new(10.0, 60.0), 1.0, &config).unwrap();
        let (lon_step, lat_step) = s.step_deg();
        assert_relative_eq!(lon_step, 2.0 * lat_step, epsilon = 1e-9);

        let east = s.point_at(0, 10);
        assert_relative_eq!(distance_km(s.center(), east, &config), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let c = GeoPoint::new(0.0, 0.0);
        assert!(GridSampler::new(c, 0.0, &GridConfig::default()).is_err());
        assert!(GridSampler::new(c, f64::NAN, &GridConfig::default()).is_err());
        let bad = GridConfig {
            resolution_km: 0.0,
            ..Default::default()
        };
        assert!(GridSampler::new(c, 1.0, &bad).is_err());
        assert!(GridSampler::new(c, 10_000.0, &GridConfig::default()).is_err());
    }

    #[test]
    fn test_rejects_step_finer_than_keys() {
        let fine = GridConfig {
            resolution_km: 0.00005,
            ..Default::default()
        };
        assert!(matches!(
            fine.validate(),
            Err(PropagationError::InvalidParameter(_))
        ));

        let coarse_enough = GridConfig {
            resolution_km: 0.0002,
            ..Default::default()
        };
        assert!(coarse_enough.validate().is_ok());
    }

    #[test]
    fn test_radius_smaller_than_resolution() {
        let s = sampler(0.05);
        assert_eq!(s.points().count(), 1);
    }
}
