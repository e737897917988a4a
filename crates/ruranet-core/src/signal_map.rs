//! Per-point signal strengths keyed by `"lon,lat"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PropagationError, Result};
use crate::types::GeoPoint;

/// Decimal places in a coordinate key.
pub const KEY_PRECISION: usize = 6;

/// Received signal strength (dBm) per sampled point.
///
/// Serializes as a flat JSON object, e.g. `{"2.350000,48.850000": -71.2}`.
/// Keys are ordered, so two maps with the same content serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalMap(BTreeMap<String, f64>);

impl SignalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for a point, with both coordinates at six decimals.
    pub fn key(point: GeoPoint) -> String {
        format!(
            "{:.prec$},{:.prec$}",
            point.longitude,
            point.latitude,
            prec = KEY_PRECISION
        )
    }

    /// Splits a `"lon,lat"` key back into a point.
    pub fn parse_key(key: &str) -> Result<GeoPoint> {
        let invalid = || PropagationError::InvalidCoordinateKey(key.to_string());

        let (lon, lat) = key.split_once(',').ok_or_else(invalid)?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(invalid());
        }
        Ok(GeoPoint::new(longitude, latitude))
    }

    pub fn insert(&mut self, point: GeoPoint, signal_dbm: f64) {
        self.0.insert(Self::key(point), signal_dbm);
    }

    pub fn get(&self, point: GeoPoint) -> Option<f64> {
        self.0.get(&Self::key(point)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Decodes every key. Fails on the first malformed one.
    pub fn to_points(&self) -> Result<Vec<(GeoPoint, f64)>> {
        self.0
            .iter()
            .map(|(key, &signal)| Ok((Self::parse_key(key)?, signal)))
            .collect()
    }

    /// Strongest and weakest signal in the map.
    pub fn signal_range(&self) -> Option<(f64, f64)> {
        self.0.values().fold(None, |acc, &s| match acc {
            None => Some((s, s)),
            Some((max, min)) => Some((max.max(s), min.min(s))),
        })
    }

    pub(crate) fn extend(&mut self, other: SignalMap) {
        self.0.extend(other.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_key_format() {
        assert_eq!(
            SignalMap::key(GeoPoint::new(-7.6, 33.5731)),
            "-7.600000,33.573100"
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut map = SignalMap::new();
        let points = [
            (GeoPoint::new(2.35, 48.85), -71.25),
            (GeoPoint::new(2.350901, 48.85), -88.5),
            (GeoPoint::new(-122.419416, 37.774929), -99.999),
        ];
        for (p, s) in points {
            map.insert(p, s);
        }

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with('{'));
        let back: SignalMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);

        let mut decoded = back.to_points().unwrap();
        decoded.sort_by(|a, b| a.0.longitude.partial_cmp(&b.0.longitude).unwrap());
        let mut expected = points.to_vec();
        expected.sort_by(|a, b| a.0.longitude.partial_cmp(&b.0.longitude).unwrap());
        for ((p, s), (q, t)) in decoded.iter().zip(expected.iter()) {
            assert!((p.longitude - q.longitude).abs() < 1e-9);
            assert!((p.latitude - q.latitude).abs() < 1e-9);
            assert_eq!(s, t);
        }
    }

    #[test]
    fn test_parse_key_rejects_garbage() {
        for key in ["", "1.0", "abc,1.0", "1.0,", "NaN,1.0"] {
            let err = SignalMap::parse_key(key).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCoordinateKey, "key {:?}", key);
        }
    }

    #[test]
    fn test_get_uses_rounded_key() {
        let mut map = SignalMap::new();
        map.insert(GeoPoint::new(1.0, 2.0), -80.0);
        assert_eq!(map.get(GeoPoint::new(1.0000001, 2.0)), Some(-80.0));
        assert_eq!(map.get(GeoPoint::new(1.00001, 2.0)), None);
    }

    #[test]
    fn test_signal_range() {
        let mut map = SignalMap::new();
        assert!(map.signal_range().is_none());
        map.insert(GeoPoint::new(0.0, 0.0), -60.0);
        map.insert(GeoPoint::new(0.0, 0.1), -95.0);
        assert_eq!(map.signal_range(), Some((-60.0, -95.0)));
    }
}
