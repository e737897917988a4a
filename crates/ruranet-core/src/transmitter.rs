//! Transmitter parameters as received from a request or scenario file.
//!
//! Field names follow the request payload (`frequency`, `antenna_power`,
//! `h_bs`, ...). Enumerated fields arrive as strings and are parsed with the
//! `FromStr` impls in [`crate::types`], so an unknown model or scenario
//! surfaces with its own error kind rather than as a generic parse failure.

use serde::{Deserialize, Serialize};

use crate::error::{PropagationError, Result};
use crate::types::{AreaType, GeoPoint, LosCondition, PropagationModelId, Scenario, Technology};

/// One base-station transmitter and the area to evaluate around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransmitter")]
pub struct TransmitterConfig {
    pub technology: Technology,
    pub propagation_model: PropagationModelId,
    /// Carrier frequency in MHz
    pub frequency: f64,
    /// Antenna height in metres
    pub antenna_height: f64,
    /// Transmit power in dBm
    pub antenna_power: f64,
    pub terrain_type: AreaType,
    pub longitude: f64,
    pub latitude: f64,
    /// Search radius in km
    pub radius: f64,
    /// People per km²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_density: Option<f64>,
    /// Mobile antenna height in metres (terrestrial models)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub los_condition: Option<LosCondition>,
    /// Base-station height in metres (5G)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_bs: Option<f64>,
    /// User-equipment height in metres (5G)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_ut: Option<f64>,
    /// Mean building height in metres (5G)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    /// Mean street width in metres (5G)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    /// dB per metre (mmWave)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_attenuation: Option<f64>,
}

/// Wire form with enumerated fields still as strings.
#[derive(Debug, Deserialize)]
struct RawTransmitter {
    technology: String,
    propagation_model: String,
    frequency: f64,
    antenna_height: f64,
    antenna_power: f64,
    #[serde(default = "default_terrain")]
    terrain_type: String,
    longitude: f64,
    latitude: f64,
    radius: f64,
    #[serde(default)]
    population_density: Option<f64>,
    #[serde(default)]
    mobile_height: Option<f64>,
    #[serde(default)]
    scenario: Option<String>,
    #[serde(default)]
    los_condition: Option<String>,
    #[serde(default)]
    h_bs: Option<f64>,
    #[serde(default)]
    h_ut: Option<f64>,
    #[serde(default)]
    h: Option<f64>,
    #[serde(default)]
    w: Option<f64>,
    #[serde(default)]
    material_attenuation: Option<f64>,
}

fn default_terrain() -> String {
    AreaType::Urban.as_str().to_string()
}

impl TryFrom<RawTransmitter> for TransmitterConfig {
    type Error = PropagationError;

    fn try_from(raw: RawTransmitter) -> Result<Self> {
        Ok(Self {
            technology: raw.technology.parse()?,
            propagation_model: raw.propagation_model.parse()?,
            frequency: raw.frequency,
            antenna_height: raw.antenna_height,
            antenna_power: raw.antenna_power,
            terrain_type: raw.terrain_type.parse()?,
            longitude: raw.longitude,
            latitude: raw.latitude,
            radius: raw.radius,
            population_density: raw.population_density,
            mobile_height: raw.mobile_height,
            scenario: raw.scenario.as_deref().map(str::parse::<Scenario>).transpose()?,
            los_condition: raw
                .los_condition
                .as_deref()
                .map(str::parse::<LosCondition>)
                .transpose()?,
            h_bs: raw.h_bs,
            h_ut: raw.h_ut,
            h: raw.h,
            w: raw.w,
            material_attenuation: raw.material_attenuation,
        })
    }
}

impl TransmitterConfig {
    /// Transmitter with the mandatory fields set and every optional field empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        technology: Technology,
        propagation_model: PropagationModelId,
        frequency_mhz: f64,
        antenna_height_m: f64,
        antenna_power_dbm: f64,
        terrain_type: AreaType,
        location: GeoPoint,
        radius_km: f64,
    ) -> Self {
        Self {
            technology,
            propagation_model,
            frequency: frequency_mhz,
            antenna_height: antenna_height_m,
            antenna_power: antenna_power_dbm,
            terrain_type,
            longitude: location.longitude,
            latitude: location.latitude,
            radius: radius_km,
            population_density: None,
            mobile_height: None,
            scenario: None,
            los_condition: None,
            h_bs: None,
            h_ut: None,
            h: None,
            w: None,
            material_attenuation: None,
        }
    }

    /// Parses the JSON request form.
    ///
    /// Unknown enumerated values keep their error kind. Malformed JSON and
    /// missing mandatory fields are reported as `InvalidParameter`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTransmitter = serde_json::from_str(json)
            .map_err(|e| PropagationError::InvalidParameter(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PropagationError::InvalidParameter(e.to_string()))
    }

    pub fn with_population_density(mut self, people_per_km2: f64) -> Self {
        self.population_density = Some(people_per_km2);
        self
    }

    pub fn with_mobile_height(mut self, mobile_height_m: f64) -> Self {
        self.mobile_height = Some(mobile_height_m);
        self
    }

    /// Sets the 5G deployment fields.
    pub fn with_5g(mut self, scenario: Scenario, los: LosCondition, h_bs: f64, h_ut: f64) -> Self {
        self.scenario = Some(scenario);
        self.los_condition = Some(los);
        self.h_bs = Some(h_bs);
        self.h_ut = Some(h_ut);
        self
    }

    /// Sets mean building height and street width.
    pub fn with_clutter(mut self, building_height_m: f64, street_width_m: f64) -> Self {
        self.h = Some(building_height_m);
        self.w = Some(street_width_m);
        self
    }

    pub fn with_los(mut self, los: LosCondition) -> Self {
        self.los_condition = Some(los);
        self
    }

    pub fn with_material_attenuation(mut self, db_per_m: f64) -> Self {
        self.material_attenuation = Some(db_per_m);
        self
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency * 1e6
    }

    /// Basic sanity checks that do not depend on the chosen model.
    ///
    /// Model operating ranges are checked later, by the model itself.
    pub fn validate(&self) -> Result<()> {
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PropagationError::InvalidParameter(format!(
                "longitude must be between -180 and 180, got {}",
                self.longitude
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PropagationError::InvalidParameter(format!(
                "latitude must be between -90 and 90, got {}",
                self.latitude
            )));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(PropagationError::InvalidParameter(format!(
                "radius must be a positive number of km, got {}",
                self.radius
            )));
        }
        for (name, value) in [
            ("frequency", self.frequency),
            ("antenna_height", self.antenna_height),
            ("antenna_power", self.antenna_power),
        ] {
            if !value.is_finite() {
                return Err(PropagationError::InvalidParameter(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if let Some(density) = self.population_density {
            if !(density >= 0.0 && density.is_finite()) {
                return Err(PropagationError::InvalidParameter(format!(
                    "population_density must be non-negative, got {}",
                    density
                )));
            }
        }
        for (name, value) in [
            ("mobile_height", self.mobile_height),
            ("h_bs", self.h_bs),
            ("h_ut", self.h_ut),
            ("h", self.h),
            ("w", self.w),
        ] {
            if let Some(metres) = value {
                if !(metres > 0.0 && metres.is_finite()) {
                    return Err(PropagationError::InvalidParameter(format!(
                        "{} must be a positive number of metres, got {}",
                        name, metres
                    )));
                }
            }
        }
        // Negative attenuation would make loss fall with distance
        if let Some(db_per_m) = self.material_attenuation {
            if !(db_per_m >= 0.0 && db_per_m.is_finite()) {
                return Err(PropagationError::InvalidParameter(format!(
                    "material_attenuation must be non-negative, got {}",
                    db_per_m
                )));
            }
        }
        Ok(())
    }
}
