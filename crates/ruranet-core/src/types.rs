//! Core types shared by the propagation models and the coverage evaluator
//!
//! Every enum here has a fixed wire spelling (the strings accepted from and
//! handed back to request handlers). `FromStr` and `Display` use exactly those
//! strings, and so does serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PropagationError;

/// Radio access technology generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technology {
    #[serde(rename = "2G")]
    Gsm,
    #[serde(rename = "3G")]
    Umts,
    #[serde(rename = "4G")]
    Lte,
    #[serde(rename = "5G")]
    Nr,
}

impl Technology {
    pub const CHOICES: &'static str = "2G, 3G, 4G, 5G";

    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::Gsm => "2G",
            Technology::Umts => "3G",
            Technology::Lte => "4G",
            Technology::Nr => "5G",
        }
    }
}

impl FromStr for Technology {
    type Err = PropagationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2G" => Ok(Technology::Gsm),
            "3G" => Ok(Technology::Umts),
            "4G" => Ok(Technology::Lte),
            "5G" => Ok(Technology::Nr),
            _ => Err(PropagationError::InvalidChoice {
                field: "technology",
                given: s.to_string(),
                valid: Self::CHOICES,
            }),
        }
    }
}

/// Identifier of an implemented propagation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropagationModelId {
    #[serde(rename = "OKUMURA_HATA")]
    OkumuraHata,
    #[serde(rename = "COST_231")]
    Cost231,
    #[serde(rename = "3GPP_TR_38901")]
    Tr38901,
    #[serde(rename = "mmWave")]
    MmWave,
}

impl PropagationModelId {
    pub const CHOICES: &'static str = "OKUMURA_HATA, COST_231, 3GPP_TR_38901, mmWave";

    pub const ALL: [PropagationModelId; 4] = [
        PropagationModelId::OkumuraHata,
        PropagationModelId::Cost231,
        PropagationModelId::Tr38901,
        PropagationModelId::MmWave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropagationModelId::OkumuraHata => "OKUMURA_HATA",
            PropagationModelId::Cost231 => "COST_231",
            PropagationModelId::Tr38901 => "3GPP_TR_38901",
            PropagationModelId::MmWave => "mmWave",
        }
    }

    /// Okumura-Hata and COST-231 take an area type and distances in km.
    pub fn is_terrestrial(&self) -> bool {
        matches!(self, PropagationModelId::OkumuraHata | PropagationModelId::Cost231)
    }
}

impl FromStr for PropagationModelId {
    type Err = PropagationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OKUMURA_HATA" => Ok(PropagationModelId::OkumuraHata),
            "COST_231" => Ok(PropagationModelId::Cost231),
            "3GPP_TR_38901" => Ok(PropagationModelId::Tr38901),
            "mmWave" => Ok(PropagationModelId::MmWave),
            _ => Err(PropagationError::UnknownModel(s.to_string())),
        }
    }
}

/// Terrain / clutter class used by the empirical terrestrial models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AreaType {
    Urban,
    Suburban,
    Rural,
    Open,
}

impl AreaType {
    pub const CHOICES: &'static str = "URBAN, SUBURBAN, RURAL, OPEN";

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Urban => "URBAN",
            AreaType::Suburban => "SUBURBAN",
            AreaType::Rural => "RURAL",
            AreaType::Open => "OPEN",
        }
    }
}

impl FromStr for AreaType {
    type Err = PropagationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "URBAN" => Ok(AreaType::Urban),
            "SUBURBAN" => Ok(AreaType::Suburban),
            "RURAL" => Ok(AreaType::Rural),
            "OPEN" => Ok(AreaType::Open),
            _ => Err(PropagationError::InvalidChoice {
                field: "area type",
                given: s.to_string(),
                valid: Self::CHOICES,
            }),
        }
    }
}

/// 3GPP TR 38.901 deployment scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Urban macro
    #[serde(rename = "UMa")]
    UrbanMacro,
    /// Urban micro (street canyon)
    #[serde(rename = "UMi")]
    UrbanMicro,
    /// Rural macro
    #[serde(rename = "RMa")]
    RuralMacro,
    /// Indoor hotspot, office
    #[serde(rename = "InH-Office")]
    IndoorOffice,
    /// Indoor hotspot, shopping mall
    #[serde(rename = "InH-ShoppingMall")]
    IndoorShoppingMall,
}

impl Scenario {
    pub const CHOICES: &'static str = "UMa, UMi, RMa, InH-Office, InH-ShoppingMall";

    pub const ALL: [Scenario; 5] = [
        Scenario::UrbanMacro,
        Scenario::UrbanMicro,
        Scenario::RuralMacro,
        Scenario::IndoorOffice,
        Scenario::IndoorShoppingMall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::UrbanMacro => "UMa",
            Scenario::UrbanMicro => "UMi",
            Scenario::RuralMacro => "RMa",
            Scenario::IndoorOffice => "InH-Office",
            Scenario::IndoorShoppingMall => "InH-ShoppingMall",
        }
    }

    /// UMa and RMa NLOS use the clutter geometry (building height, street width).
    pub fn needs_clutter_geometry(&self) -> bool {
        matches!(self, Scenario::UrbanMacro | Scenario::RuralMacro)
    }
}

impl FromStr for Scenario {
    type Err = PropagationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UMa" => Ok(Scenario::UrbanMacro),
            "UMi" => Ok(Scenario::UrbanMicro),
            "RMa" => Ok(Scenario::RuralMacro),
            "InH-Office" => Ok(Scenario::IndoorOffice),
            "InH-ShoppingMall" => Ok(Scenario::IndoorShoppingMall),
            _ => Err(PropagationError::UnknownScenario {
                given: s.to_string(),
                valid: Self::CHOICES,
            }),
        }
    }
}

/// Line-of-sight condition between base station and user equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LosCondition {
    Los,
    Nlos,
}

impl LosCondition {
    pub const CHOICES: &'static str = "LOS, NLOS";

    pub fn as_str(&self) -> &'static str {
        match self {
            LosCondition::Los => "LOS",
            LosCondition::Nlos => "NLOS",
        }
    }
}

impl FromStr for LosCondition {
    type Err = PropagationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOS" => Ok(LosCondition::Los),
            "NLOS" => Ok(LosCondition::Nlos),
            _ => Err(PropagationError::InvalidChoice {
                field: "LOS condition",
                given: s.to_string(),
                valid: Self::CHOICES,
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Technology, PropagationModelId, AreaType, Scenario, LosCondition);

/// Geographic position in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees (-180 to +180)
    pub longitude: f64,
    /// Latitude in degrees (-90 to +90)
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_wire_strings_round_trip() {
        for id in PropagationModelId::ALL {
            assert_eq!(id.as_str().parse::<PropagationModelId>().unwrap(), id);
        }
        for scenario in Scenario::ALL {
            assert_eq!(scenario.to_string().parse::<Scenario>().unwrap(), scenario);
        }
        assert_eq!("5G".parse::<Technology>().unwrap(), Technology::Nr);
        assert_eq!("OPEN".parse::<AreaType>().unwrap(), AreaType::Open);
        assert_eq!("NLOS".parse::<LosCondition>().unwrap(), LosCondition::Nlos);
    }

    #[test]
    fn test_unknown_scenario_names_valid_set() {
        let err = "XYZ".parse::<Scenario>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownScenario);
        let msg = err.to_string();
        for scenario in Scenario::ALL {
            assert!(msg.contains(scenario.as_str()), "missing {} in {}", scenario, msg);
        }
    }

    #[test]
    fn test_unknown_model() {
        let err = "HATA".parse::<PropagationModelId>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownModel);
    }

    #[test]
    fn test_choices_are_case_sensitive() {
        assert!("urban".parse::<AreaType>().is_err());
        assert!("uma".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&PropagationModelId::Tr38901).unwrap();
        assert_eq!(json, "\"3GPP_TR_38901\"");
        let scenario: Scenario = serde_json::from_str("\"InH-ShoppingMall\"").unwrap();
        assert_eq!(scenario, Scenario::IndoorShoppingMall);
        let area: AreaType = serde_json::from_str("\"SUBURBAN\"").unwrap();
        assert_eq!(area, AreaType::Suburban);
    }
}
