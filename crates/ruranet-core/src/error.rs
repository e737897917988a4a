//! Error types for propagation and coverage computations

use serde::Serialize;
use thiserror::Error;

/// Result type for propagation and coverage operations
pub type Result<T> = std::result::Result<T, PropagationError>;

/// Errors raised by the model formulas, the model selector and the evaluator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropagationError {
    /// A physical parameter lies outside the model's operating range
    #[error("{model}: {parameter} {value} is outside the valid range [{min}, {max}]")]
    ParameterRange {
        model: &'static str,
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Requested propagation model is not implemented
    #[error(
        "Unknown propagation model '{0}'. Choose from: {}",
        crate::types::PropagationModelId::CHOICES
    )]
    UnknownModel(String),

    /// Requested deployment scenario is not implemented
    #[error("Scenario '{given}' is not supported. Choose from: {valid}")]
    UnknownScenario { given: String, valid: &'static str },

    /// An enumerated field received a value outside its choice set
    #[error("Invalid {field} '{given}'. Must be one of: {valid}")]
    InvalidChoice {
        field: &'static str,
        given: String,
        valid: &'static str,
    },

    /// A scenario needs a field that was not supplied
    #[error("{model} requires field '{field}'")]
    MissingRequiredField {
        model: &'static str,
        field: &'static str,
    },

    /// Transmitter parameter rejected by basic sanity checks
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Signal map key is not a "lon,lat" pair
    #[error("Invalid coordinate key '{0}'")]
    InvalidCoordinateKey(String),

    /// Sweep stopped by its cancellation token
    #[error("Coverage evaluation cancelled")]
    Cancelled,
}

/// Coarse classification of a [`PropagationError`], handed to callers
/// together with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ParameterRange,
    UnknownModel,
    UnknownScenario,
    InvalidChoice,
    MissingRequiredField,
    InvalidParameter,
    InvalidCoordinateKey,
    Cancelled,
}

impl PropagationError {
    /// Shorthand for range violations.
    pub(crate) fn range(
        model: &'static str,
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Self {
        PropagationError::ParameterRange {
            model,
            parameter,
            value,
            min,
            max,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PropagationError::ParameterRange { .. } => ErrorKind::ParameterRange,
            PropagationError::UnknownModel(_) => ErrorKind::UnknownModel,
            PropagationError::UnknownScenario { .. } => ErrorKind::UnknownScenario,
            PropagationError::InvalidChoice { .. } => ErrorKind::InvalidChoice,
            PropagationError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            PropagationError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            PropagationError::InvalidCoordinateKey(_) => ErrorKind::InvalidCoordinateKey,
            PropagationError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Whether a grid sweep may drop the offending point and keep going.
    ///
    /// Only per-point range violations qualify; configuration errors abort
    /// the whole run.
    pub fn is_point_recoverable(&self) -> bool {
        matches!(self, PropagationError::ParameterRange { .. })
    }
}

/// Checks `min <= value <= max`, rejecting NaN as well.
pub(crate) fn ensure_range(
    model: &'static str,
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PropagationError::range(model, parameter, value, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_check() {
        assert!(ensure_range("m", "frequency", 900.0, 150.0, 1500.0).is_ok());
        assert!(ensure_range("m", "frequency", 150.0, 150.0, 1500.0).is_ok());
        assert!(ensure_range("m", "frequency", 1500.0, 150.0, 1500.0).is_ok());

        let err = ensure_range("m", "frequency", 100.0, 150.0, 1500.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterRange);
        assert!(err.is_point_recoverable());

        assert!(ensure_range("m", "frequency", f64::NAN, 150.0, 1500.0).is_err());
    }

    #[test]
    fn test_fatal_errors_not_recoverable() {
        assert!(!PropagationError::UnknownModel("X".into()).is_point_recoverable());
        assert!(!PropagationError::Cancelled.is_point_recoverable());
        assert!(!PropagationError::MissingRequiredField {
            model: "3GPP_TR_38901",
            field: "h_bs",
        }
        .is_point_recoverable());
    }

    #[test]
    fn test_message_lists_valid_scenarios() {
        let err = PropagationError::UnknownScenario {
            given: "XYZ".into(),
            valid: "UMa, UMi",
        };
        let msg = err.to_string();
        assert!(msg.contains("XYZ"));
        assert!(msg.contains("UMa, UMi"));

        let msg = PropagationError::UnknownModel("LONGLEY_RICE".into()).to_string();
        assert_eq!(
            msg,
            "Unknown propagation model 'LONGLEY_RICE'. \
             Choose from: OKUMURA_HATA, COST_231, 3GPP_TR_38901, mmWave"
        );
    }
}
