//! Model error taxonomy
//!
//! Every entity validates its parameters when it is built, so a finished
//! order tree can always be costed without further checks.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building rate tables or the order tree
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ModelError {
    /// A geometric parameter was zero, negative or not a number
    #[error("{parameter} must be a positive number, got {value}")]
    #[diagnostic(
        code(tubesc::model::construction),
        help("lengths and sizes are in millimetres and must be greater than zero")
    )]
    Construction { parameter: &'static str, value: f64 },

    /// A count, name or rate is outside its allowed range
    #[error("{0}")]
    #[diagnostic(code(tubesc::model::configuration))]
    Configuration(String),
}

impl ModelError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ModelError::Configuration(message.into())
    }
}

/// Check that a geometric parameter is finite and greater than zero
pub fn positive(parameter: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::Construction { parameter, value })
    }
}

/// Check that a rate is finite and not negative
pub fn non_negative(parameter: &str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::configuration(format!(
            "{} must be a non-negative number, got {}",
            parameter, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_accepts_positive() {
        assert_eq!(positive("diameter", 12.5), Ok(12.5));
    }

    #[test]
    fn test_positive_rejects_zero_negative_and_nan() {
        assert!(matches!(
            positive("length", 0.0),
            Err(ModelError::Construction { parameter: "length", .. })
        ));
        assert!(positive("length", -1.0).is_err());
        assert!(positive("length", f64::NAN).is_err());
        assert!(positive("length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_allows_zero() {
        assert_eq!(non_negative("carrying", 0.0), Ok(0.0));
        let err = non_negative("carrying", -0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "carrying must be a non-negative number, got -0.5"
        );
    }

    #[test]
    fn test_construction_message() {
        let err = ModelError::Construction {
            parameter: "width",
            value: -3.0,
        };
        assert_eq!(err.to_string(), "width must be a positive number, got -3");
    }
}
