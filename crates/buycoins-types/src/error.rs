//! Validation errors for caller-supplied parameters

use thiserror::Error;

/// A parameter was outside its allowed domain
///
/// Raised before any network call, so the caller can always recover by
/// correcting the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a member of the parameter's domain
    #[error("The '{parameter}' parameter has a wrong value '{value}'")]
    InvalidValue {
        parameter: &'static str,
        value: String,
    },

    /// A conditionally required parameter was not supplied
    #[error("When {condition}, '{parameter}' is required")]
    MissingRequired {
        parameter: &'static str,
        condition: String,
    },
}

impl ValidationError {
    /// Create an invalid value error
    pub fn invalid(parameter: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            parameter,
            value: value.to_string(),
        }
    }

    /// Create a missing parameter error
    pub fn missing(parameter: &'static str, condition: impl Into<String>) -> Self {
        Self::MissingRequired {
            parameter,
            condition: condition.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidValue { parameter, .. } | Self::MissingRequired { parameter, .. } => {
                parameter
            }
        }
    }

    /// The rejected value, `None` when the parameter was absent
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { value, .. } => Some(value),
            Self::MissingRequired { .. } => None,
        }
    }

    /// Re-label the error with the name the caller used for the parameter
    pub fn with_parameter(self, name: &'static str) -> Self {
        match self {
            Self::InvalidValue { value, .. } => Self::InvalidValue {
                parameter: name,
                value,
            },
            Self::MissingRequired { condition, .. } => Self::MissingRequired {
                parameter: name,
                condition,
            },
        }
    }
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::invalid("side", "hold");
        assert_eq!(
            err.to_string(),
            "The 'side' parameter has a wrong value 'hold'"
        );

        let err = ValidationError::missing("static_price", "price_type is static");
        assert_eq!(
            err.to_string(),
            "When price_type is static, 'static_price' is required"
        );
        assert_eq!(err.value(), None);
    }

    #[test]
    fn test_with_parameter() {
        let err = ValidationError::invalid("side", "hold").with_parameter("order_side");
        assert_eq!(err.parameter(), "order_side");
        assert_eq!(err.value(), Some("hold"));
    }
}
