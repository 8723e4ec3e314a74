//! Error types for Buycoins API operations

use buycoins_auth::AuthError;
use buycoins_types::ValidationError;

use crate::transport::TransportError;

/// Errors that can occur during Buycoins API operations
#[derive(Debug, thiserror::Error)]
pub enum BuycoinsError {
    /// An argument was rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The client cannot authenticate (missing or empty credentials)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request reached the transport and failed there
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Variables could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<AuthError> for BuycoinsError {
    fn from(err: AuthError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl BuycoinsError {
    /// Check if this error was raised by argument validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is retryable
    ///
    /// Only network failures, 429 and 5xx responses qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::Validation(_) | Self::Configuration(_) | Self::Serialization(_) => false,
        }
    }

    /// Name of the rejected parameter, for validation errors
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.parameter()),
            _ => None,
        }
    }
}

/// Result type for Buycoins operations
pub type BuycoinsResult<T> = Result<T, BuycoinsError>;
