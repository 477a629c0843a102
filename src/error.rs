//! Error types for distribution operations.

use std::fmt;

/// Result type for distribution operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur when evaluating distribution functions.
#[derive(Debug, Clone)]
pub enum StatsError {
    /// Invalid parameter value for the distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value outside the open interval (0, 1).
    InvalidProbability { value: f64 },

    /// Value is out of the distribution's support.
    OutOfSupport { value: f64, support: String },

    /// The requested quantity is not defined for the current parameters.
    UndefinedResult { context: String },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::InvalidProbability { value } => {
                write!(f, "Invalid probability {}: must be in (0, 1)", value)
            }
            Self::OutOfSupport { value, support } => {
                write!(f, "Value {} is outside support {}", value, support)
            }
            Self::UndefinedResult { context } => {
                write!(f, "Result is undefined: {}", context)
            }
        }
    }
}

impl std::error::Error for StatsError {}
