//! Errors raised by the scale engine.

use thiserror::Error;

/// Result alias for scale engine operations.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Everything the engine can reject.
///
/// No variant is transient; callers should surface these rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// A parameter is non-numeric, non-finite or out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in configuration
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The viewport range or divisor cannot produce a finite slope.
    #[error("degenerate viewport: {0}")]
    DegenerateViewport(String),

    /// A manual override targeted a step the scale does not have.
    #[error("step index {index} is out of range for a scale of {len} steps")]
    IndexOutOfRange {
        /// Requested step index
        index: usize,
        /// Current number of steps
        len: usize,
    },

    /// A derived value came out as NaN or infinity.
    #[error("{0} is not a finite number")]
    NonFiniteResult(&'static str),
}

impl ScaleError {
    /// Shorthand for [`ScaleError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScaleError::invalid("base_size", "must be positive");
        assert_eq!(err.to_string(), "invalid base_size: must be positive");

        let err = ScaleError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(
            err.to_string(),
            "step index 9 is out of range for a scale of 8 steps"
        );

        let err = ScaleError::DegenerateViewport("divisor must be positive".into());
        assert!(err.to_string().starts_with("degenerate viewport"));
    }
}
