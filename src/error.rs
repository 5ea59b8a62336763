//! Error taxonomy for pore-diameter evaluation.
//!
//! Every failure names the precondition that was violated and, where one
//! exists, the array key and pore index involved. Models either return the
//! whole per-pore array or one of these errors; there are no partial results.

use thiserror::Error;

pub type PoreResult<T> = Result<T, PoreError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoreError {
    /// A distribution family name that the registry cannot resolve, or an
    /// unusable model configuration.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Shape/loc/scale outside the family's domain, or a distribution whose
    /// quantile is undefined.
    #[error("invalid parameters for distribution '{distribution}': {message}")]
    InvalidParameter {
        distribution: String,
        message: String,
    },

    /// An input array value violates the formula's precondition, including a
    /// seed whose quantile is not a usable diameter.
    #[error("invalid input '{key}' at pore {index} (value {value}): {message}")]
    InvalidInput {
        key: String,
        index: usize,
        value: f64,
        message: String,
    },

    /// A pore selection that cannot be resolved (e.g. an unknown label).
    #[error("invalid pore selection: {message}")]
    InvalidSelection { message: String },

    /// The container holds no array under the requested key.
    #[error("missing array '{key}'")]
    MissingArray { key: String },

    /// Array length (or selection index) disagrees with the pore count.
    #[error("dimension mismatch for '{key}': expected {expected}, got {actual}")]
    DimensionMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },
}

impl PoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(distribution: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            distribution: distribution.into(),
            message: message.into(),
        }
    }

    pub fn invalid_input(
        key: impl Into<String>,
        index: usize,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            key: key.into(),
            index,
            value,
            message: message.into(),
        }
    }

    pub fn dimension_mismatch(key: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// True for errors caused by per-pore input values or selections rather
    /// than by the distribution or model configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PoreError::InvalidInput { .. }
                | PoreError::InvalidSelection { .. }
                | PoreError::MissingArray { .. }
                | PoreError::DimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_key_and_pore() {
        let err = PoreError::invalid_input("pore.volume", 3, -1.0, "volume must be >= 0");
        let text = err.to_string();
        assert!(text.contains("pore.volume"));
        assert!(text.contains("pore 3"));
        assert!(err.is_input_error());
    }

    #[test]
    fn configuration_is_not_an_input_error() {
        let err = PoreError::configuration("unknown distribution 'foo'");
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("foo"));
    }
}
