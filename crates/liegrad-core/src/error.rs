//! Error types for matrix group updates.
//!
//! Every failure is reported before the parameter matrix is touched, so a
//! caller that receives an error still holds the pre-call value.

use thiserror::Error;

/// Errors that can occur while updating a parameter on a matrix group.
#[derive(Debug, Clone, Error)]
pub enum ManifoldError {
    /// Shape mismatch between matrices.
    ///
    /// Raised when a matrix is not square, when a symplectic matrix has an
    /// odd size, or when a gradient and its parameter disagree in shape.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape
        expected: String,
        /// Actual shape
        actual: String,
    },

    /// Numerical failure.
    ///
    /// Raised when an inverse or exponential cannot be computed, or when the
    /// computed matrix contains non-finite entries.
    #[error("Numerical instability detected: {reason}")]
    NumericalError {
        /// Description of the numerical issue
        reason: String,
    },

    /// The learning rate is negative, NaN or infinite.
    #[error("Invalid learning rate: {value}")]
    InvalidLearningRate {
        /// Offending value, formatted
        value: String,
    },
}

impl ManifoldError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a NumericalError with a custom reason.
    pub fn numerical_error<S: Into<String>>(reason: S) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }

    /// Create an InvalidLearningRate error.
    pub fn invalid_learning_rate<V: std::fmt::Display>(value: V) -> Self {
        Self::InvalidLearningRate {
            value: value.to_string(),
        }
    }
}

/// Result type alias for operations that can produce ManifoldError.
pub type Result<T> = std::result::Result<T, ManifoldError>;
