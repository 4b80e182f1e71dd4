//! Error types for the Lagrange toolkit.
//!
//! [`LagrangeError`] is the single taxonomy every public operation returns.
//! Errors from `lagrange-math` are folded into it variant for variant.

use lagrange_math::MathError;
use thiserror::Error;

/// A specialized Result type for Lagrange operations.
pub type LagrangeResult<T> = Result<T, LagrangeError>;

/// The main error type for Lagrange operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LagrangeError {
    /// Date text is not `YYYY-MM-DD` or names an impossible date.
    #[error("Invalid date format: '{input}'. Please enter a date in YYYY-MM-DD format")]
    InvalidDateFormat {
        /// The rejected input.
        input: String,
    },

    /// A numeric literal could not be parsed as a rational number.
    #[error("Cannot parse '{token}' as a number")]
    ParseError {
        /// The offending token.
        token: String,
    },

    /// No interpolation points were supplied.
    #[error("At least one interpolation point is required")]
    EmptyPointSet,

    /// Two points share an x-value.
    #[error("Duplicate x-value {x}: interpolation points need distinct abscissae")]
    DuplicateAbscissa {
        /// The repeated x-value.
        x: String,
    },

    /// Numeric evaluation was requested over an empty series.
    #[error("Cannot interpolate over an empty data series")]
    EmptyInput,

    /// A date series violates its ordering invariant.
    #[error("Invalid series: {reason}")]
    InvalidSeries {
        /// Description of the violation.
        reason: String,
    },

    /// Any other malformed input.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl LagrangeError {
    /// Creates an invalid date format error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for LagrangeError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ParseError { token } => Self::ParseError { token },
            MathError::EmptyPointSet => Self::EmptyPointSet,
            MathError::DuplicateAbscissa { x } => Self::DuplicateAbscissa { x },
            MathError::EmptyInput => Self::EmptyInput,
            MathError::InvalidInput { reason } => Self::InvalidInput { reason },
        }
    }
}
