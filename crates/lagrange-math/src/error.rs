//! Error types for interpolation and polynomial operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while parsing, validating, or interpolating points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A textual value could not be parsed as a rational number.
    #[error("Cannot parse '{token}' as a rational number")]
    ParseError {
        /// The offending input token.
        token: String,
    },

    /// A point set with no points was supplied.
    #[error("Point set is empty: at least one point is required")]
    EmptyPointSet,

    /// Two points share the same x-value, so the Lagrange basis is undefined.
    #[error("Duplicate abscissa: x = {x} appears more than once")]
    DuplicateAbscissa {
        /// The repeated x-value, rendered as text.
        x: String,
    },

    /// Numeric evaluation was requested over an empty data series.
    #[error("Empty input: x data must contain at least one value")]
    EmptyInput,

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a parse error for the given token.
    #[must_use]
    pub fn parse_error(token: impl Into<String>) -> Self {
        Self::ParseError {
            token: token.into(),
        }
    }

    /// Creates a duplicate abscissa error.
    #[must_use]
    pub fn duplicate_abscissa(x: impl ToString) -> Self {
        Self::DuplicateAbscissa { x: x.to_string() }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
