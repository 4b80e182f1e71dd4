//! CLI error types.

use std::path::PathBuf;

use lagrange_core::LagrangeError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--point` argument is not of the form `X,Y`.
    #[error("Invalid point '{0}'. Use X,Y (e.g. 1/2,3).")]
    InvalidPoint(String),

    /// Configuration value is out of range or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("Cannot parse config file {path}: {source}")]
    ConfigParse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Interpolation failure from the engine.
    #[error(transparent)]
    Interpolation(#[from] LagrangeError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
