//! CLI command implementations.

pub mod config;
pub mod forex;
pub mod poly;
pub mod series;

pub use config::ConfigArgs;
pub use forex::ForexArgs;
pub use poly::PolyArgs;
pub use series::SeriesArgs;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Effective settings shared by every command.
///
/// Command-line flags take precedence over the configuration file.
#[derive(Debug, Clone)]
pub struct Session {
    /// Output format.
    pub format: OutputFormat,
    /// Fractional digits for decimal output.
    pub precision: u32,
    /// Loaded configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Session {
    /// Merges command-line overrides into a loaded configuration.
    pub fn new(
        config: CliConfig,
        config_path: Option<PathBuf>,
        format: Option<OutputFormat>,
        precision: Option<u32>,
    ) -> CliResult<Self> {
        let precision = precision.unwrap_or(config.precision);
        if precision > crate::config::MAX_PRECISION {
            return Err(CliError::Config(format!(
                "precision must be at most {}, got {precision}",
                crate::config::MAX_PRECISION
            )));
        }
        Ok(Self {
            format: format.unwrap_or(config.format),
            precision,
            config,
            config_path,
        })
    }
}

/// Parses an `X,Y` point argument into its two tokens.
///
/// The tokens are kept as text; exact parsing happens in the engine so
/// that malformed numbers are reported by token.
pub fn parse_point(s: &str) -> CliResult<(String, String)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| CliError::InvalidPoint(s.to_string()))?;
    let (x, y) = (x.trim(), y.trim());
    if x.is_empty() || y.is_empty() || y.contains(',') {
        return Err(CliError::InvalidPoint(s.to_string()));
    }
    Ok((x.to_string(), y.to_string()))
}
