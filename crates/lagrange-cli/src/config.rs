//! CLI configuration.
//!
//! Settings are read from a TOML file. The file is located, in order, from
//! `--config`, the `LAGRANGE_CONFIG` environment variable, and
//! `<config dir>/lagrange/config.toml`. Missing keys take their defaults and
//! a missing default file means all defaults.

use std::path::{Path, PathBuf};

use lagrange_core::index::DateIndex;
use lagrange_core::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Largest accepted `precision`.
pub const MAX_PRECISION: u32 = 28;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Fractional digits for decimal output
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Day zero of the date axis (YYYY-MM-DD)
    #[serde(default = "default_reference_date")]
    pub reference_date: String,
}

fn default_precision() -> u32 {
    4
}

fn default_true() -> bool {
    true
}

fn default_reference_date() -> String {
    DateIndex::default_reference().to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
            color: true,
            reference_date: default_reference_date(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file and validates it.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves and loads the configuration.
    ///
    /// An explicit path must exist. The default location is optional.
    /// Returns the configuration and the file it came from, if any.
    pub fn load(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }

    /// Checks every value is usable.
    pub fn validate(&self) -> CliResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CliError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        self.reference()?;
        Ok(())
    }

    /// Parses the configured reference date.
    pub fn reference(&self) -> CliResult<Date> {
        Date::parse(&self.reference_date).map_err(|_| {
            CliError::Config(format!(
                "reference_date '{}' is not YYYY-MM-DD",
                self.reference_date
            ))
        })
    }

    /// Builds the date index for the configured reference date.
    pub fn date_index(&self) -> CliResult<DateIndex> {
        Ok(DateIndex::new(self.reference()?))
    }
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("lagrange").join("config.toml"))
}
