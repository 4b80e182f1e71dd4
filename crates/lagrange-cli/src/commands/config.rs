//! Config command implementation.
//!
//! Shows the effective configuration and where it is read from.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::config::default_config_path;
use crate::output::{print_header, print_info, print_output, print_single, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, session: &Session) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(session),
        ConfigCommand::Path => execute_path(session),
    }
}

fn execute_show(session: &Session) -> Result<()> {
    let config = &session.config;

    match session.format {
        OutputFormat::Json => print_single(config, session.format)?,
        OutputFormat::Minimal => print!("{}", toml::to_string(config)?),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("precision", config.precision.to_string()),
                KeyValue::new("format", config.format.as_str()),
                KeyValue::new("color", config.color.to_string()),
                KeyValue::new("reference_date", config.reference_date.clone()),
            ];
            if session.format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&rows, session.format)?;
        }
    }

    Ok(())
}

fn execute_path(session: &Session) -> Result<()> {
    let path = session.config_path.clone().or_else(default_config_path);

    match (session.format, path) {
        (OutputFormat::Minimal, Some(path)) => println!("{}", path.display()),
        (_, Some(path)) => {
            print_info(&format!("Config file: {}", path.display()));
            if path.is_file() {
                print_info("Status: exists");
            } else {
                print_info("Status: not created yet (using defaults)");
            }
        }
        (_, None) => anyhow::bail!("Could not determine config directory"),
    }

    Ok(())
}
