//! Lagrange CLI - polynomial interpolation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Interpolate the USD/PHP reference series
//! lagrange forex 2002-06-15
//!
//! # List the reference series
//! lagrange series --format csv
//!
//! # Exact polynomial through points, evaluated at x = 3
//! lagrange poly -p 0,1 -p 1,2 -p 2,5 --at 3
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Session;
use config::CliConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, config_path) = CliConfig::load(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let session = Session::new(config, config_path, cli.format, cli.precision)?;
    debug!(format = session.format.as_str(), precision = session.precision, "session ready");

    match cli.command {
        Commands::Forex(args) => commands::forex::execute(args, &session)?,
        Commands::Series(args) => commands::series::execute(args, &session)?,
        Commands::Poly(args) => commands::poly::execute(args, &session)?,
        Commands::Config(args) => commands::config::execute(args, &session)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
