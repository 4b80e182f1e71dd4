//! Series command implementation.
//!
//! Lists the embedded reference series on the day-offset axis.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use lagrange_core::reference::reference_series;

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{print_header, print_output};

/// Arguments for the series command.
#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Only list samples on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only list samples on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// One series sample for output.
#[derive(Debug, Serialize, Tabled)]
struct SeriesRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day Offset")]
    offset: i64,
    #[tabled(rename = "USD/PHP")]
    rate: String,
}

/// Execute the series command.
pub fn execute(args: SeriesArgs, session: &Session) -> Result<()> {
    let series = reference_series();
    let index = session.config.date_index()?;

    let from = args.from.as_deref().map(lagrange_core::Date::parse).transpose()?;
    let to = args.to.as_deref().map(lagrange_core::Date::parse).transpose()?;

    let prec = session.precision as usize;
    let rows: Vec<SeriesRow> = series
        .iter()
        .filter(|s| from.map_or(true, |d| s.date >= d) && to.map_or(true, |d| s.date <= d))
        .map(|s| SeriesRow {
            date: s.date.to_string(),
            offset: index.offset(&s.date),
            rate: format!("{:.prec$}", s.rate),
        })
        .collect();

    match session.format {
        OutputFormat::Table => {
            print_header(&format!(
                "USD/PHP reference series ({} samples, day 0 = {})",
                rows.len(),
                index.reference()
            ));
            print_output(&rows, session.format)?;
        }
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{} {}", row.date, row.rate);
            }
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, session.format)?,
    }

    Ok(())
}
