//! Forex command implementation.
//!
//! Interpolates the embedded USD to PHP series at a calendar date.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use lagrange_core::engine::SeriesInterpolator;
use lagrange_core::reference::reference_series;

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the forex command.
#[derive(Args, Debug)]
pub struct ForexArgs {
    /// Target date (YYYY-MM-DD)
    pub date: String,
}

/// Forex result for output.
#[derive(Debug, Serialize, Tabled)]
struct ForexResult {
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day Offset")]
    offset: i64,
    #[tabled(rename = "Extrapolated")]
    extrapolated: bool,
}

/// Execute the forex command.
pub fn execute(args: ForexArgs, session: &Session) -> Result<()> {
    let series = reference_series();
    let index = session.config.date_index()?;
    let interpolator = SeriesInterpolator::with_index(&series, index)?;
    let quote = interpolator.quote(&args.date)?;

    let extrapolated = quote.date < series.first_date() || quote.date > series.last_date();
    let rate = quote.format_rate(session.precision);

    match session.format {
        OutputFormat::Table => {
            print_header(&format!("Interpolated exchange rate for {}", quote.date));
            let rows = vec![
                KeyValue::new("Date", quote.date.to_string()),
                KeyValue::new("Day Offset", quote.offset.to_string()),
                KeyValue::new("USD/PHP", rate),
                KeyValue::new("Extrapolated", if extrapolated { "yes" } else { "no" }),
            ];
            print_output(&rows, session.format)?;
        }
        OutputFormat::Minimal => println!("{}", rate),
        OutputFormat::Json | OutputFormat::Csv => {
            let result = ForexResult {
                rate,
                date: quote.date.to_string(),
                offset: quote.offset,
                extrapolated,
            };
            print_output(&[result], session.format)?;
        }
    }

    Ok(())
}
