//! Poly command implementation.
//!
//! Builds the exact interpolating polynomial through user points and
//! optionally evaluates it.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lagrange_core::engine::{
    build_polynomial, evaluate_polynomial, render_polynomial, render_polynomial_latex,
};
use lagrange_math::rational::to_decimal_string;

use crate::cli::OutputFormat;
use crate::commands::{parse_point, Session};
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the poly command.
#[derive(Args, Debug)]
pub struct PolyArgs {
    /// Interpolation point X,Y (repeatable). Accepts integers, decimals,
    /// scientific notation and fractions, e.g. -p 0,1 -p 1/2,-3.25
    #[arg(
        short = 'p',
        long = "point",
        value_name = "X,Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub points: Vec<(String, String)>,

    /// Evaluate the polynomial at X (repeatable)
    #[arg(short, long, value_name = "X", allow_hyphen_values = true)]
    pub at: Vec<String>,

    /// Include the LaTeX rendering
    #[arg(long)]
    pub latex: bool,
}

/// Polynomial evaluated at one abscissa.
#[derive(Debug, Serialize)]
struct Evaluation {
    x: String,
    exact: String,
    decimal: String,
}

/// Poly result for JSON output.
#[derive(Debug, Serialize)]
struct PolyResult {
    polynomial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latex: Option<String>,
    degree: Option<usize>,
    /// Coefficients in ascending power order, as exact fractions.
    coefficients: Vec<String>,
    evaluations: Vec<Evaluation>,
}

/// Execute the poly command.
pub fn execute(args: PolyArgs, session: &Session) -> Result<()> {
    let poly = build_polynomial(&args.points)?;

    let evaluations = args
        .at
        .iter()
        .map(|x| {
            let value = evaluate_polynomial(&poly, x)?;
            Ok(Evaluation {
                x: x.trim().to_string(),
                exact: value.to_string(),
                decimal: to_decimal_string(&value, session.precision as usize),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = PolyResult {
        polynomial: render_polynomial(&poly),
        latex: args.latex.then(|| render_polynomial_latex(&poly)),
        degree: poly.degree(),
        coefficients: poly.to_coefficients().iter().map(ToString::to_string).collect(),
        evaluations,
    };

    match session.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let mut rows = vec![KeyValue::new("Polynomial", result.polynomial.clone())];
            if let Some(latex) = &result.latex {
                rows.push(KeyValue::new("LaTeX", latex.clone()));
            }
            rows.push(KeyValue::new(
                "Degree",
                result.degree.map_or_else(|| "-".to_string(), |d| d.to_string()),
            ));
            rows.push(KeyValue::new("Points", args.points.len().to_string()));
            for eval in &result.evaluations {
                rows.push(KeyValue::new(
                    format!("p({})", eval.x),
                    format!("{} ≈ {}", eval.exact, eval.decimal),
                ));
            }

            if session.format == OutputFormat::Table {
                print_header("Interpolating polynomial");
            }
            print_output(&rows, session.format)?;
        }
        OutputFormat::Json => print_single(&result, session.format)?,
        OutputFormat::Minimal => {
            println!("{}", result.latex.as_ref().unwrap_or(&result.polynomial));
            for eval in &result.evaluations {
                println!("{}", eval.exact);
            }
        }
    }

    Ok(())
}
