//! Public interpolation API.
//!
//! These functions are the surface the presentation layer calls. Each is a
//! pure function of its inputs and returns a [`LagrangeError`] on malformed
//! input rather than panicking.
//!
//! [`LagrangeError`]: crate::error::LagrangeError

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use lagrange_math::interpolation::{Interpolator, LagrangeInterpolator};
use lagrange_math::points::PointSet;
use lagrange_math::polynomial::Polynomial;
use lagrange_math::rational::{parse_rational, Rational};
use lagrange_math::render;

use crate::error::LagrangeResult;
use crate::index::DateIndex;
use crate::types::{Date, DateSeries};

/// Fractional digits used when presenting an interpolated rate.
pub const RATE_DISPLAY_PRECISION: u32 = 4;

/// Lagrange interpolant over a dated series, indexed by day offset.
///
/// Builds the numeric interpolant once so repeated lookups against the same
/// series skip validation.
///
/// # Example
///
/// ```rust
/// use lagrange_core::engine::SeriesInterpolator;
/// use lagrange_core::reference::reference_series;
///
/// let interp = SeriesInterpolator::new(&reference_series()).unwrap();
/// let quote = interp.quote("2002-01-01").unwrap();
/// assert_eq!(quote.to_string(), "Interpolated exchange rate for 2002-01-01: 26.5850");
/// ```
#[derive(Debug, Clone)]
pub struct SeriesInterpolator {
    index: DateIndex,
    interpolator: LagrangeInterpolator,
}

impl SeriesInterpolator {
    /// Creates an interpolator using the default reference date.
    ///
    /// # Errors
    ///
    /// Returns an error if the series cannot be interpolated.
    pub fn new(series: &DateSeries) -> LagrangeResult<Self> {
        Self::with_index(series, DateIndex::default())
    }

    /// Creates an interpolator using a custom date index.
    ///
    /// # Errors
    ///
    /// Returns an error if the series cannot be interpolated.
    pub fn with_index(series: &DateSeries, index: DateIndex) -> LagrangeResult<Self> {
        let interpolator = LagrangeInterpolator::new(index.axis(series), series.rates_f64())?;
        Ok(Self {
            index,
            interpolator,
        })
    }

    /// Returns the date index in use.
    #[must_use]
    pub fn index(&self) -> DateIndex {
        self.index
    }

    /// Interpolates the rate at a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` for malformed dates.
    pub fn interpolate(&self, target_date: &str) -> LagrangeResult<f64> {
        self.quote(target_date).map(|q| q.rate)
    }

    /// Interpolates the rate at a `YYYY-MM-DD` date, keeping the parsed date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` for malformed dates.
    pub fn quote(&self, target_date: &str) -> LagrangeResult<RateQuote> {
        let date = Date::parse(target_date)?;
        let offset = self.index.offset(&date);
        let rate = self.interpolator.interpolate(offset as f64)?;

        debug!(
            %date,
            offset,
            rate,
            extrapolated = !self.interpolator.in_range(offset as f64),
            "interpolated series rate"
        );

        Ok(RateQuote { date, offset, rate })
    }
}

/// An interpolated rate at a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateQuote {
    /// Target date.
    pub date: Date,
    /// Day offset from the reference date.
    pub offset: i64,
    /// Interpolated rate at full `f64` precision.
    pub rate: f64,
}

impl RateQuote {
    /// Returns the rate rounded half away from zero to `dp` decimal places.
    ///
    /// Returns `None` when the rate is outside the decimal range.
    #[must_use]
    pub fn rounded(&self, dp: u32) -> Option<Decimal> {
        Decimal::from_f64(self.rate)
            .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Formats the rate with exactly `dp` fractional digits.
    ///
    /// Uses the same rounding as [`RateQuote::rounded`]. Rates outside the
    /// decimal range fall back to `f64` formatting.
    #[must_use]
    pub fn format_rate(&self, dp: u32) -> String {
        let prec = dp as usize;
        match self.rounded(dp) {
            Some(rounded) => format!("{rounded:.prec$}"),
            None => format!("{:.prec$}", self.rate),
        }
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interpolated exchange rate for {}: {}",
            self.date,
            self.format_rate(RATE_DISPLAY_PRECISION)
        )
    }
}

/// Interpolates `series` at `target_date` in floating point.
///
/// Dates are mapped to day offsets from 2002-01-01 and the Lagrange
/// polynomial through every sample is evaluated at the target offset.
///
/// # Errors
///
/// Returns `InvalidDateFormat` when `target_date` is not `YYYY-MM-DD`.
pub fn interpolate_numeric(series: &DateSeries, target_date: &str) -> LagrangeResult<f64> {
    SeriesInterpolator::new(series)?.interpolate(target_date)
}

/// Like [`interpolate_numeric`], returning a [`RateQuote`] for presentation.
///
/// # Errors
///
/// Returns `InvalidDateFormat` when `target_date` is not `YYYY-MM-DD`.
pub fn interpolate_rate(series: &DateSeries, target_date: &str) -> LagrangeResult<RateQuote> {
    SeriesInterpolator::new(series)?.quote(target_date)
}

/// Parses, validates, and interpolates textual `(x, y)` points exactly.
///
/// # Errors
///
/// - `ParseError` naming the first token that is not a number
/// - `EmptyPointSet` when `raw_points` is empty
/// - `DuplicateAbscissa` when two points share an x-value
///
/// # Example
///
/// ```rust
/// use lagrange_core::engine::{build_polynomial, evaluate_polynomial, render_polynomial};
///
/// let poly = build_polynomial(&[("0", "1"), ("1", "2"), ("2", "5")]).unwrap();
/// assert_eq!(render_polynomial(&poly), "x^2 + x + 1");
/// assert_eq!(evaluate_polynomial(&poly, "3").unwrap().to_string(), "13");
/// ```
pub fn build_polynomial<X, Y>(raw_points: &[(X, Y)]) -> LagrangeResult<Polynomial>
where
    X: AsRef<str>,
    Y: AsRef<str>,
{
    let points = PointSet::from_text(raw_points.iter().map(|(x, y)| (x.as_ref(), y.as_ref())))?;
    let poly = lagrange_math::interpolation::build_polynomial(&points)?;
    debug!(points = points.len(), polynomial = %poly, "built polynomial");
    Ok(poly)
}

/// Evaluates `poly` exactly at the value written in `x`.
///
/// # Errors
///
/// Returns `ParseError` when `x` is not a number.
pub fn evaluate_polynomial(poly: &Polynomial, x: &str) -> LagrangeResult<Rational> {
    let x = parse_rational(x)?;
    Ok(poly.evaluate(&x))
}

/// Renders `poly` in plain notation, e.g. `x^2 + x + 1`.
#[must_use]
pub fn render_polynomial(poly: &Polynomial) -> String {
    render::render(poly)
}

/// Renders `poly` in LaTeX notation, e.g. `\frac{1}{2} x^{2} + 1`.
#[must_use]
pub fn render_polynomial_latex(poly: &Polynomial) -> String {
    render::render_latex(poly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LagrangeError;
    use crate::reference::reference_series;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_numeric_at_sample_dates() {
        let series = reference_series();
        let interp = SeriesInterpolator::new(&series).unwrap();
        for sample in &series {
            let rate = interp.interpolate(&sample.date.to_string()).unwrap();
            assert_relative_eq!(rate, sample.rate_f64(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quote_rounding() {
        let quote = interpolate_rate(&reference_series(), "2002-01-01").unwrap();
        assert_eq!(quote.offset, 0);
        assert_eq!(quote.rounded(4), Some(dec!(26.5850)));
        assert_eq!(
            quote.to_string(),
            "Interpolated exchange rate for 2002-01-01: 26.5850"
        );
    }

    #[test]
    fn test_display_matches_rounded() {
        let date = Date::from_ymd(2002, 1, 1).unwrap();
        for rate in [26.58505, 1.00005, 0.12345, 28.64465, -3.00015] {
            let quote = RateQuote { date, offset: 0, rate };
            let expected = format!("{:.4}", quote.rounded(4).unwrap());
            assert_eq!(quote.format_rate(4), expected);
            assert_eq!(
                quote.to_string(),
                format!("Interpolated exchange rate for 2002-01-01: {expected}")
            );
        }
    }

    #[test]
    fn test_format_rate_pads_and_falls_back() {
        let date = Date::from_ymd(2002, 1, 1).unwrap();
        let quote = RateQuote { date, offset: 0, rate: 40.0 };
        assert_eq!(quote.format_rate(4), "40.0000");
        assert_eq!(quote.format_rate(0), "40");

        let quote = RateQuote { date, offset: 0, rate: f64::INFINITY };
        assert_eq!(quote.rounded(4), None);
        assert_eq!(quote.format_rate(2), "inf");
    }

    #[test]
    fn test_numeric_invalid_date() {
        let err = interpolate_numeric(&reference_series(), "2002/01/01").unwrap_err();
        assert_eq!(err, LagrangeError::invalid_date("2002/01/01"));
    }

    #[test]
    fn test_build_and_evaluate() {
        let poly = build_polynomial(&[("0", "1"), ("1", "2"), ("2", "5")]).unwrap();
        assert_eq!(render_polynomial(&poly), "x^2 + x + 1");
        assert_eq!(render_polynomial_latex(&poly), "x^{2} + x + 1");
        assert_eq!(evaluate_polynomial(&poly, "3").unwrap().to_string(), "13");
        assert_eq!(evaluate_polynomial(&poly, "1/2").unwrap().to_string(), "7/4");
    }

    #[test]
    fn test_build_errors() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(build_polynomial(&empty), Err(LagrangeError::EmptyPointSet));

        assert_eq!(
            build_polynomial(&[("1", "2"), ("abc", "3")]),
            Err(LagrangeError::ParseError {
                token: "abc".to_string()
            })
        );

        assert!(matches!(
            build_polynomial(&[("1", "2"), ("1", "3")]),
            Err(LagrangeError::DuplicateAbscissa { .. })
        ));
    }

    #[test]
    fn test_evaluate_parse_error() {
        let poly = build_polynomial(&[("0", "1")]).unwrap();
        assert_eq!(
            evaluate_polynomial(&poly, "three"),
            Err(LagrangeError::ParseError {
                token: "three".to_string()
            })
        );
    }

    #[test]
    fn test_owned_string_points() {
        let raw = vec![("0".to_string(), "0".to_string()), ("2".to_string(), "4".to_string())];
        let poly = build_polynomial(&raw).unwrap();
        assert_eq!(render_polynomial(&poly), "2*x");
    }
}
