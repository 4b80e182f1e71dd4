//! Dated sample series.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LagrangeError, LagrangeResult};
use crate::types::Date;

/// A single observation of a rate on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatedSample {
    /// Observation date.
    pub date: Date,
    /// Observed rate.
    pub rate: Decimal,
}

impl DatedSample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(date: Date, rate: Decimal) -> Self {
        Self { date, rate }
    }

    /// Returns the rate as `f64`.
    #[must_use]
    pub fn rate_f64(&self) -> f64 {
        self.rate.to_f64().unwrap_or(f64::NAN)
    }
}

/// An immutable series of samples with strictly increasing dates.
///
/// # Example
///
/// ```rust
/// use lagrange_core::types::{Date, DatedSample, DateSeries};
/// use rust_decimal_macros::dec;
///
/// let series = DateSeries::new(vec![
///     DatedSample::new(Date::from_ymd(2002, 1, 1).unwrap(), dec!(26.5850)),
///     DatedSample::new(Date::from_ymd(2002, 2, 1).unwrap(), dec!(26.2703)),
/// ])
/// .unwrap();
/// assert_eq!(series.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSeries {
    samples: Vec<DatedSample>,
}

impl DateSeries {
    /// Creates a series, checking the ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns `LagrangeError::InvalidSeries` if the series is empty or the
    /// dates are not strictly increasing.
    pub fn new(samples: Vec<DatedSample>) -> LagrangeResult<Self> {
        if samples.is_empty() {
            return Err(LagrangeError::invalid_series("series has no samples"));
        }

        for pair in samples.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(LagrangeError::invalid_series(format!(
                    "dates must be strictly increasing: {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        Ok(Self { samples })
    }

    /// Creates a series from parallel date-text and rate slices.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` for unparsable dates, `InvalidInput` when
    /// the slices differ in length, and the errors of [`DateSeries::new`].
    pub fn from_pairs<S: AsRef<str>>(dates: &[S], rates: &[Decimal]) -> LagrangeResult<Self> {
        if dates.len() != rates.len() {
            return Err(LagrangeError::InvalidInput {
                reason: format!(
                    "dates and rates must have same length: {} vs {}",
                    dates.len(),
                    rates.len()
                ),
            });
        }

        let samples = dates
            .iter()
            .zip(rates)
            .map(|(d, r)| Ok(DatedSample::new(Date::parse(d.as_ref())?, *r)))
            .collect::<LagrangeResult<Vec<_>>>()?;

        Self::new(samples)
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; construction rejects empty series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples in date order.
    #[must_use]
    pub fn samples(&self) -> &[DatedSample] {
        &self.samples
    }

    /// Iterates over the samples in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, DatedSample> {
        self.samples.iter()
    }

    /// Returns the first date.
    #[must_use]
    pub fn first_date(&self) -> Date {
        self.samples[0].date
    }

    /// Returns the last date.
    #[must_use]
    pub fn last_date(&self) -> Date {
        self.samples[self.samples.len() - 1].date
    }

    /// Returns the rate observed on `date`, if any.
    #[must_use]
    pub fn rate_on(&self, date: Date) -> Option<Decimal> {
        self.samples
            .binary_search_by(|s| s.date.cmp(&date))
            .ok()
            .map(|i| self.samples[i].rate)
    }

    /// Returns the rates as `f64`, in date order.
    #[must_use]
    pub fn rates_f64(&self) -> Vec<f64> {
        self.samples.iter().map(DatedSample::rate_f64).collect()
    }
}

impl<'a> IntoIterator for &'a DateSeries {
    type Item = &'a DatedSample;
    type IntoIter = std::slice::Iter<'a, DatedSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
