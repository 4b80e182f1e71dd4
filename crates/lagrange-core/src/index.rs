//! Linear numeric axis over calendar dates.

use crate::error::LagrangeResult;
use crate::types::{Date, DateSeries};

/// Maps calendar dates to signed day offsets from a fixed reference date.
///
/// The mapping is strictly monotonic, so interpolating over offsets
/// preserves calendar order.
///
/// # Example
///
/// ```rust
/// use lagrange_core::index::DateIndex;
///
/// let index = DateIndex::default();
/// assert_eq!(index.to_numeric("2002-01-01").unwrap(), 0);
/// assert_eq!(index.to_numeric("2002-02-01").unwrap(), 31);
/// assert_eq!(index.to_numeric("2001-12-31").unwrap(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateIndex {
    reference: Date,
}

impl Default for DateIndex {
    /// Uses the reference date 2002-01-01.
    fn default() -> Self {
        Self {
            reference: Self::default_reference(),
        }
    }
}

impl DateIndex {
    /// Creates an index anchored at `reference`.
    #[must_use]
    pub fn new(reference: Date) -> Self {
        Self { reference }
    }

    /// Returns the default reference date, 2002-01-01.
    #[must_use]
    pub fn default_reference() -> Date {
        Date::from(
            chrono::NaiveDate::from_ymd_opt(2002, 1, 1).expect("2002-01-01 is a valid date"),
        )
    }

    /// Returns the reference date.
    #[must_use]
    pub fn reference(&self) -> Date {
        self.reference
    }

    /// Returns the signed day offset of `date` from the reference date.
    #[must_use]
    pub fn offset(&self, date: &Date) -> i64 {
        self.reference.days_between(date)
    }

    /// Parses `YYYY-MM-DD` text and returns its day offset.
    ///
    /// # Errors
    ///
    /// Returns `LagrangeError::InvalidDateFormat` for malformed or impossible
    /// dates.
    pub fn to_numeric(&self, text: &str) -> LagrangeResult<i64> {
        Date::parse(text).map(|date| self.offset(&date))
    }

    /// Returns the day offsets of every sample in `series`, as `f64`.
    #[must_use]
    pub fn axis(&self, series: &DateSeries) -> Vec<f64> {
        series
            .iter()
            .map(|s| self.offset(&s.date) as f64)
            .collect()
    }
}
