//! Calendar date type.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LagrangeError, LagrangeResult};

/// ISO 8601 calendar date format accepted by [`Date::parse`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` with a strict
/// `YYYY-MM-DD` textual form.
///
/// # Example
///
/// ```rust
/// use lagrange_core::types::Date;
///
/// let date = Date::parse("2002-03-01").unwrap();
/// assert_eq!(date.month(), 3);
/// assert!(Date::parse("2002/03/01").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `LagrangeError::InvalidDateFormat` if the date is impossible.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> LagrangeResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| LagrangeError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `LagrangeError::InvalidDateFormat` carrying the input when the
    /// text does not match the pattern or names an impossible date.
    /// Surrounding whitespace is not accepted.
    pub fn parse(s: &str) -> LagrangeResult<Self> {
        // chrono skips leading whitespace before numeric fields.
        if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
            return Err(LagrangeError::invalid_date(s));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|_| LagrangeError::invalid_date(s))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = LagrangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2002, 6, 1).unwrap();
        assert_eq!(date.year(), 2002);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2002, 2, 30).is_err());
        assert!(Date::from_ymd(2002, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2003-12-01").unwrap();
        assert_eq!(date, Date::from_ymd(2003, 12, 1).unwrap());
        assert_eq!("2003-12-01".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        for bad in [" 2002-01-01", "2002-01-01 ", "\t2002-01-01", "2002-01-01\n"] {
            assert_eq!(Date::parse(bad), Err(LagrangeError::invalid_date(bad)));
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["2002/01/01", "01-01-2002", "2002-02-30", "2002-13-01", "", "abc"] {
            assert_eq!(
                Date::parse(bad),
                Err(LagrangeError::invalid_date(bad)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2002, 1, 1).unwrap();
        let d2 = Date::from_ymd(2003, 1, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 365);
        assert_eq!(d2.days_between(&d1), -365);
        assert_eq!(d2 - d1, 365);
        assert_eq!(d1 + 31, Date::from_ymd(2002, 2, 1).unwrap());
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2002, 3, 1).unwrap();
        assert_eq!(format!("{}", date), "2002-03-01");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2002, 3, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2002-03-01\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
