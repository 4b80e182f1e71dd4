//! Embedded reference data.
//!
//! Monthly USD→PHP exchange rates observed on the first of each month,
//! January 2002 through December 2003.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Date, DateSeries, DatedSample};

/// Number of observations in the reference series.
pub const REFERENCE_LEN: usize = 24;

const USD_PHP_2002_2003: [Decimal; REFERENCE_LEN] = [
    dec!(26.5850),
    dec!(26.2703),
    dec!(26.7617),
    dec!(27.2878),
    dec!(27.3863),
    dec!(28.6447),
    dec!(28.0576),
    dec!(28.0241),
    dec!(28.5094),
    dec!(29.0770),
    dec!(29.9216),
    dec!(30.1003),
    dec!(31.1729),
    dec!(32.1087),
    dec!(32.8384),
    dec!(32.1492),
    dec!(34.0153),
    dec!(35.4584),
    dec!(35.5996),
    dec!(35.8302),
    dec!(36.3606),
    dec!(38.1060),
    dec!(39.6118),
    dec!(40.8515),
];

/// Returns the USD→PHP monthly reference series for 2002–2003.
#[must_use]
pub fn reference_series() -> DateSeries {
    let samples = USD_PHP_2002_2003
        .iter()
        .enumerate()
        .map(|(i, rate)| {
            let year = 2002 + (i / 12) as i32;
            let month = (i % 12) as u32 + 1;
            let date = Date::from_ymd(year, month, 1).expect("first of month is always valid");
            DatedSample::new(date, *rate)
        })
        .collect();

    DateSeries::new(samples).expect("reference dates are strictly increasing")
}
