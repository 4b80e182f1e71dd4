//! Calendar types.

mod date;
mod series;

pub use date::{Date, DATE_FORMAT};
pub use series::{DateSeries, DatedSample};
