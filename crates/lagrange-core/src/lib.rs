//! # Lagrange Core
//!
//! Calendar series and the public API of the Lagrange interpolation toolkit.
//!
//! This crate provides:
//!
//! - **Types**: `Date`, `DatedSample`, and ordered `DateSeries`
//! - **Date Index**: Linear day-offset axis anchored at 2002-01-01
//! - **Reference Data**: Monthly USD→PHP rates for 2002–2003
//! - **Engine**: Numeric series lookups and exact polynomial construction,
//!   evaluation, and rendering
//!
//! ## Example
//!
//! ```rust
//! use lagrange_core::prelude::*;
//!
//! // Floating-point lookup against the reference series
//! let rate = interpolate_numeric(&reference_series(), "2002-01-01").unwrap();
//! assert!((rate - 26.5850).abs() < 1e-9);
//!
//! // Exact polynomial through user points
//! let poly = build_polynomial(&[("0", "1"), ("1", "2"), ("2", "5")]).unwrap();
//! assert_eq!(render_polynomial(&poly), "x^2 + x + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod engine;
pub mod error;
pub mod index;
pub mod reference;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{
        build_polynomial, evaluate_polynomial, interpolate_numeric, interpolate_rate,
        render_polynomial, render_polynomial_latex, RateQuote, SeriesInterpolator,
    };
    pub use crate::error::{LagrangeError, LagrangeResult};
    pub use crate::index::DateIndex;
    pub use crate::reference::reference_series;
    pub use crate::types::{Date, DateSeries, DatedSample};
    pub use lagrange_math::{Polynomial, Rational};
}

// Re-export commonly used types at crate root
pub use error::{LagrangeError, LagrangeResult};
pub use lagrange_math::{Polynomial, Rational};
pub use types::{Date, DateSeries, DatedSample};
