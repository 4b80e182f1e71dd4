//! # Lagrange Math
//!
//! Polynomial interpolation through sample points using the Lagrange method.
//!
//! This crate provides:
//!
//! - **Rationals**: Exact [`Rational`] values parsed from integer, decimal,
//!   scientific, and `p/q` text
//! - **Point Sets**: Validated [`PointSet`]s with distinct abscissae
//! - **Polynomials**: Canonical-form [`Polynomial`]s over the rationals
//! - **Interpolation**: Exact symbolic construction and fast `f64` evaluation
//! - **Rendering**: Plain and LaTeX polynomial notation
//!
//! ## Example
//!
//! ```rust
//! use lagrange_math::prelude::*;
//!
//! let points = PointSet::from_text([("0", "1"), ("1", "2"), ("2", "5")]).unwrap();
//! let poly = build_polynomial(&points).unwrap();
//!
//! assert_eq!(render(&poly), "x^2 + x + 1");
//! assert_eq!(poly.evaluate(&parse_rational("3").unwrap()).to_string(), "13");
//! ```
//!
//! ## Design Philosophy
//!
//! - **Exactness**: Symbolic results never pass through floating point
//! - **Canonical Form**: Equal polynomials compare equal structurally
//! - **Validate Once**: A [`PointSet`] guarantees a well-defined basis

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
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unused_self)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod points;
pub mod polynomial;
pub mod rational;
pub mod render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        build_polynomial, lagrange_evaluate, Interpolator, LagrangeInterpolator,
        SymbolicPolynomialBuilder,
    };
    pub use crate::points::{InterpolationPoint, PointSet};
    pub use crate::polynomial::Polynomial;
    pub use crate::rational::{parse_rational, Rational};
    pub use crate::render::{render, render_latex, Notation, PolynomialRenderer};
}

pub use error::{MathError, MathResult};
pub use points::{InterpolationPoint, PointSet};
pub use polynomial::Polynomial;
pub use rational::Rational;
