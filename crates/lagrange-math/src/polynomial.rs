//! Single-variable polynomials over exact rationals.
//!
//! [`Polynomial`] is kept in canonical form at all times: one entry per
//! exponent, every coefficient nonzero and in lowest terms. Two polynomials
//! are therefore equal exactly when their term maps are equal.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::rational::{to_f64, Rational};
use crate::render;

/// A polynomial in one variable with rational coefficients.
///
/// # Example
///
/// ```rust
/// use lagrange_math::polynomial::Polynomial;
/// use lagrange_math::rational::Rational;
///
/// // x^2 + x + 1
/// let p = Polynomial::from_coefficients(vec![
///     Rational::from_integer(1.into()),
///     Rational::from_integer(1.into()),
///     Rational::from_integer(1.into()),
/// ]);
/// assert_eq!(p.degree(), Some(2));
/// assert_eq!(p.evaluate(&Rational::from_integer(3.into())), Rational::from_integer(13.into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    terms: BTreeMap<usize, Rational>,
}

impl Polynomial {
    /// Returns the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::monomial(c, 0)
    }

    /// Returns `coefficient * x^exponent`.
    #[must_use]
    pub fn monomial(coefficient: Rational, exponent: usize) -> Self {
        let mut poly = Self::zero();
        poly.add_term(exponent, coefficient);
        poly
    }

    /// Builds a polynomial from dense coefficients in ascending exponent order.
    ///
    /// `coefficients[k]` is the coefficient of `x^k`; zeros are dropped.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec<Rational>) -> Self {
        let mut poly = Self::zero();
        for (exponent, coefficient) in coefficients.into_iter().enumerate() {
            poly.add_term(exponent, coefficient);
        }
        poly
    }

    /// Builds the monic polynomial `(x - r_0)(x - r_1)...(x - r_{n-1})`.
    #[must_use]
    pub fn from_roots(roots: &[Rational]) -> Self {
        Self::from_coefficients(expand_roots(roots))
    }

    /// Adds `coefficient * x^exponent`, keeping the canonical form.
    fn add_term(&mut self, exponent: usize, coefficient: Rational) {
        if coefficient.is_zero() {
            return;
        }
        let entry = self.terms.entry(exponent).or_insert_with(Rational::zero);
        *entry += coefficient;
        if entry.is_zero() {
            self.terms.remove(&exponent);
        }
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient of `x^exponent` (zero when absent).
    #[must_use]
    pub fn coefficient(&self, exponent: usize) -> Rational {
        self.terms
            .get(&exponent)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    /// Returns the coefficient of the highest-degree term.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<&Rational> {
        self.terms.values().next_back()
    }

    /// Iterates over the nonzero terms as `(exponent, coefficient)` in
    /// ascending exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (usize, &Rational)> + '_ {
        self.terms.iter().map(|(k, c)| (*k, c))
    }

    /// Returns the number of nonzero terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns dense coefficients in ascending exponent order.
    ///
    /// The zero polynomial yields an empty vector.
    #[must_use]
    pub fn to_coefficients(&self) -> Vec<Rational> {
        match self.degree() {
            None => Vec::new(),
            Some(d) => (0..=d).map(|k| self.coefficient(k)).collect(),
        }
    }

    /// Evaluates the polynomial exactly at `x` using Horner's scheme.
    #[must_use]
    pub fn evaluate(&self, x: &Rational) -> Rational {
        let mut acc = Rational::zero();
        let mut prev = match self.degree() {
            Some(d) => d,
            None => return acc,
        };

        for (exponent, coefficient) in self.terms().rev() {
            acc = acc * num_traits::pow(x.clone(), prev - exponent) + coefficient;
            prev = exponent;
        }

        acc * num_traits::pow(x.clone(), prev)
    }

    /// Evaluates the polynomial in floating point.
    #[must_use]
    pub fn evaluate_f64(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        let mut prev = match self.degree() {
            Some(d) => d,
            None => return acc,
        };

        for (exponent, coefficient) in self.terms().rev() {
            acc = acc * x.powi((prev - exponent) as i32) + to_f64(coefficient);
            prev = exponent;
        }

        acc * x.powi(prev as i32)
    }

    /// Returns the first derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let mut result = Self::zero();
        for (exponent, coefficient) in self.terms().filter(|(k, _)| *k > 0) {
            let factor = Rational::from_integer(exponent.into());
            result.add_term(exponent - 1, coefficient * factor);
        }
        result
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(k, c)| (*k, c * factor))
                .collect(),
        }
    }
}

/// Expands `Π (x - r_j)` into dense ascending coefficients.
///
/// The result always has `roots.len() + 1` entries and a leading one.
pub(crate) fn expand_roots(roots: &[Rational]) -> Vec<Rational> {
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(Rational::one());

    for root in roots {
        // Multiply by (x - root): shift up, then subtract root * previous.
        coeffs.push(Rational::zero());
        for k in (0..coeffs.len()).rev() {
            let lower = if k == 0 {
                Rational::zero()
            } else {
                coeffs[k - 1].clone()
            };
            coeffs[k] = lower - root * &coeffs[k];
        }
    }

    coeffs
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        for (exponent, coefficient) in rhs.terms() {
            self.add_term(exponent, coefficient.clone());
        }
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|(k, c)| (*k, -c)).collect(),
        }
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut result = Polynomial::zero();
        for (i, a) in self.terms() {
            for (j, b) in rhs.terms() {
                result.add_term(i + j, a * b);
            }
        }
        result
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}
