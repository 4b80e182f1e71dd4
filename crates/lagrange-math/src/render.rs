//! Human-readable forms of a [`Polynomial`].
//!
//! Terms are written in descending exponent order, zero terms are never
//! shown, and a unit coefficient is elided except on the constant term.

use num_traits::{One, Signed};

use crate::polynomial::Polynomial;
use crate::rational::{is_integer, Rational};

/// Output notation for rendered polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Plain ASCII, e.g. `-3/2*x^2 + x - 4`.
    #[default]
    Plain,
    /// LaTeX math mode, e.g. `- \frac{3}{2} x^{2} + x - 4`.
    Latex,
}

/// Renders polynomials in a chosen notation and variable name.
#[derive(Debug, Clone)]
pub struct PolynomialRenderer {
    notation: Notation,
    variable: String,
}

impl Default for PolynomialRenderer {
    fn default() -> Self {
        Self {
            notation: Notation::Plain,
            variable: "x".to_string(),
        }
    }
}

impl PolynomialRenderer {
    /// Creates a renderer for the given notation using the variable `x`.
    #[must_use]
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            ..Self::default()
        }
    }

    /// Sets the variable name.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Renders the polynomial.
    #[must_use]
    pub fn render(&self, poly: &Polynomial) -> String {
        if poly.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (i, (exponent, coefficient)) in poly.terms().rev().enumerate() {
            let negative = coefficient.is_negative();
            match (i, negative) {
                (0, true) => out.push_str(self.leading_minus()),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            out.push_str(&self.term(exponent, &coefficient.abs()));
        }
        out
    }

    fn leading_minus(&self) -> &'static str {
        match self.notation {
            Notation::Plain => "-",
            Notation::Latex => "- ",
        }
    }

    fn term(&self, exponent: usize, magnitude: &Rational) -> String {
        let power = match (exponent, self.notation) {
            (0, _) => String::new(),
            (1, _) => self.variable.clone(),
            (k, Notation::Plain) => format!("{}^{k}", self.variable),
            (k, Notation::Latex) => format!("{}^{{{k}}}", self.variable),
        };

        if power.is_empty() {
            return self.coefficient(magnitude);
        }
        if magnitude.is_one() {
            return power;
        }

        let coefficient = self.coefficient(magnitude);
        match self.notation {
            Notation::Plain => format!("{coefficient}*{power}"),
            Notation::Latex => format!("{coefficient} {power}"),
        }
    }

    fn coefficient(&self, magnitude: &Rational) -> String {
        match self.notation {
            Notation::Latex if !is_integer(magnitude) => {
                format!("\\frac{{{}}}{{{}}}", magnitude.numer(), magnitude.denom())
            }
            _ => magnitude.to_string(),
        }
    }
}

/// Renders a polynomial in plain notation with variable `x`.
#[must_use]
pub fn render(poly: &Polynomial) -> String {
    PolynomialRenderer::default().render(poly)
}

/// Renders a polynomial in LaTeX notation with variable `x`.
#[must_use]
pub fn render_latex(poly: &Polynomial) -> String {
    PolynomialRenderer::new(Notation::Latex).render(poly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn int(n: i64) -> Rational {
        Rational::from_integer(BigInt::from(n))
    }

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_render_plain() {
        let p = Polynomial::from_coefficients(vec![int(1), int(1), int(1)]);
        assert_eq!(render(&p), "x^2 + x + 1");

        let q = Polynomial::from_coefficients(vec![ratio(-7, 4), int(3), int(0), ratio(-1, 2)]);
        assert_eq!(render(&q), "-1/2*x^3 + 3*x - 7/4");
    }

    #[test]
    fn test_unit_constant_kept() {
        assert_eq!(render(&Polynomial::constant(int(1))), "1");
        assert_eq!(render(&Polynomial::constant(int(-1))), "-1");
        assert_eq!(
            render(&Polynomial::from_coefficients(vec![int(-1), int(-1)])),
            "-x - 1"
        );
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(render(&Polynomial::zero()), "0");
        assert_eq!(render_latex(&Polynomial::zero()), "0");
    }

    #[test]
    fn test_render_latex() {
        let p = Polynomial::from_coefficients(vec![int(-1), ratio(3, 2)]);
        assert_eq!(render_latex(&p), "\\frac{3}{2} x - 1");

        let q = &Polynomial::monomial(int(2), 10) + &Polynomial::monomial(ratio(-1, 3), 2);
        assert_eq!(render_latex(&q), "2 x^{10} - \\frac{1}{3} x^{2}");

        let r = Polynomial::monomial(int(-1), 2);
        assert_eq!(render_latex(&r), "- x^{2}");
    }

    #[test]
    fn test_custom_variable() {
        let p = Polynomial::from_coefficients(vec![int(0), int(2), int(1)]);
        let renderer = PolynomialRenderer::default().with_variable("t");
        assert_eq!(renderer.render(&p), "t^2 + 2*t");
    }
}
