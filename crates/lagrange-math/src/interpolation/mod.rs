//! Lagrange interpolation.
//!
//! Two flavours share the same basis formula
//! `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`:
//!
//! - [`LagrangeInterpolator`] / [`lagrange_evaluate`]: evaluates the
//!   interpolant at one target in `f64`, without forming coefficients.
//! - [`SymbolicPolynomialBuilder`]: builds the interpolating [`Polynomial`]
//!   exactly over the rationals.
//!
//! [`Polynomial`]: crate::polynomial::Polynomial

mod lagrange;
mod symbolic;

pub use lagrange::{lagrange_evaluate, LagrangeInterpolator};
pub use symbolic::{build_polynomial, SymbolicPolynomialBuilder};

use crate::error::MathResult;

/// Trait for numeric interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if evaluation outside `[min_x, max_x]` is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::PointSet;
    use crate::rational::to_f64;
    use approx::assert_relative_eq;

    // ============ Comparative Tests ============

    #[test]
    fn test_numeric_and_symbolic_agree() {
        let xs = vec![0.0, 0.5, 1.25, 2.0, 3.5];
        let ys = vec![1.0, -0.25, 2.5, 4.0, 0.75];

        let pairs: Vec<(String, String)> = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| (x.to_string(), y.to_string()))
            .collect();
        let points = PointSet::from_text(pairs).unwrap();
        let poly = build_polynomial(&points).unwrap();

        let numeric = LagrangeInterpolator::new(xs, ys).unwrap();
        for t in [-1.0, 0.1, 0.75, 1.9, 3.0, 4.2] {
            assert_relative_eq!(
                numeric.interpolate(t).unwrap(),
                poly.evaluate_f64(t),
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }

        for point in &points {
            assert_relative_eq!(
                numeric.interpolate(to_f64(&point.x)).unwrap(),
                to_f64(&point.y),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_trait_object_usage() {
        let interp: Box<dyn Interpolator> =
            Box::new(LagrangeInterpolator::new(vec![1.0, 2.0], vec![2.0, 4.0]).unwrap());
        assert!(interp.allows_extrapolation());
        assert!(interp.in_range(1.5));
        assert!(!interp.in_range(3.0));
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 6.0, epsilon = 1e-12);
    }
}
