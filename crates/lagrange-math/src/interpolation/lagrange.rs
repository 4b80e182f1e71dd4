//! Floating-point Lagrange evaluation.

use tracing::trace;

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Evaluates the Lagrange interpolant through `(x_data, y_data)` at `target_x`.
///
/// Computes `Σ y_i · Π_{j≠i} (t - x_j) / (x_i - x_j)` directly; no
/// coefficients are formed. The result carries full `f64` precision.
///
/// # Errors
///
/// - [`MathError::EmptyInput`] if `x_data` is empty
/// - [`MathError::InvalidInput`] if the lengths differ or a value is not finite
/// - [`MathError::DuplicateAbscissa`] if two x-values coincide
///
/// # Example
///
/// ```rust
/// use lagrange_math::interpolation::lagrange_evaluate;
///
/// // y = x^2 through three points
/// let y = lagrange_evaluate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], 3.0).unwrap();
/// assert!((y - 9.0).abs() < 1e-12);
/// ```
pub fn lagrange_evaluate(x_data: &[f64], y_data: &[f64], target_x: f64) -> MathResult<f64> {
    validate(x_data, y_data)?;
    if !target_x.is_finite() {
        return Err(MathError::invalid_input(format!(
            "target x must be finite, got {target_x}"
        )));
    }
    Ok(evaluate_unchecked(x_data, y_data, target_x))
}

fn validate(x_data: &[f64], y_data: &[f64]) -> MathResult<()> {
    if x_data.is_empty() {
        return Err(MathError::EmptyInput);
    }
    if x_data.len() != y_data.len() {
        return Err(MathError::invalid_input(format!(
            "x and y data must have same length: {} vs {}",
            x_data.len(),
            y_data.len()
        )));
    }
    if let Some(bad) = x_data.iter().chain(y_data).find(|v| !v.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "data values must be finite, got {bad}"
        )));
    }

    for i in 0..x_data.len() {
        for j in (i + 1)..x_data.len() {
            if x_data[i] == x_data[j] {
                return Err(MathError::duplicate_abscissa(x_data[i]));
            }
        }
    }
    Ok(())
}

fn evaluate_unchecked(x_data: &[f64], y_data: &[f64], target_x: f64) -> f64 {
    let mut result = 0.0;
    for (i, (&x_i, &y_i)) in x_data.iter().zip(y_data).enumerate() {
        let mut numerator = 1.0;
        let mut denominator = 1.0;
        for (j, &x_j) in x_data.iter().enumerate() {
            if i != j {
                numerator *= target_x - x_j;
                denominator *= x_i - x_j;
            }
        }
        result += y_i * numerator / denominator;
    }
    trace!(n = x_data.len(), target_x, result, "lagrange evaluation");
    result
}

/// Global Lagrange interpolant over a fixed floating-point series.
///
/// Unlike piecewise interpolators the polynomial is defined everywhere, so
/// extrapolation is always allowed.
///
/// # Example
///
/// ```rust
/// use lagrange_math::interpolation::{Interpolator, LagrangeInterpolator};
///
/// let interp = LagrangeInterpolator::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 5.0]).unwrap();
/// let y = interp.interpolate(3.0).unwrap();
/// // x^2 + x + 1 at 3
/// assert!((y - 13.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    min_x: f64,
    max_x: f64,
}

impl LagrangeInterpolator {
    /// Creates a new Lagrange interpolator.
    ///
    /// The x values need not be sorted, only distinct.
    ///
    /// # Errors
    ///
    /// Same conditions as [`lagrange_evaluate`].
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate(&xs, &ys)?;
        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            xs,
            ys,
            min_x,
            max_x,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; construction rejects empty data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl Interpolator for LagrangeInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !x.is_finite() {
            return Err(MathError::invalid_input(format!(
                "target x must be finite, got {x}"
            )));
        }
        Ok(evaluate_unchecked(&self.xs, &self.ys, x))
    }

    fn allows_extrapolation(&self) -> bool {
        true
    }

    fn min_x(&self) -> f64 {
        self.min_x
    }

    fn max_x(&self) -> f64 {
        self.max_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_nodes() {
        let xs = vec![0.0, 31.0, 59.0, 90.0];
        let ys = vec![26.5850, 26.2703, 26.7617, 27.2878];

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(lagrange_evaluate(&xs, &ys, *x).unwrap(), *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reproduces_polynomial() {
        // 2x^3 + 5 is reproduced exactly by 4 nodes
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![5.0, 7.0, 21.0, 59.0];
        assert_relative_eq!(lagrange_evaluate(&xs, &ys, 1.5).unwrap(), 11.75, epsilon = 1e-10);
        assert_relative_eq!(lagrange_evaluate(&xs, &ys, -1.0).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_single_node_is_constant() {
        assert_relative_eq!(lagrange_evaluate(&[4.0], &[2.5], 100.0).unwrap(), 2.5);
    }

    #[test]
    fn test_unsorted_nodes() {
        let a = lagrange_evaluate(&[2.0, 0.0, 1.0], &[5.0, 1.0, 2.0], 3.0).unwrap();
        assert_relative_eq!(a, 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lagrange_evaluate(&[], &[], 1.0), Err(MathError::EmptyInput));
        assert!(LagrangeInterpolator::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_duplicate_abscissa() {
        let err = lagrange_evaluate(&[1.0, 2.0, 1.0], &[0.0, 0.0, 0.0], 1.5).unwrap_err();
        assert!(matches!(err, MathError::DuplicateAbscissa { .. }));
    }

    #[test]
    fn test_length_mismatch() {
        let err = lagrange_evaluate(&[1.0, 2.0], &[0.0], 1.5).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(lagrange_evaluate(&[1.0, f64::NAN], &[0.0, 1.0], 1.5).is_err());
        assert!(lagrange_evaluate(&[1.0, 2.0], &[0.0, 1.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_interpolator_range() {
        let interp = LagrangeInterpolator::new(vec![3.0, -1.0, 2.0], vec![0.0, 0.0, 0.0]).unwrap();
        assert_relative_eq!(interp.min_x(), -1.0);
        assert_relative_eq!(interp.max_x(), 3.0);
        assert_eq!(interp.len(), 3);
    }
}
