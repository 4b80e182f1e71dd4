//! Exact construction of the Lagrange interpolating polynomial.

use num_traits::Zero;
use tracing::debug;

use crate::error::{MathError, MathResult};
use crate::points::PointSet;
use crate::polynomial::{expand_roots, Polynomial};
use crate::rational::Rational;

/// Builds the unique interpolating polynomial of degree `<= n - 1`.
///
/// For each point the basis numerator `N_i(x) = Π_{j≠i} (x - x_j)` is
/// obtained by dividing the master polynomial `M(x) = Π_j (x - x_j)` by
/// `(x - x_i)`, so the whole build costs O(n²) rational operations. Each
/// term `(y_i / D_i) · N_i(x)`, with `D_i = Π_{j≠i} (x_i - x_j)`, is added
/// coefficient-wise and the sum is returned in canonical form.
///
/// With the `parallel` feature the per-point terms are computed on the
/// rayon thread pool before the final sum.
///
/// # Example
///
/// ```rust
/// use lagrange_math::interpolation::SymbolicPolynomialBuilder;
/// use lagrange_math::points::PointSet;
///
/// let points = PointSet::from_text([("0", "1"), ("1", "2"), ("2", "5")]).unwrap();
/// let poly = SymbolicPolynomialBuilder::new().build(&points).unwrap();
/// assert_eq!(poly.to_string(), "x^2 + x + 1");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolicPolynomialBuilder;

impl SymbolicPolynomialBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Builds the interpolating polynomial through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DuplicateAbscissa`] if a basis denominator is
    /// zero. A validated [`PointSet`] never triggers this.
    pub fn build(&self, points: &PointSet) -> MathResult<Polynomial> {
        let n = points.len();
        if n == 1 {
            return Ok(Polynomial::constant(points.points()[0].y.clone()));
        }

        let xs = points.xs();
        let master = expand_roots(&xs);

        let terms = self.basis_terms(points, &master)?;

        let mut sum = vec![Rational::zero(); n];
        for term in terms {
            for (acc, c) in sum.iter_mut().zip(term) {
                *acc += c;
            }
        }

        let poly = Polynomial::from_coefficients(sum);
        debug!(
            points = n,
            degree = ?poly.degree(),
            terms = poly.term_count(),
            "built interpolating polynomial"
        );
        Ok(poly)
    }

    #[cfg(not(feature = "parallel"))]
    fn basis_terms(
        &self,
        points: &PointSet,
        master: &[Rational],
    ) -> MathResult<Vec<Vec<Rational>>> {
        (0..points.len())
            .map(|i| basis_term(points, master, i))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn basis_terms(
        &self,
        points: &PointSet,
        master: &[Rational],
    ) -> MathResult<Vec<Vec<Rational>>> {
        use rayon::prelude::*;

        (0..points.len())
            .into_par_iter()
            .map(|i| basis_term(points, master, i))
            .collect()
    }
}

/// Returns the dense coefficients of `(y_i / D_i) · N_i(x)`.
fn basis_term(points: &PointSet, master: &[Rational], i: usize) -> MathResult<Vec<Rational>> {
    let nodes = points.points();
    let x_i = &nodes[i].x;

    let mut denominator = Rational::from_integer(1.into());
    for (j, node) in nodes.iter().enumerate() {
        if j != i {
            denominator *= x_i - &node.x;
        }
    }
    if denominator.is_zero() {
        return Err(MathError::duplicate_abscissa(x_i));
    }

    let scale = &nodes[i].y / denominator;
    Ok(divide_by_root(master, x_i)
        .into_iter()
        .map(|c| c * &scale)
        .collect())
}

/// Divides a dense ascending polynomial by `(x - root)`.
///
/// The caller guarantees `root` is a root, so the remainder is dropped.
fn divide_by_root(coeffs: &[Rational], root: &Rational) -> Vec<Rational> {
    let degree = coeffs.len() - 1;
    let mut quotient = vec![Rational::zero(); degree];
    let mut carry = Rational::zero();
    for k in (1..=degree).rev() {
        carry = &coeffs[k] + root * &carry;
        quotient[k - 1] = carry.clone();
    }
    quotient
}

/// Builds the interpolating polynomial through a validated point set.
///
/// Convenience wrapper around [`SymbolicPolynomialBuilder::build`].
pub fn build_polynomial(points: &PointSet) -> MathResult<Polynomial> {
    SymbolicPolynomialBuilder::new().build(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::InterpolationPoint;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    fn int(n: i64) -> Rational {
        Rational::from_integer(BigInt::from(n))
    }

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d))
    }

    fn points(pairs: &[(i64, i64)]) -> PointSet {
        PointSet::new(
            pairs
                .iter()
                .map(|&(x, y)| InterpolationPoint::new(int(x), int(y)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_quadratic_example() {
        let poly = build_polynomial(&points(&[(0, 1), (1, 2), (2, 5)])).unwrap();
        assert_eq!(poly, Polynomial::from_coefficients(vec![int(1), int(1), int(1)]));
        assert_eq!(poly.evaluate(&int(3)), int(13));
    }

    #[test]
    fn test_single_point_is_constant() {
        let poly = build_polynomial(&points(&[(4, -7)])).unwrap();
        assert_eq!(poly.degree(), Some(0));
        assert_eq!(poly.evaluate(&int(100)), int(-7));
    }

    #[test]
    fn test_collinear_points_reduce_degree() {
        // Three points on y = 2x + 1: degree collapses to 1
        let poly = build_polynomial(&points(&[(0, 1), (5, 11), (-3, -5)])).unwrap();
        assert_eq!(poly.degree(), Some(1));
        assert_eq!(poly.to_string(), "2*x + 1");
    }

    #[test]
    fn test_all_zero_ordinates() {
        let poly = build_polynomial(&points(&[(1, 0), (2, 0), (3, 0)])).unwrap();
        assert!(poly.is_zero());
        assert_eq!(poly.degree(), None);
    }

    #[test]
    fn test_rational_points() {
        let set = PointSet::from_text([("1/2", "1/3"), ("3/4", "0"), ("-1", "2.5")]).unwrap();
        let poly = build_polynomial(&set).unwrap();
        for p in &set {
            assert_eq!(poly.evaluate(&p.x), p.y);
        }
        assert_eq!(poly.evaluate(&ratio(1, 2)), ratio(1, 3));
    }

    #[test]
    fn test_cubic_recovered() {
        // 2x^3 + 5
        let poly = build_polynomial(&points(&[(0, 5), (1, 7), (2, 21), (3, 59)])).unwrap();
        assert_eq!(
            poly.to_coefficients(),
            vec![int(5), int(0), int(0), int(2)]
        );
    }

    #[test]
    fn test_divide_by_root() {
        // (x^2 - 3x + 2) / (x - 1) = x - 2
        let q = divide_by_root(&[int(2), int(-3), int(1)], &int(1));
        assert_eq!(q, vec![int(-2), int(1)]);
    }

    fn distinct_points() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::btree_map(-25i64..25, -100i64..100, 1..8)
            .prop_map(|m| m.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_passes_through_every_point(pairs in distinct_points()) {
            let poly = build_polynomial(&points(&pairs)).unwrap();
            for &(x, y) in &pairs {
                prop_assert_eq!(poly.evaluate(&int(x)), int(y));
            }
            let max_degree = pairs.len() - 1;
            prop_assert!(poly.degree().map_or(true, |d| d <= max_degree));
        }

        #[test]
        fn prop_order_invariant(pairs in distinct_points(), rotate in 0usize..8) {
            let original = build_polynomial(&points(&pairs)).unwrap();

            let mut reordered = pairs.clone();
            reordered.reverse();
            let k = rotate % reordered.len();
            reordered.rotate_left(k);

            prop_assert_eq!(original, build_polynomial(&points(&reordered)).unwrap());
        }
    }
}
