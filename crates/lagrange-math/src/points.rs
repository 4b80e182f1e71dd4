//! Validated sets of exact interpolation points.

use std::collections::HashSet;

use crate::error::{MathError, MathResult};
use crate::rational::{parse_rational, Rational};

/// A single `(x, y)` sample with exact coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterpolationPoint {
    /// Abscissa.
    pub x: Rational,
    /// Ordinate.
    pub y: Rational,
}

impl InterpolationPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }
}

/// A non-empty set of points with pairwise distinct abscissae.
///
/// Holding a `PointSet` guarantees every Lagrange denominator
/// `Π (x_i - x_j)` is nonzero.
///
/// # Example
///
/// ```rust
/// use lagrange_math::points::PointSet;
///
/// let points = PointSet::from_text([("0", "1"), ("1/2", "2"), ("1.5", "5")]).unwrap();
/// assert_eq!(points.len(), 3);
///
/// assert!(PointSet::from_text([("1", "1"), ("1.0", "2")]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<InterpolationPoint>,
}

impl PointSet {
    /// Validates already-exact points.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::EmptyPointSet`] when `points` is empty and
    /// [`MathError::DuplicateAbscissa`] when two points share an x-value.
    pub fn new(points: Vec<InterpolationPoint>) -> MathResult<Self> {
        if points.is_empty() {
            return Err(MathError::EmptyPointSet);
        }

        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(&point.x) {
                return Err(MathError::duplicate_abscissa(&point.x));
            }
        }

        Ok(Self { points })
    }

    /// Parses and validates textual `(x, y)` pairs.
    ///
    /// Every token is parsed before distinctness is checked, so a malformed
    /// token is always reported ahead of a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ParseError`] naming the first unparsable token,
    /// then the same errors as [`PointSet::new`].
    pub fn from_text<I, X, Y>(pairs: I) -> MathResult<Self>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: AsRef<str>,
        Y: AsRef<str>,
    {
        let points = pairs
            .into_iter()
            .map(|(x, y)| {
                Ok(InterpolationPoint::new(
                    parse_rational(x.as_ref())?,
                    parse_rational(y.as_ref())?,
                ))
            })
            .collect::<MathResult<Vec<_>>>()?;

        Self::new(points)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a `PointSet` holds at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in input order.
    #[must_use]
    pub fn points(&self) -> &[InterpolationPoint] {
        &self.points
    }

    /// Iterates over the points in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, InterpolationPoint> {
        self.points.iter()
    }

    /// Returns the abscissae in input order.
    #[must_use]
    pub fn xs(&self) -> Vec<Rational> {
        self.points.iter().map(|p| p.x.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a InterpolationPoint;
    type IntoIter = std::slice::Iter<'a, InterpolationPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
