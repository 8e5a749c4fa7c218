// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Planar city coordinates and Euclidean cost matrices.

use crate::matrix::{CostMatrix, MatrixError};

/// A city location in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the straight-line distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl CostMatrix<f64> {
    /// Builds the symmetric Euclidean distance matrix of `points`.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::Empty` for no points and
    /// `MatrixError::NonFiniteCost` if a coordinate is not finite or two
    /// points are so far apart that their distance overflows.
    pub fn from_points(points: &[Point]) -> Result<Self, MatrixError> {
        let n = points.len();
        let mut costs = vec![0.0; n * n];
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let d = a.distance(b);
                costs[i * n + j] = d;
                costs[j * n + i] = d;
            }
        }

        CostMatrix::from_flat(n, costs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CityIndex;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_from_points_is_symmetric() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(-3.0, 4.0),
        ];
        let m = CostMatrix::from_points(&points).unwrap();
        assert_eq!(m.num_cities(), 3);
        assert!(m.is_symmetric());
        assert_eq!(m.cost(CityIndex::new(0), CityIndex::new(1)), 5.0);
        assert_eq!(m.cost(CityIndex::new(1), CityIndex::new(2)), 6.0);
        assert_eq!(m.cost(CityIndex::new(2), CityIndex::new(2)), 0.0);
    }

    #[test]
    fn test_from_points_rejects_empty_and_non_finite() {
        assert_eq!(CostMatrix::from_points(&[]), Err(MatrixError::Empty));

        let points = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert_eq!(
            CostMatrix::from_points(&points),
            Err(MatrixError::NonFiniteCost { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_point_display_and_conversion() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
        assert_eq!(format!("{}", p), "(1.5, -2)");
        assert!(p.is_finite());
        assert!(!Point::new(f64::INFINITY, 0.0).is_finite());
    }
}
