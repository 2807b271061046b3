//! Two- and three-point metrics: distance, midpoint, slope, angles, area.

use nalgebra::Matrix2;

use super::types::{Coordinate, Slope};
use super::util::round3;

impl Coordinate {
    /// Euclidean distance to `other`, rounded to 3 decimals.
    ///
    /// Symmetric under endpoint swap; `distance(a, a) == 0.0`.
    pub fn distance(self, other: Coordinate) -> f64 {
        round3((other.to_vector() - self.to_vector()).norm())
    }

    /// Component-wise mean of the two points. Unrounded.
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Slope of the line through `self` and `other`.
    ///
    /// `Vertical` exactly when the x components are equal; otherwise the
    /// rise/run quotient rounded to 3 decimals.
    pub fn slope(self, other: Coordinate) -> Slope {
        if self.x == other.x {
            Slope::Vertical
        } else {
            Slope::Finite(round3((other.y - self.y) / (other.x - self.x)))
        }
    }

    /// Angle of the ray `self → other` against the positive x axis, in
    /// degrees within (−180, 180], rounded to 3 decimals.
    pub fn angle_with_positive_x(self, other: Coordinate) -> f64 {
        let d = other.to_vector() - self.to_vector();
        round3(d.y.atan2(d.x).to_degrees())
    }

    /// `90 − angle_with_positive_x`. Not range-normalized: rays into the
    /// third quadrant report values beyond 180.
    pub fn angle_with_positive_y(self, other: Coordinate) -> f64 {
        90.0 - self.angle_with_positive_x(other)
    }

    /// Move by `(dx, dy)`. Unrounded.
    pub fn translate(self, dx: f64, dy: f64) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Scale both components about the origin. Unrounded.
    pub fn scale(self, factor: f64) -> Coordinate {
        Coordinate::new(self.x * factor, self.y * factor)
    }

    /// Area of the triangle `self`, `b`, `c`: half the absolute determinant
    /// of the two edge vectors out of `self`. Unrounded; zero for collinear
    /// points.
    pub fn triangle_area(self, b: Coordinate, c: Coordinate) -> f64 {
        let ab = b.to_vector() - self.to_vector();
        let ac = c.to_vector() - self.to_vector();
        Matrix2::from_columns(&[ab, ac]).determinant().abs() / 2.0
    }
}
