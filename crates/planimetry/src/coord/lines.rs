//! Line geometry built from slopes and intercepts.
//!
//! Purpose
//! - Reflection, intersection, point-line distance and the textual line
//!   equation, all expressed through [`Coordinate::slope`] and the tagged
//!   [`Slope`] sentinel.
//! - Degenerate inputs (a vertical line where a finite slope is required,
//!   parallel lines, a zero-length reference line) return
//!   [`GeometryError`] instead of inf/NaN-derived garbage.
//!
//! Code cross-refs: `types::{Coordinate, Slope}`, `error::GeometryError`.

use nalgebra::Matrix2;

use crate::error::GeometryError;

use super::types::{Coordinate, Slope};
use super::util::round3;

/// y-intercept of the line with slope `m` through `p`.
#[inline]
fn intercept(p: Coordinate, m: f64) -> f64 {
    p.y - m * p.x
}

/// Angle in degrees between two lines of finite slope.
///
/// `atan(|(m2 − m1) / (1 + m1·m2)|)`, rounded to 3 decimals. For
/// perpendicular slopes `1 + m1·m2` is zero, the quotient is infinite, and
/// the result is exactly `90.0`; that boundary is well-defined, not an
/// error.
pub fn angle_between_slopes(m1: f64, m2: f64) -> f64 {
    let tangent = ((m2 - m1) / (1.0 + m1 * m2)).abs();
    round3(tangent.atan().to_degrees())
}

/// Crossing point of the lines through `a1`–`a2` and `b1`–`b2`, with both
/// output components rounded to 3 decimals.
///
/// A vertical/finite pairing resolves exactly through the vertical line's
/// x component.
///
/// Errors
/// - [`GeometryError::CoincidentEndpoints`] if either point pair is a
///   single point.
/// - [`GeometryError::ParallelLines`] if the slopes compare equal,
///   including two vertical sentinels.
pub fn line_intersection(
    a1: Coordinate,
    a2: Coordinate,
    b1: Coordinate,
    b2: Coordinate,
) -> Result<Coordinate, GeometryError> {
    if a1 == a2 || b1 == b2 {
        return Err(GeometryError::CoincidentEndpoints);
    }
    let p = match (a1.slope(a2), b1.slope(b2)) {
        (Slope::Vertical, Slope::Vertical) => return Err(GeometryError::ParallelLines),
        (Slope::Finite(m1), Slope::Finite(m2)) if m1 == m2 => {
            return Err(GeometryError::ParallelLines)
        }
        (Slope::Vertical, Slope::Finite(m2)) => {
            let x = a1.x;
            Coordinate::new(x, m2 * x + intercept(b1, m2))
        }
        (Slope::Finite(m1), Slope::Vertical) => {
            let x = b1.x;
            Coordinate::new(x, m1 * x + intercept(a1, m1))
        }
        (Slope::Finite(m1), Slope::Finite(m2)) => {
            let c1 = intercept(a1, m1);
            let c2 = intercept(b1, m2);
            let x = (c2 - c1) / (m1 - m2);
            Coordinate::new(x, m1 * x + c1)
        }
    };
    Ok(Coordinate::new(round3(p.x), round3(p.y)))
}

impl Coordinate {
    /// Mirror image of `self` across the line through `line_start` and
    /// `line_end`, rounded to 3 decimals per component.
    ///
    /// The perpendicular through `self` comes from
    /// [`Slope::perpendicular`], so a horizontal reference line takes the
    /// vertical-perpendicular branch (foot directly above or below the
    /// point).
    ///
    /// Errors
    /// - [`GeometryError::CoincidentEndpoints`] if `line_start == line_end`.
    /// - [`GeometryError::VerticalLine`] if the reference line is vertical.
    pub fn reflect(
        self,
        line_start: Coordinate,
        line_end: Coordinate,
    ) -> Result<Coordinate, GeometryError> {
        if line_start == line_end {
            return Err(GeometryError::CoincidentEndpoints);
        }
        let m = match line_start.slope(line_end) {
            Slope::Vertical => return Err(GeometryError::VerticalLine),
            Slope::Finite(m) => m,
        };
        let c = intercept(line_start, m);
        let foot = match Slope::Finite(m).perpendicular() {
            Slope::Vertical => Coordinate::new(self.x, m * self.x + c),
            Slope::Finite(pm) => {
                let x = (intercept(self, pm) - c) / (m - pm);
                Coordinate::new(x, m * x + c)
            }
        };
        let mirrored = foot.scale(2.0) - self;
        Ok(Coordinate::new(round3(mirrored.x), round3(mirrored.y)))
    }

    /// Perpendicular distance from `self` to the infinite line through the
    /// two endpoints, rounded to 3 decimals.
    ///
    /// The numerator is the parallelogram area spanned by the line
    /// direction and the offset to the point; dividing by the line length
    /// leaves the height.
    ///
    /// Errors: [`GeometryError::CoincidentEndpoints`] for a zero-length
    /// reference line.
    pub fn distance_to_line(
        self,
        line_start: Coordinate,
        line_end: Coordinate,
    ) -> Result<f64, GeometryError> {
        if line_start == line_end {
            return Err(GeometryError::CoincidentEndpoints);
        }
        let d = line_end.to_vector() - line_start.to_vector();
        let offset = self.to_vector() - line_start.to_vector();
        let area = Matrix2::from_columns(&[d, offset]).determinant().abs();
        Ok(round3(area / d.norm()))
    }

    /// Slope-intercept equation of the line through `self` and `other`, as
    /// the exact text `y = {m}x + ({c})` with both numbers rounded to 3
    /// decimals and rendered with a decimal point (`"y = 1.0x + (0.0)"`).
    ///
    /// Errors: [`GeometryError::VerticalLine`] when the two x components
    /// are equal.
    pub fn line_equation(self, other: Coordinate) -> Result<String, GeometryError> {
        let m = match self.slope(other) {
            Slope::Vertical => return Err(GeometryError::VerticalLine),
            Slope::Finite(m) => m,
        };
        let c = round3(intercept(self, m));
        Ok(format!("y = {:?}x + ({:?})", m, c))
    }
}
