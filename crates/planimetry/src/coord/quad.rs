//! Quadrilateral metrics from four vertices in traversal order.

use super::types::Coordinate;
use super::util::round3;

impl Coordinate {
    /// Area of the quadrilateral `self, p2, p3, p4` by the generalized
    /// Heron form `sqrt((s−a)(s−b)(s−c)(s−d))` over the four consecutive
    /// side lengths, with `s` the semiperimeter. Rounded to 3 decimals.
    ///
    /// Known approximation: the formula is exact only for cyclic
    /// quadrilaterals (vertices on a common circle) and overestimates the
    /// area of every other quadrilateral. Side lengths enter at 3-decimal
    /// precision. A degenerate vertex ordering can push a factor negative,
    /// in which case the result is `NaN`.
    pub fn quadrilateral_area(self, p2: Coordinate, p3: Coordinate, p4: Coordinate) -> f64 {
        let a = self.distance(p2);
        let b = p2.distance(p3);
        let c = p3.distance(p4);
        let d = p4.distance(self);
        let s = (a + b + c + d) / 2.0;
        round3(((s - a) * (s - b) * (s - c) * (s - d)).sqrt())
    }

    /// Perimeter of the quadrilateral `self, p2, p3, p4`: the sum of the
    /// four consecutive side lengths, rounded to 3 decimals.
    pub fn quadrilateral_perimeter(self, p2: Coordinate, p3: Coordinate, p4: Coordinate) -> f64 {
        round3(self.distance(p2) + p2.distance(p3) + p3.distance(p4) + p4.distance(self))
    }
}
