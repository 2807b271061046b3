//! Core value types: [`Coordinate`] and the tagged [`Slope`].

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use nalgebra::Vector2;

use crate::error::GeometryError;

/// A point in the plane.
///
/// Plain `Copy` data with value equality; operations return new values
/// instead of mutating. Components are stored without rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// View as a nalgebra column vector.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Element-wise division that rejects zero components.
    ///
    /// The `/` operator keeps IEEE-754 semantics (`±inf`/`NaN` on zero
    /// components); this variant fails with [`GeometryError::ZeroDivisor`]
    /// instead.
    #[inline]
    pub fn checked_div(self, rhs: Coordinate) -> Result<Coordinate, GeometryError> {
        if rhs.x == 0.0 || rhs.y == 0.0 {
            return Err(GeometryError::ZeroDivisor);
        }
        Ok(self / rhs)
    }
}

impl From<Vector2<f64>> for Coordinate {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Coordinate> for Vector2<f64> {
    #[inline]
    fn from(p: Coordinate) -> Self {
        p.to_vector()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on round values: `(1.0,2.0)`.
        write!(f, "({:?},{:?})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn mul(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Element-wise division. A zero component in `rhs` follows IEEE-754 and
/// yields `±inf` or `NaN`; use [`Coordinate::checked_div`] to fail loudly.
impl Div for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn div(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Slope of a line through two points.
///
/// Vertical lines get their own variant so downstream logic (reflection,
/// intersection) pattern-matches explicitly instead of comparing against
/// IEEE infinity. `Vertical == Vertical` holds, which makes the parallel
/// check in [`super::line_intersection`] a plain equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical)
    }

    /// The finite slope value, if any.
    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            Slope::Finite(m) => Some(m),
            Slope::Vertical => None,
        }
    }

    /// Numeric view; `Vertical` maps to `f64::INFINITY`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Slope::Finite(m) => m,
            Slope::Vertical => f64::INFINITY,
        }
    }

    /// Slope of a perpendicular line, `-1/m`, with the exact boundary
    /// mapping `Finite(0.0) ↔ Vertical`: a horizontal line has a vertical
    /// perpendicular and vice versa.
    pub fn perpendicular(self) -> Slope {
        match self {
            Slope::Vertical => Slope::Finite(0.0),
            Slope::Finite(m) if m == 0.0 => Slope::Vertical,
            Slope::Finite(m) => Slope::Finite(-1.0 / m),
        }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Finite(m) => write!(f, "{:?}", m),
            Slope::Vertical => write!(f, "vertical"),
        }
    }
}
