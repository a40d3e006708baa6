//! Planar geometry primitives
//!
//! Tolerance-aware scalar comparisons, a `Point` type doubling as a free
//! vector, and the fold `Line` with its side test and reflection.
//!
//! Every floating comparison in the workspace goes through [`approx_eq`] or
//! [`approx_le`]; raw `==` on coordinates is never used.

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::error::{FoldError, FoldResult};

/// Shared comparison tolerance.
pub const EPSILON: f64 = 1e-6;

/// `true` iff `|a - b| < EPSILON`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// `a <= b` with `EPSILON` slack.
#[inline]
pub fn approx_le(a: f64, b: f64) -> bool {
    b - a > -EPSILON
}

/// Whether `x` lies in `[lo, hi]`, boundaries included.
#[inline]
pub fn inside_interval(x: f64, lo: f64, hi: f64) -> bool {
    approx_le(lo, x) && approx_le(x, hi)
}

/// Tolerance-aware sign of a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classify `a`, treating anything within `EPSILON` of zero as `Zero`.
    pub fn of(a: f64) -> Self {
        if approx_eq(a, 0.0) {
            Sign::Zero
        } else if approx_le(a, 0.0) {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Negative => -1.0,
            Sign::Zero => 0.0,
            Sign::Positive => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate-wise comparison under `EPSILON`.
    pub fn approx_eq(&self, other: &Point) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Squared Euclidean distance; callers compare it against squared lengths.
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product `self.x * other.y - other.x * self.y`.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - other.x * self.y
    }

    fn scaled(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A fold line through two points.
///
/// Stores the implicit form `a*x + b*y + c = 0` used by [`Line::reflect`],
/// together with the anchor point and direction vector used by
/// [`Line::side_of`]. The half-plane to the left of the direction (positive
/// cross product) is the half that survives the fold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub anchor: Point,
    pub direction: Point,
}

impl Line {
    /// Build the line through `p` and `q`.
    ///
    /// Fails with [`FoldError::DegenerateLine`] when the points coincide,
    /// since the normal `(a, b)` would vanish.
    pub fn through(p: Point, q: Point) -> FoldResult<Self> {
        if p.approx_eq(&q) {
            return Err(FoldError::DegenerateLine { x: p.x, y: p.y });
        }
        let direction = q - p;
        let a = direction.y;
        let b = -direction.x;
        let c = -(a * p.x + b * p.y);
        Ok(Self {
            a,
            b,
            c,
            anchor: p,
            direction,
        })
    }

    /// Whether the normal `(a, b)` vanishes within `EPSILON`. Lines from
    /// [`Line::through`] never are; deserialized ones may be.
    pub fn is_degenerate(&self) -> bool {
        approx_eq(self.a, 0.0) && approx_eq(self.b, 0.0)
    }

    fn normal(&self) -> Point {
        Point::new(self.a, self.b)
    }

    /// Which side of the line `p` is on, relative to the direction vector.
    pub fn side_of(&self, p: Point) -> Sign {
        Sign::of(self.direction.cross(&(p - self.anchor)))
    }

    /// Mirror `p` across the line.
    ///
    /// The offset is `|a*x + b*y + c| / (a^2 + b^2)` applied along the
    /// non-unit normal `(a, b)`, which already yields the true perpendicular
    /// displacement. Points within `EPSILON` of the line map to themselves.
    pub fn reflect(&self, p: Point) -> Point {
        let normal = self.normal();
        let dist = (self.a * p.x + self.b * p.y + self.c).abs() / normal.dot(&normal);
        let side = Sign::of(normal.dot(&(p - self.anchor)));
        let n = normal.scaled(side.as_f64() * dist);
        p - n - n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_comparisons() {
        assert!(approx_eq(1.0, 1.0 + 5e-7));
        assert!(!approx_eq(1.0, 1.0 + 2e-6));
        assert!(approx_le(1.0, 1.0));
        assert!(approx_le(1.0 + 5e-7, 1.0));
        assert!(!approx_le(1.0 + 2e-6, 1.0));
    }

    #[test]
    fn test_sign() {
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-5e-7), Sign::Zero);
        assert_eq!(Sign::of(-0.5), Sign::Negative);
        assert_eq!(Sign::of(3.0), Sign::Positive);
    }

    #[test]
    fn test_inside_interval_is_inclusive() {
        assert!(inside_interval(0.0, 0.0, 10.0));
        assert!(inside_interval(10.0, 0.0, 10.0));
        assert!(inside_interval(10.0000005, 0.0, 10.0));
        assert!(!inside_interval(10.01, 0.0, 10.0));
        assert!(!inside_interval(-0.01, 0.0, 10.0));
    }

    #[test]
    fn test_vector_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.squared_distance(&b), 25.0);
        assert_eq!(a.dot(&b), 16.0);
        assert_eq!(a.cross(&b), -2.0);
        let d = b - a;
        assert!(d.approx_eq(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_line_coefficients() {
        let line = Line::through(Point::new(1.0, 1.0), Point::new(3.0, 2.0)).unwrap();
        assert_eq!(line.a, 1.0);
        assert_eq!(line.b, -2.0);
        assert_eq!(line.c, 1.0);
        // both defining points satisfy the implicit form
        for p in [Point::new(1.0, 1.0), Point::new(3.0, 2.0)] {
            assert!(approx_eq(line.a * p.x + line.b * p.y + line.c, 0.0));
        }
    }

    #[test]
    fn test_degenerate_line_rejected() {
        let p = Point::new(2.0, 2.0);
        assert_eq!(
            Line::through(p, p).unwrap_err(),
            FoldError::DegenerateLine { x: 2.0, y: 2.0 }
        );
        let line = Line::through(p, Point::new(3.0, 2.0)).unwrap();
        assert!(!line.is_degenerate());
    }

    #[test]
    fn test_side_of() {
        let line = Line::through(Point::new(5.0, 0.0), Point::new(5.0, 10.0)).unwrap();
        assert_eq!(line.side_of(Point::new(3.0, 5.0)), Sign::Positive);
        assert_eq!(line.side_of(Point::new(7.0, 5.0)), Sign::Negative);
        assert_eq!(line.side_of(Point::new(5.0, 42.0)), Sign::Zero);
    }

    #[test]
    fn test_reflect_vertical_line() {
        let line = Line::through(Point::new(5.0, 0.0), Point::new(5.0, 10.0)).unwrap();
        assert!(line.reflect(Point::new(7.0, 5.0)).approx_eq(&Point::new(3.0, 5.0)));
        assert!(line.reflect(Point::new(3.0, 1.0)).approx_eq(&Point::new(7.0, 1.0)));
    }

    #[test]
    fn test_reflect_diagonal_line() {
        let line = Line::through(Point::new(0.0, 0.0), Point::new(2.0, 2.0)).unwrap();
        assert!(line.reflect(Point::new(3.0, 1.0)).approx_eq(&Point::new(1.0, 3.0)));
        assert!(line.reflect(Point::new(-4.0, 0.0)).approx_eq(&Point::new(0.0, -4.0)));
    }

    #[test]
    fn test_reflect_point_on_line_is_fixed() {
        let line = Line::through(Point::new(0.0, 1.0), Point::new(4.0, 3.0)).unwrap();
        let p = Point::new(2.0, 2.0);
        assert!(line.reflect(p).approx_eq(&p));
    }
}
