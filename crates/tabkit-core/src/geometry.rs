//! Planar vector math
//!
//! [`Point`] doubles as a position and a displacement in the drawing plane.
//! Units are millimetres throughout; there is no other coordinate system.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::{GeometryError, GeometryResult};

/// Lengths below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// A 2D point or vector in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when treated as a vector
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Unit vector in the same direction.
    ///
    /// Fails for vectors shorter than [`EPSILON`] since they have no direction.
    pub fn normalized(&self) -> GeometryResult<Point> {
        let len = self.length();
        if !len.is_finite() || len < EPSILON {
            return Err(GeometryError::ZeroLengthEdge {
                x: self.x,
                y: self.y,
            });
        }
        Ok(*self / len)
    }

    /// Rotate a quarter turn counter-clockwise: `(x, y) -> (-y, x)`
    pub fn rotate90(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        (*self + *other) / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(2.0 * a, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -0.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_length_and_distance() {
        let p = Point::new(3.0, 4.0);
        assert!((p.length() - 5.0).abs() < 1e-12);
        assert!((Point::ORIGIN.distance_to(&p) - 5.0).abs() < 1e-12);
        assert_eq!(Point::ORIGIN.midpoint(&p), Point::new(1.5, 2.0));
    }

    #[test]
    fn test_normalized() {
        let unit = Point::new(0.0, 8.0).normalized().unwrap();
        assert!(unit.approx_eq(&Point::new(0.0, 1.0), 1e-12));

        let err = Point::ORIGIN.normalized().unwrap_err();
        assert!(matches!(err, GeometryError::ZeroLengthEdge { .. }));
    }

    #[test]
    fn test_rotate90_is_counter_clockwise() {
        let east = Point::new(1.0, 0.0);
        assert_eq!(east.rotate90(), Point::new(-0.0, 1.0));
        assert!((east.cross(&east.rotate90()) - 1.0).abs() < 1e-12);
        assert_eq!(east.dot(&east.rotate90()), 0.0);
    }

    #[test]
    fn test_tuple_conversion() {
        let p: Point = (20.0, 84.0).into();
        assert_eq!(p, Point::new(20.0, 84.0));
        let t: (f64, f64) = p.into();
        assert_eq!(t, (20.0, 84.0));
    }
}
