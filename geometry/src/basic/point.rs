// logo/geometry/src/basic/point.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An immutable two-dimensional point.

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Add, Sub};

/// A point (or vector) on the canvas. Fields are private so a point can only be
/// replaced, never edited in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2DF64 {
    x: f64,
    y: f64,
}

impl Point2DF64 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Point2DF64 {
        Point2DF64 { x, y }
    }

    /// The vector of the given length pointing `degrees` counter-clockwise from +x.
    #[inline]
    pub fn from_polar(length: f64, degrees: f64) -> Point2DF64 {
        let (s, c) = degrees.to_radians().sin_cos();
        Point2DF64::new(length * c, length * s)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_to(&self, other: Point2DF64) -> f64 {
        (other - *self).length()
    }

    #[inline]
    pub fn min(&self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(&self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison within `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: Point2DF64, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add<Point2DF64> for Point2DF64 {
    type Output = Point2DF64;
    #[inline]
    fn add(self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Point2DF64> for Point2DF64 {
    type Output = Point2DF64;
    #[inline]
    fn sub(self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(self.x - other.x, self.y - other.y)
    }
}

impl Display for Point2DF64 {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(formatter, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point2DF64;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn polar_axes() {
        assert!(Point2DF64::from_polar(10.0, 0.0).approx_eq(Point2DF64::new(10.0, 0.0), EPSILON));
        assert!(Point2DF64::from_polar(10.0, 90.0).approx_eq(Point2DF64::new(0.0, 10.0), EPSILON));
        assert!(Point2DF64::from_polar(10.0, 180.0).approx_eq(Point2DF64::new(-10.0, 0.0), EPSILON));
        assert!(Point2DF64::from_polar(-10.0, 270.0).approx_eq(Point2DF64::new(0.0, 10.0), EPSILON));
    }

    #[test]
    fn arithmetic() {
        let a = Point2DF64::new(1.0, 2.0);
        let b = Point2DF64::new(3.0, -4.0);
        assert_eq!(a + b, Point2DF64::new(4.0, -2.0));
        assert_eq!(a - b, Point2DF64::new(-2.0, 6.0));
        assert_eq!(b.length(), 5.0);
        assert_eq!(Point2DF64::default().distance_to(b), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(Point2DF64::new(1.0, -0.5).to_string(), "(1.000, -0.500)");
    }
}
