// logo/geometry/src/basic/rect.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Axis-aligned rectangles.

use crate::basic::point::Point2DF64;
use crate::basic::line_segment::LineSegmentF64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF64 {
    min: Point2DF64,
    max: Point2DF64,
}

impl RectF64 {
    #[inline]
    pub fn from_points(a: Point2DF64, b: Point2DF64) -> RectF64 {
        RectF64 {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point2DF64 {
        self.min
    }

    #[inline]
    pub fn lower_right(&self) -> Point2DF64 {
        self.max
    }

    #[inline]
    pub fn size(&self) -> Point2DF64 {
        self.max - self.min
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size().x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size().y()
    }

    #[inline]
    pub fn union_point(&self, point: Point2DF64) -> RectF64 {
        RectF64 {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    #[inline]
    pub fn union_segment(&self, segment: &LineSegmentF64) -> RectF64 {
        self.union_point(segment.from()).union_point(segment.to())
    }
}

#[cfg(test)]
mod tests {
    use super::RectF64;
    use crate::basic::line_segment::LineSegmentF64;
    use crate::basic::point::Point2DF64;

    #[test]
    fn union_grows_bounds() {
        let rect = RectF64::from_points(Point2DF64::default(), Point2DF64::default())
            .union_point(Point2DF64::new(-2.0, 3.0))
            .union_segment(&LineSegmentF64::new(
                &Point2DF64::new(1.0, 1.0),
                &Point2DF64::new(5.0, -1.0),
            ));
        assert_eq!(rect.origin(), Point2DF64::new(-2.0, -1.0));
        assert_eq!(rect.lower_right(), Point2DF64::new(5.0, 3.0));
        assert_eq!(rect.width(), 7.0);
        assert_eq!(rect.height(), 4.0);
    }
}
