// logo/geometry/src/basic/line_segment.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types, used for the strokes left behind by the turtle pen.

use crate::basic::point::Point2DF64;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegmentF64 {
    from: Point2DF64,
    to: Point2DF64,
}

impl LineSegmentF64 {
    #[inline]
    pub fn new(from: &Point2DF64, to: &Point2DF64) -> LineSegmentF64 {
        LineSegmentF64 {
            from: *from,
            to: *to,
        }
    }

    #[inline]
    pub fn from(&self) -> Point2DF64 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point2DF64 {
        self.to
    }

    #[inline]
    pub fn vector(&self) -> Point2DF64 {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }
}

#[test]
fn line_segment_length() {
    let segment = LineSegmentF64::new(&Point2DF64::new(1.0, 1.0), &Point2DF64::new(4.0, 5.0));
    assert_eq!(segment.vector(), Point2DF64::new(3.0, 4.0));
    assert_eq!(segment.length(), 5.0);
}
