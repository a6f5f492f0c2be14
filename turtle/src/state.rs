// logo/turtle/src/state.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The authoritative kinematic state of the turtle.

use crate::error::{require_finite, TurtleError};
use logo_geometry::basic::point::Point2DF64;

const FULL_TURN: f64 = 360.0;

pub const DEFAULT_SPEED: f64 = 1.0;

/// Reduces any finite angle in degrees to `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let heading = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round tiny negative inputs up to exactly 360.
    if heading >= FULL_TURN {
        0.0
    } else {
        heading + 0.0
    }
}

/// Position, heading, pen and speed. Only the commander mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    position: Point2DF64,
    heading: f64,
    pen_down: bool,
    speed: f64,
}

impl TurtleState {
    pub fn new() -> TurtleState {
        TurtleState {
            position: Point2DF64::new(0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            speed: DEFAULT_SPEED,
        }
    }

    /// Builds a state from arbitrary starting values, normalizing the heading.
    pub fn with_values(
        position: Point2DF64,
        heading: f64,
        pen_down: bool,
        speed: f64,
    ) -> Result<TurtleState, TurtleError> {
        if !position.is_finite() {
            return Err(TurtleError::InvalidArgument(format!(
                "position must be finite, got {}",
                position
            )));
        }
        let mut state = TurtleState::new();
        state.position = position;
        state.set_heading(heading)?;
        state.set_pen_down(pen_down);
        state.set_speed(speed)?;
        Ok(state)
    }

    #[inline]
    pub fn position(&self) -> Point2DF64 {
        self.position
    }

    /// Degrees in `[0, 360)`, counter-clockwise from +x.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub(crate) fn set_position(&mut self, position: Point2DF64) {
        self.position = position;
    }

    pub(crate) fn set_heading(&mut self, degrees: f64) -> Result<(), TurtleError> {
        self.heading = normalize_heading(require_finite("heading", degrees)?);
        Ok(())
    }

    pub(crate) fn set_pen_down(&mut self, pen_down: bool) {
        self.pen_down = pen_down;
    }

    pub(crate) fn set_speed(&mut self, speed: f64) -> Result<(), TurtleError> {
        validate_speed(speed)?;
        self.speed = speed;
        Ok(())
    }
}

impl Default for TurtleState {
    fn default() -> TurtleState {
        TurtleState::new()
    }
}

pub(crate) fn validate_speed(speed: f64) -> Result<f64, TurtleError> {
    let speed = require_finite("speed", speed)?;
    if speed < 0.0 {
        return Err(TurtleError::InvalidArgument(format!(
            "speed must not be negative, got {}",
            speed
        )));
    }
    Ok(speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_canonical() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
        assert_eq!(normalize_heading(-1e-20), 0.0);
        assert!(normalize_heading(-0.0).is_sign_positive());
        for &degrees in &[1e15, -1e15, 123_456.789, -98_765.4321, 359.999_999_999] {
            let heading = normalize_heading(degrees);
            assert!(heading >= 0.0 && heading < 360.0, "{} -> {}", degrees, heading);
        }
    }

    #[test]
    fn negative_speed_leaves_state_unchanged() {
        let mut state = TurtleState::new();
        assert!(matches!(
            state.set_speed(-1.0),
            Err(TurtleError::InvalidArgument(_))
        ));
        assert!(state.set_speed(std::f64::INFINITY).is_err());
        assert_eq!(state.speed(), DEFAULT_SPEED);
        state.set_speed(0.0).unwrap();
        assert_eq!(state.speed(), 0.0);
    }

    #[test]
    fn with_values_validates() {
        let state = TurtleState::with_values(Point2DF64::new(1.0, 2.0), -45.0, false, 3.0).unwrap();
        assert_eq!(state.position(), Point2DF64::new(1.0, 2.0));
        assert_eq!(state.heading(), 315.0);
        assert!(!state.is_pen_down());
        assert_eq!(state.speed(), 3.0);

        assert!(TurtleState::with_values(Point2DF64::default(), 0.0, true, -2.0).is_err());
        assert!(TurtleState::with_values(Point2DF64::default(), std::f64::NAN, true, 1.0).is_err());
        assert!(
            TurtleState::with_values(Point2DF64::new(std::f64::NAN, 0.0), 0.0, true, 1.0).is_err()
        );
    }
}
