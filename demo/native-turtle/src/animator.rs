// logo/demo/native-turtle/src/animator.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A headless stand-in for the view layer: it "animates" every started change
//! instantly, accounts for the time a real animation would have taken and
//! acknowledges the change so the scene moves on.

use logo_turtle::{normalize_heading, ChangeKind, DrawingScene, EventMask, TurtleError, TurtleEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::info;

/// Canvas units covered per second at speed 1.
pub const UNITS_PER_SECOND: f64 = 100.0;
/// Degrees turned per second at speed 1.
pub const DEGREES_PER_SECOND: f64 = 180.0;

#[derive(Debug)]
pub struct Playback {
    pub events: Vec<TurtleEvent>,
    pub elapsed: Duration,
}

/// How long the view layer would spend on `event` at `speed`. Speed zero
/// disables animation; times beyond what a `Duration` holds saturate.
pub fn transition_time(event: &TurtleEvent, speed: f64) -> Duration {
    let seconds = match *event {
        TurtleEvent::MovementStarted { old, new, .. } => old.distance_to(new) / UNITS_PER_SECOND,
        TurtleEvent::RotationStarted { old, new } => {
            let turn = normalize_heading(new - old);
            turn.min(360.0 - turn) / DEGREES_PER_SECOND
        }
        TurtleEvent::SpeedUpdateStarted { .. } | TurtleEvent::PenActionStarted { .. } => 0.0,
    };
    if speed <= 0.0 || seconds <= 0.0 {
        return Duration::from_secs(0);
    }
    Duration::try_from_secs_f64(seconds / speed).unwrap_or(Duration::MAX)
}

/// Runs the scene to completion, acknowledging each change as soon as it starts.
pub fn play(scene: &mut DrawingScene) -> Result<Playback, TurtleError> {
    let recorded = Rc::new(RefCell::new(Vec::new()));
    let sink = recorded.clone();
    let subscription = scene.subscribe(EventMask::all(), move |event| sink.borrow_mut().push(*event));

    let mut speed = scene.turtle().speed();
    let mut elapsed = Duration::from_secs(0);
    let mut next = scene.start();
    while let Some(change) = next {
        let last = recorded.borrow().last().copied();
        if let Some(event) = last {
            if let TurtleEvent::SpeedUpdateStarted { new, .. } = event {
                speed = new;
            }
            let time = transition_time(&event, speed);
            info!(id = change.id(), ?event, ?time, "animated");
            elapsed = elapsed.saturating_add(time);
        }
        next = match change.kind() {
            ChangeKind::Movement => scene.notify_movement_performed()?,
            ChangeKind::Rotation => scene.notify_rotation_performed()?,
            ChangeKind::SpeedUpdate => scene.notify_speed_updated_performed()?,
            ChangeKind::PenAction => scene.notify_pen_action_performed()?,
        };
    }

    scene.unsubscribe(subscription);
    let events = recorded.borrow().clone();
    Ok(Playback { events, elapsed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use logo_geometry::basic::point::Point2DF64;
    use logo_turtle::SceneOptions;

    #[test]
    fn transition_times() {
        let movement = TurtleEvent::MovementStarted {
            old: Point2DF64::new(0.0, 0.0),
            new: Point2DF64::new(0.0, 100.0),
            pen_down: true,
        };
        assert_eq!(transition_time(&movement, 1.0), Duration::from_secs(1));
        assert_eq!(transition_time(&movement, 4.0), Duration::from_millis(250));
        assert_eq!(transition_time(&movement, 0.0), Duration::from_secs(0));

        // The short way round: 350 -> 10 is a 20 degree turn.
        let rotation = TurtleEvent::RotationStarted { old: 350.0, new: 10.0 };
        let expected = Duration::from_secs_f64(20.0 / DEGREES_PER_SECOND);
        assert!(
            (transition_time(&rotation, 1.0).as_secs_f64() - expected.as_secs_f64()).abs() < 1e-9
        );

        let pen = TurtleEvent::PenActionStarted { old: true, new: false };
        assert_eq!(transition_time(&pen, 1.0), Duration::from_secs(0));
    }

    #[test]
    fn slow_turtles_saturate_instead_of_overflowing() {
        let movement = TurtleEvent::MovementStarted {
            old: Point2DF64::new(0.0, 0.0),
            new: Point2DF64::new(100.0, 0.0),
            pen_down: true,
        };
        assert_eq!(transition_time(&movement, 1e-300), Duration::MAX);

        let options = SceneOptions {
            speed: 1e-300,
            ..SceneOptions::default()
        };
        let script = uturtle::parse_commands("fd 100 rt 90 fd 100").unwrap();
        let mut scene = DrawingScene::with_script(options, script).unwrap();
        let playback = play(&mut scene).unwrap();
        assert!(scene.is_finished());
        assert_eq!(playback.events.len(), 3);
        assert_eq!(playback.elapsed, Duration::MAX);
    }

    #[test]
    fn plays_the_demonstration() {
        let mut scene = DrawingScene::new();
        let playback = play(&mut scene).unwrap();
        assert!(scene.is_finished());
        assert_eq!(playback.events.len(), 17);
        assert_eq!(scene.commander().subscriber_count(), 0);

        // Four sides and four turns at speed 1, then the same again at speed 4.
        let expected = 4.0 * (1.0 + 0.5) + 4.0 * (1.0 + 0.5) / 4.0;
        assert!((playback.elapsed.as_secs_f64() - expected).abs() < 1e-6);
    }

    #[test]
    fn events_serialize_as_tagged_json() {
        let event = TurtleEvent::RotationStarted { old: 0.0, new: 90.0 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "rotation_started");
        assert_eq!(json["new"], 90.0);
    }
}
