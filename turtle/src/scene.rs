// logo/turtle/src/scene.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A drawing scene: a commander fed from a queue of commands, one command per
//! acknowledgement, plus the strokes the pen left behind.

use crate::commander::{PendingChange, TurtleCommander};
use crate::error::TurtleError;
use crate::events::{ChangeKind, EventMask, SubscriptionId, TurtleEvent};
use crate::state::{TurtleState, DEFAULT_SPEED};
use logo_geometry::basic::line_segment::LineSegmentF64;
use logo_geometry::basic::point::Point2DF64;
use logo_geometry::basic::rect::RectF64;
use std::collections::VecDeque;
use tracing::{debug, info, warn};
use uturtle::ast::Command;

const DEMO_SIDE: f64 = 100.0;
const DEMO_TURN: f64 = 90.0;
const DEMO_SPEED: f64 = 4.0;

/// Starting conditions for the scene's turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneOptions {
    pub origin: Point2DF64,
    pub heading: f64,
    pub speed: f64,
    pub pen_down: bool,
}

impl Default for SceneOptions {
    fn default() -> SceneOptions {
        SceneOptions {
            origin: Point2DF64::new(0.0, 0.0),
            heading: 0.0,
            speed: DEFAULT_SPEED,
            pen_down: true,
        }
    }
}

/// Traces a square, speeds up, then walks the square back in reverse.
pub fn demonstration_script() -> Vec<Command> {
    let mut script = Vec::new();
    for _ in 0..4 {
        script.push(Command::MoveForward(DEMO_SIDE));
        script.push(Command::RotateRight(DEMO_TURN));
    }
    script.push(Command::SetSpeed(DEMO_SPEED));
    for _ in 0..4 {
        script.push(Command::RotateLeft(DEMO_TURN));
        script.push(Command::MoveBackward(DEMO_SIDE));
    }
    script
}

#[derive(Debug)]
pub struct DrawingScene {
    commander: TurtleCommander,
    queue: VecDeque<Command>,
    started: bool,
    in_flight_stroke: Option<LineSegmentF64>,
    drawing: Vec<LineSegmentF64>,
    bounds: RectF64,
    rejected: usize,
}

impl DrawingScene {
    /// A scene with default options, seeded with the demonstration script.
    pub fn new() -> DrawingScene {
        let commander = TurtleCommander::new();
        DrawingScene::from_commander(commander, demonstration_script())
    }

    pub fn with_script(
        options: SceneOptions,
        script: Vec<Command>,
    ) -> Result<DrawingScene, TurtleError> {
        let turtle = TurtleState::with_values(
            options.origin,
            options.heading,
            options.pen_down,
            options.speed,
        )?;
        Ok(DrawingScene::from_commander(
            TurtleCommander::with_state(turtle),
            script,
        ))
    }

    fn from_commander(commander: TurtleCommander, script: Vec<Command>) -> DrawingScene {
        let origin = commander.turtle().position();
        info!(commands = script.len(), "scene created");
        DrawingScene {
            commander,
            queue: script.into(),
            started: false,
            in_flight_stroke: None,
            drawing: Vec::new(),
            bounds: RectF64::from_points(origin, origin),
            rejected: 0,
        }
    }

    #[inline]
    pub fn commander(&self) -> &TurtleCommander {
        &self.commander
    }

    #[inline]
    pub fn turtle(&self) -> &TurtleState {
        self.commander.turtle()
    }

    pub fn subscribe<F>(&mut self, mask: EventMask, callback: F) -> SubscriptionId
    where
        F: FnMut(&TurtleEvent) + 'static,
    {
        self.commander.subscribe(mask, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.commander.unsubscribe(id)
    }

    /// Strokes committed so far, in drawing order.
    #[inline]
    pub fn drawing(&self) -> &[LineSegmentF64] {
        &self.drawing
    }

    /// Bounds of the start point and every committed stroke.
    #[inline]
    pub fn bounds(&self) -> RectF64 {
        self.bounds
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.started && self.queue.is_empty() && !self.commander.is_busy()
    }

    /// Dispatches the first queued command. Subscribe before calling this, or
    /// the first notification is missed.
    pub fn start(&mut self) -> Option<PendingChange> {
        if self.started {
            return self.commander.pending();
        }
        self.started = true;
        self.advance()
    }

    /// Appends a command; an idle, started scene dispatches it right away.
    pub fn enqueue(&mut self, command: Command) -> Option<PendingChange> {
        self.queue.push_back(command);
        if self.started && !self.commander.is_busy() {
            self.advance()
        } else {
            None
        }
    }

    pub fn notify_movement_performed(&mut self) -> Result<Option<PendingChange>, TurtleError> {
        self.relay(ChangeKind::Movement)
    }

    pub fn notify_rotation_performed(&mut self) -> Result<Option<PendingChange>, TurtleError> {
        self.relay(ChangeKind::Rotation)
    }

    pub fn notify_speed_updated_performed(
        &mut self,
    ) -> Result<Option<PendingChange>, TurtleError> {
        self.relay(ChangeKind::SpeedUpdate)
    }

    pub fn notify_pen_action_performed(&mut self) -> Result<Option<PendingChange>, TurtleError> {
        self.relay(ChangeKind::PenAction)
    }

    /// Acknowledges `change` and returns the next started change, if any.
    pub fn acknowledge(
        &mut self,
        change: PendingChange,
    ) -> Result<Option<PendingChange>, TurtleError> {
        self.commander.acknowledge(change)?;
        Ok(self.performed())
    }

    fn relay(&mut self, kind: ChangeKind) -> Result<Option<PendingChange>, TurtleError> {
        self.commander.acknowledge_kind(kind)?;
        Ok(self.performed())
    }

    fn performed(&mut self) -> Option<PendingChange> {
        if let Some(stroke) = self.in_flight_stroke.take() {
            self.bounds = self.bounds.union_segment(&stroke);
            self.drawing.push(stroke);
        }
        self.advance()
    }

    fn advance(&mut self) -> Option<PendingChange> {
        while let Some(command) = self.queue.pop_front() {
            let from = self.commander.turtle().position();
            match self.commander.execute(&command) {
                Ok(change) => {
                    if change.kind() == ChangeKind::Movement && self.commander.turtle().is_pen_down()
                    {
                        let to = self.commander.turtle().position();
                        self.in_flight_stroke = Some(LineSegmentF64::new(&from, &to));
                    }
                    return Some(change);
                }
                Err(TurtleError::ChangeInFlight(kind)) => {
                    // Someone else's change is on screen; retry on its acknowledgement.
                    debug!(%command, %kind, "dispatch deferred");
                    self.queue.push_front(command);
                    return None;
                }
                Err(error) => {
                    warn!(%command, %error, "command rejected");
                    self.rejected += 1;
                }
            }
        }
        debug!(strokes = self.drawing.len(), "script exhausted");
        None
    }
}

impl Default for DrawingScene {
    fn default() -> DrawingScene {
        DrawingScene::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demonstration_script_shape() {
        let script = demonstration_script();
        assert_eq!(script.len(), 17);
        assert_eq!(script[0], Command::MoveForward(100.0));
        assert_eq!(script[1], Command::RotateRight(90.0));
        assert_eq!(script[8], Command::SetSpeed(4.0));
        assert_eq!(script[9], Command::RotateLeft(90.0));
        assert_eq!(script[16], Command::MoveBackward(100.0));
    }

    #[test]
    fn nothing_dispatches_before_start() {
        let scene = DrawingScene::new();
        assert!(scene.commander().pending().is_none());
        assert_eq!(scene.remaining(), 17);
        assert!(!scene.is_finished());
    }

    #[test]
    fn start_is_idempotent() {
        let mut scene = DrawingScene::new();
        let first = scene.start();
        assert!(first.is_some());
        assert_eq!(scene.start(), first);
        assert_eq!(scene.remaining(), 16);
    }

    #[test]
    fn invalid_commands_are_skipped() {
        let mut scene = DrawingScene::with_script(
            SceneOptions::default(),
            vec![Command::SetSpeed(-1.0), Command::RotateLeft(45.0)],
        )
        .unwrap();
        let change = scene.start().unwrap();
        assert_eq!(change.kind(), ChangeKind::Rotation);
        assert_eq!(scene.rejected(), 1);
        assert_eq!(scene.turtle().speed(), DEFAULT_SPEED);
    }

    #[test]
    fn enqueue_on_idle_scene_dispatches() {
        let mut scene = DrawingScene::with_script(SceneOptions::default(), Vec::new()).unwrap();
        assert_eq!(scene.start(), None);
        assert!(scene.is_finished());

        let change = scene.enqueue(Command::MoveForward(5.0)).unwrap();
        assert_eq!(change.kind(), ChangeKind::Movement);
        assert!(scene.enqueue(Command::PenUp).is_none());
        assert_eq!(scene.remaining(), 1);
    }

    #[test]
    fn busy_commander_defers_the_script() {
        let mut scene = DrawingScene::new();
        let outside = scene.commander.rotate_left(1.0).unwrap();

        assert_eq!(scene.start(), None);
        assert_eq!(scene.rejected(), 0);
        assert_eq!(scene.remaining(), 17);
        assert!(!scene.is_finished());

        let first = scene.acknowledge(outside).unwrap().unwrap();
        assert_eq!(first.kind(), ChangeKind::Movement);
        assert_eq!(scene.remaining(), 16);
        assert_eq!(scene.rejected(), 0);
    }

    #[test]
    fn unsubscribe_through_the_scene() {
        let mut scene = DrawingScene::new();
        let id = scene.subscribe(EventMask::all(), |_| {});
        assert_eq!(scene.commander().subscriber_count(), 1);
        assert!(scene.unsubscribe(id));
        assert!(!scene.unsubscribe(id));
        assert_eq!(scene.commander().subscriber_count(), 0);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = SceneOptions {
            speed: -3.0,
            ..SceneOptions::default()
        };
        assert!(DrawingScene::with_script(options, demonstration_script()).is_err());
    }
}
