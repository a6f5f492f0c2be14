// logo/turtle/src/commander.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Applies turtle commands to a `TurtleState` and paces them with a
//! start/acknowledge protocol.
//!
//! Every successful mutator updates the state, notifies subscribers exactly
//! once and hands back a `PendingChange`. Until that change is acknowledged
//! (by the animator, once the transition is on screen) the commander refuses
//! further mutations with `TurtleError::ChangeInFlight`.

use crate::error::{require_finite, TurtleError};
use crate::events::{ChangeKind, EventMask, Subscribers, SubscriptionId, TurtleEvent};
use crate::state::{normalize_heading, validate_speed, TurtleState};
use logo_geometry::basic::point::Point2DF64;
use tracing::{debug, trace};
use uturtle::ast::Command;

/// Token for a started change that has not been acknowledged yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingChange {
    id: u64,
    kind: ChangeKind,
}

impl PendingChange {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }
}

#[derive(Debug)]
pub struct TurtleCommander {
    turtle: TurtleState,
    subscribers: Subscribers,
    pending: Option<PendingChange>,
    change_counter: u64,
}

impl TurtleCommander {
    pub fn new() -> TurtleCommander {
        TurtleCommander::with_state(TurtleState::new())
    }

    pub fn with_state(turtle: TurtleState) -> TurtleCommander {
        TurtleCommander {
            turtle,
            subscribers: Subscribers::new(),
            pending: None,
            change_counter: 0,
        }
    }

    #[inline]
    pub fn turtle(&self) -> &TurtleState {
        &self.turtle
    }

    #[inline]
    pub fn pending(&self) -> Option<PendingChange> {
        self.pending
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn subscribe<F>(&mut self, mask: EventMask, callback: F) -> SubscriptionId
    where
        F: FnMut(&TurtleEvent) + 'static,
    {
        self.subscribers.subscribe(mask, Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn execute(&mut self, command: &Command) -> Result<PendingChange, TurtleError> {
        debug!(%command, "executing");
        match *command {
            Command::MoveForward(distance) => self.move_forward(distance),
            Command::MoveBackward(distance) => self.move_backward(distance),
            Command::RotateLeft(degrees) => self.rotate_left(degrees),
            Command::RotateRight(degrees) => self.rotate_right(degrees),
            Command::SetSpeed(speed) => self.set_speed(speed),
            Command::PenUp => self.pen_up(),
            Command::PenDown => self.pen_down(),
            Command::TogglePen => self.toggle_pen(),
        }
    }

    pub fn move_forward(&mut self, distance: f64) -> Result<PendingChange, TurtleError> {
        let distance = require_finite("distance", distance)?;
        self.move_by(distance)
    }

    pub fn move_backward(&mut self, distance: f64) -> Result<PendingChange, TurtleError> {
        let distance = require_finite("distance", distance)?;
        self.move_by(-distance)
    }

    /// Turns counter-clockwise.
    pub fn rotate_left(&mut self, degrees: f64) -> Result<PendingChange, TurtleError> {
        let degrees = require_finite("angle", degrees)?;
        self.rotate_by(degrees)
    }

    /// Turns clockwise.
    pub fn rotate_right(&mut self, degrees: f64) -> Result<PendingChange, TurtleError> {
        let degrees = require_finite("angle", degrees)?;
        self.rotate_by(-degrees)
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<PendingChange, TurtleError> {
        let speed = validate_speed(speed)?;
        self.ensure_idle()?;
        let old = self.turtle.speed();
        self.turtle.set_speed(speed)?;
        Ok(self.start(TurtleEvent::SpeedUpdateStarted { old, new: speed }))
    }

    pub fn pen_up(&mut self) -> Result<PendingChange, TurtleError> {
        self.set_pen(false)
    }

    pub fn pen_down(&mut self) -> Result<PendingChange, TurtleError> {
        self.set_pen(true)
    }

    pub fn toggle_pen(&mut self) -> Result<PendingChange, TurtleError> {
        let pen_down = !self.turtle.is_pen_down();
        self.set_pen(pen_down)
    }

    /// Commits the in-flight change identified by `change`.
    pub fn acknowledge(&mut self, change: PendingChange) -> Result<(), TurtleError> {
        match self.pending {
            Some(pending) if pending == change => {
                trace!(id = change.id, kind = %change.kind, "acknowledged");
                self.pending = None;
                Ok(())
            }
            pending => Err(TurtleError::UnexpectedAcknowledgement {
                expected: change.kind,
                pending: pending.map(|pending| pending.kind),
            }),
        }
    }

    pub fn notify_movement_performed(&mut self) -> Result<PendingChange, TurtleError> {
        self.acknowledge_kind(ChangeKind::Movement)
    }

    pub fn notify_rotation_performed(&mut self) -> Result<PendingChange, TurtleError> {
        self.acknowledge_kind(ChangeKind::Rotation)
    }

    pub fn notify_speed_updated_performed(&mut self) -> Result<PendingChange, TurtleError> {
        self.acknowledge_kind(ChangeKind::SpeedUpdate)
    }

    pub fn notify_pen_action_performed(&mut self) -> Result<PendingChange, TurtleError> {
        self.acknowledge_kind(ChangeKind::PenAction)
    }

    /// Acknowledges whatever is in flight, provided it is of kind `kind`.
    pub fn acknowledge_kind(&mut self, kind: ChangeKind) -> Result<PendingChange, TurtleError> {
        match self.pending {
            Some(pending) if pending.kind == kind => {
                self.acknowledge(pending)?;
                Ok(pending)
            }
            pending => Err(TurtleError::UnexpectedAcknowledgement {
                expected: kind,
                pending: pending.map(|pending| pending.kind),
            }),
        }
    }

    fn move_by(&mut self, distance: f64) -> Result<PendingChange, TurtleError> {
        self.ensure_idle()?;
        let old = self.turtle.position();
        let new = old + Point2DF64::from_polar(distance, self.turtle.heading());
        if !new.is_finite() {
            return Err(TurtleError::InvalidArgument(format!(
                "moving {} from {} leaves the canvas",
                distance, old
            )));
        }
        self.turtle.set_position(new);
        Ok(self.start(TurtleEvent::MovementStarted {
            old,
            new,
            pen_down: self.turtle.is_pen_down(),
        }))
    }

    fn rotate_by(&mut self, degrees: f64) -> Result<PendingChange, TurtleError> {
        self.ensure_idle()?;
        let old = self.turtle.heading();
        let new = normalize_heading(old + degrees);
        self.turtle.set_heading(new)?;
        Ok(self.start(TurtleEvent::RotationStarted { old, new }))
    }

    fn set_pen(&mut self, pen_down: bool) -> Result<PendingChange, TurtleError> {
        self.ensure_idle()?;
        let old = self.turtle.is_pen_down();
        self.turtle.set_pen_down(pen_down);
        Ok(self.start(TurtleEvent::PenActionStarted { old, new: pen_down }))
    }

    fn ensure_idle(&self) -> Result<(), TurtleError> {
        match self.pending {
            Some(pending) => Err(TurtleError::ChangeInFlight(pending.kind)),
            None => Ok(()),
        }
    }

    fn start(&mut self, event: TurtleEvent) -> PendingChange {
        self.change_counter += 1;
        let change = PendingChange {
            id: self.change_counter,
            kind: event.kind(),
        };
        self.pending = Some(change);
        debug!(id = change.id, ?event, "change started");
        self.subscribers.emit(&event);
        change
    }
}

impl Default for TurtleCommander {
    fn default() -> TurtleCommander {
        TurtleCommander::new()
    }
}
