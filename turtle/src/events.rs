// logo/turtle/src/events.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! "Started" notifications and the subscriber registry that delivers them.

use logo_geometry::basic::point::Point2DF64;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Movement,
    Rotation,
    SpeedUpdate,
    PenAction,
}

impl ChangeKind {
    #[inline]
    pub fn mask(self) -> EventMask {
        match self {
            ChangeKind::Movement => EventMask::MOVEMENT,
            ChangeKind::Rotation => EventMask::ROTATION,
            ChangeKind::SpeedUpdate => EventMask::SPEED_UPDATE,
            ChangeKind::PenAction => EventMask::PEN_ACTION,
        }
    }
}

impl Display for ChangeKind {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(match *self {
            ChangeKind::Movement => "movement",
            ChangeKind::Rotation => "rotation",
            ChangeKind::SpeedUpdate => "speed update",
            ChangeKind::PenAction => "pen action",
        })
    }
}

bitflags! {
    /// Selects which event kinds a subscriber receives.
    pub struct EventMask: u8 {
        const MOVEMENT     = 0x01;
        const ROTATION     = 0x02;
        const SPEED_UPDATE = 0x04;
        const PEN_ACTION   = 0x08;
    }
}

/// Emitted synchronously when the commander starts a change. The view layer
/// animates from `old` to `new` and then acknowledges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurtleEvent {
    MovementStarted {
        old: Point2DF64,
        new: Point2DF64,
        pen_down: bool,
    },
    RotationStarted {
        old: f64,
        new: f64,
    },
    SpeedUpdateStarted {
        old: f64,
        new: f64,
    },
    PenActionStarted {
        old: bool,
        new: bool,
    },
}

impl TurtleEvent {
    pub fn kind(&self) -> ChangeKind {
        match *self {
            TurtleEvent::MovementStarted { .. } => ChangeKind::Movement,
            TurtleEvent::RotationStarted { .. } => ChangeKind::Rotation,
            TurtleEvent::SpeedUpdateStarted { .. } => ChangeKind::SpeedUpdate,
            TurtleEvent::PenActionStarted { .. } => ChangeKind::PenAction,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Callback = Box<dyn FnMut(&TurtleEvent)>;

struct Subscriber {
    id: SubscriptionId,
    mask: EventMask,
    callback: Callback,
}

/// Callbacks in subscription order.
pub(crate) struct Subscribers {
    next_id: u32,
    entries: Vec<Subscriber>,
}

impl Subscribers {
    pub(crate) fn new() -> Subscribers {
        Subscribers {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, mask: EventMask, callback: Callback) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push(Subscriber { id, mask, callback });
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|subscriber| subscriber.id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &TurtleEvent) {
        let kind = event.kind().mask();
        for subscriber in &mut self.entries {
            if subscriber.mask.contains(kind) {
                (subscriber.callback)(event);
            }
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Debug for Subscribers {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter
            .debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn masks_filter_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let sink = seen.clone();
        subscribers.subscribe(
            EventMask::ROTATION | EventMask::PEN_ACTION,
            Box::new(move |event| sink.borrow_mut().push(event.kind())),
        );

        subscribers.emit(&TurtleEvent::RotationStarted { old: 0.0, new: 90.0 });
        subscribers.emit(&TurtleEvent::SpeedUpdateStarted { old: 1.0, new: 2.0 });
        subscribers.emit(&TurtleEvent::PenActionStarted { old: true, new: false });

        assert_eq!(*seen.borrow(), vec![ChangeKind::Rotation, ChangeKind::PenAction]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::new();

        let sink = count.clone();
        let id = subscribers.subscribe(EventMask::all(), Box::new(move |_| *sink.borrow_mut() += 1));
        let event = TurtleEvent::RotationStarted { old: 0.0, new: 1.0 };
        subscribers.emit(&event);
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.emit(&event);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(subscribers.len(), 0);
    }

    #[test]
    fn kinds_map_to_masks() {
        let event = TurtleEvent::PenActionStarted { old: true, new: false };
        assert_eq!(event.kind(), ChangeKind::PenAction);
        assert_eq!(ChangeKind::SpeedUpdate.mask(), EventMask::SPEED_UPDATE);
        assert_eq!(ChangeKind::PenAction.to_string(), "pen action");
    }
}
