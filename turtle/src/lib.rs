// logo/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turtle kinematics for a LOGO drawing scene.
//!
//! `TurtleCommander` owns the turtle state and turns commands into state
//! changes plus "started" notifications; a view layer animates each change
//! and acknowledges it. `DrawingScene` feeds a command script through the
//! commander one acknowledgement at a time and collects the pen strokes.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate serde_derive;

pub mod commander;
pub mod error;
pub mod events;
pub mod scene;
pub mod state;

pub use crate::commander::{PendingChange, TurtleCommander};
pub use crate::error::TurtleError;
pub use crate::events::{ChangeKind, EventMask, SubscriptionId, TurtleEvent};
pub use crate::scene::{demonstration_script, DrawingScene, SceneOptions};
pub use crate::state::{normalize_heading, TurtleState};
pub use uturtle::ast::Command;

/// Size of the turtle icon in canvas units.
pub const TURTLE_WIDTH: f64 = 30.0;
pub const TURTLE_HEIGHT: f64 = 30.0;
