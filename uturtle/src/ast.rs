// logo/uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Command names follow the classic LOGO primitives.

use std::fmt::{Display, Formatter, Result as FormatResult};

/// One primitive turtle action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    MoveForward(f64),
    MoveBackward(f64),
    RotateLeft(f64),  // Degrees.
    RotateRight(f64), // Degrees.
    SetSpeed(f64),
    PenUp,
    PenDown,
    TogglePen,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Command(Command),
    Repeat(u32, Vec<Statement>),
}

pub type Program = Vec<Statement>;

/// Upper bound on the commands a program may expand to.
pub const MAX_COMMANDS: u64 = 1_000_000;

/// Number of commands `flatten` would produce, saturating instead of overflowing.
pub fn expanded_len(program: &[Statement]) -> u64 {
    program.iter().fold(0u64, |total, statement| {
        let len = match statement {
            Statement::Command(_) => 1,
            Statement::Repeat(count, body) => u64::from(*count).saturating_mul(expanded_len(body)),
        };
        total.saturating_add(len)
    })
}

/// Expands every `repeat` block into the flat command sequence it stands for.
pub fn flatten(program: &[Statement]) -> Vec<Command> {
    let mut commands = Vec::new();
    flatten_into(program, &mut commands);
    commands
}

fn flatten_into(statements: &[Statement], commands: &mut Vec<Command>) {
    for statement in statements {
        match statement {
            Statement::Command(command) => commands.push(*command),
            Statement::Repeat(count, body) => {
                for _ in 0..*count {
                    flatten_into(body, commands);
                }
            }
        }
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        match *self {
            Command::MoveForward(distance) => write!(formatter, "forward {}", distance),
            Command::MoveBackward(distance) => write!(formatter, "backward {}", distance),
            Command::RotateLeft(degrees) => write!(formatter, "left {}", degrees),
            Command::RotateRight(degrees) => write!(formatter, "right {}", degrees),
            Command::SetSpeed(speed) => write!(formatter, "speed {}", speed),
            Command::PenUp => formatter.write_str("penup"),
            Command::PenDown => formatter.write_str("pendown"),
            Command::TogglePen => formatter.write_str("pentoggle"),
        }
    }
}

#[test]
fn flatten_expands_nested_repeats() {
    let program = vec![
        Statement::Repeat(
            2,
            vec![
                Statement::Command(Command::MoveForward(10.0)),
                Statement::Repeat(2, vec![Statement::Command(Command::RotateLeft(45.0))]),
            ],
        ),
        Statement::Repeat(0, vec![Statement::Command(Command::PenUp)]),
        Statement::Command(Command::SetSpeed(2.0)),
    ];
    assert_eq!(
        flatten(&program),
        vec![
            Command::MoveForward(10.0),
            Command::RotateLeft(45.0),
            Command::RotateLeft(45.0),
            Command::MoveForward(10.0),
            Command::RotateLeft(45.0),
            Command::RotateLeft(45.0),
            Command::SetSpeed(2.0),
        ]
    );
}

#[test]
fn command_display_is_parseable_text() {
    assert_eq!(Command::MoveForward(100.0).to_string(), "forward 100");
    assert_eq!(Command::RotateRight(22.5).to_string(), "right 22.5");
    assert_eq!(Command::TogglePen.to_string(), "pentoggle");
}

#[test]
fn expanded_len_saturates() {
    let body = vec![Statement::Command(Command::MoveForward(1.0))];
    let inner = Statement::Repeat(u32::MAX, body);
    assert_eq!(expanded_len(&[inner.clone()]), u64::from(u32::MAX));

    let program = vec![
        Statement::Repeat(u32::MAX, vec![inner.clone(), inner]),
        Statement::Command(Command::PenUp),
    ];
    assert_eq!(expanded_len(&program), u64::MAX);
    assert_eq!(expanded_len(&[]), 0);
}
