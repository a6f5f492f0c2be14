// logo/uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A tiny LOGO dialect: `forward`, `backward`, `left`, `right`, `speed`,
//! `penup`, `pendown`, `pentoggle` and `repeat N [ ... ]`.

#[macro_use]
extern crate lalrpop_util;

pub mod ast;

lalrpop_mod!(pub turtle); // synthesized by LALRPOP

use crate::ast::{Command, Program};
use lalrpop_util::ParseError as LalrpopError;
use std::fmt::{Display, Formatter, Result as FormatResult};
use thiserror::Error;

pub type Parser = turtle::TopLevelParser;

#[derive(Clone, Debug, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// A semantic error raised by a grammar action, located by byte offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserError {
    pub location: usize,
    pub message: &'static str,
}

impl Display for UserError {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        formatter.write_str(self.message)
    }
}

/// Parses a whole script into statements, keeping `repeat` blocks intact.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new().parse(source).map_err(|error| {
        let offset = match &error {
            LalrpopError::InvalidToken { location } => *location,
            LalrpopError::UnrecognizedEof { location, .. } => *location,
            LalrpopError::UnrecognizedToken { token: (start, _, _), .. } => *start,
            LalrpopError::ExtraToken { token: (start, _, _) } => *start,
            LalrpopError::User { error: user } => user.location,
        };
        ParseError {
            line: line_of(source, offset),
            message: error.to_string(),
        }
    })
}

/// Parses a script and expands it to the command sequence a turtle executes.
/// Scripts that would expand past `ast::MAX_COMMANDS` are rejected.
pub fn parse_commands(source: &str) -> Result<Vec<Command>, ParseError> {
    let program = parse(source)?;
    let len = ast::expanded_len(&program);
    if len > ast::MAX_COMMANDS {
        return Err(ParseError {
            line: first_repeat_line(source),
            message: format!(
                "script expands to {} commands, more than the limit of {}",
                len,
                ast::MAX_COMMANDS
            ),
        });
    }
    Ok(ast::flatten(&program))
}

// Statements carry no spans; blame the first `repeat` since only repeats grow a script.
fn first_repeat_line(source: &str) -> usize {
    source
        .lines()
        .position(|line| {
            let code = line.split(';').next().unwrap_or("");
            code.split_whitespace().any(|word| word == "repeat")
        })
        .map_or(1, |index| index + 1)
}

fn line_of(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[test]
fn turtle_command_parser() {
    assert!(turtle::CommandParser::new().parse("penup").is_ok());
    assert!(turtle::CommandParser::new().parse("pu").is_ok());
    assert!(turtle::CommandParser::new().parse("pendown").is_ok());
    assert!(turtle::CommandParser::new().parse("pd").is_ok());
    assert!(turtle::CommandParser::new().parse("pentoggle").is_ok());
    assert!(turtle::CommandParser::new().parse("forward 100").is_ok());
    assert!(turtle::CommandParser::new().parse("fd 12.5").is_ok());
    assert!(turtle::CommandParser::new().parse("backward 3").is_ok());
    assert!(turtle::CommandParser::new().parse("back 3").is_ok());
    assert!(turtle::CommandParser::new().parse("bk -3").is_ok());
    assert!(turtle::CommandParser::new().parse("left 22.7").is_ok());
    assert!(turtle::CommandParser::new().parse("lt 45").is_ok());
    assert!(turtle::CommandParser::new().parse("rt 90").is_ok());
    assert!(turtle::CommandParser::new().parse("speed 4").is_ok());

    assert!(turtle::CommandParser::new().parse("bleh").is_err());
    assert!(turtle::CommandParser::new().parse("forward").is_err());
    assert!(turtle::CommandParser::new().parse("penup pendown").is_err());
    assert!(turtle::CommandParser::new().parse("penup 22").is_err());
}

#[test]
fn turtle_program_parser() {
    assert!(Parser::new()
        .parse("forward 10 right 90 repeat 4 [ fd 1 repeat 2 [ lt 45 ] ]")
        .is_ok());
    assert!(Parser::new().parse("").is_ok());
    assert!(Parser::new().parse("repeat 4 [ fd 1").is_err());
    assert!(Parser::new().parse("repeat 1.5 [ fd 1 ]").is_err());
    assert!(Parser::new().parse("repeat -1 [ fd 1 ]").is_err());
}

#[test]
fn parse_commands_flattens_and_skips_comments() {
    let commands = parse_commands(
        "; a square\n\
         repeat 2 [ forward 100 right 90 ] ; trailing comment\n\
         speed 4\n",
    )
    .unwrap();
    pretty_assertions::assert_eq!(
        commands,
        vec![
            Command::MoveForward(100.0),
            Command::RotateRight(90.0),
            Command::MoveForward(100.0),
            Command::RotateRight(90.0),
            Command::SetSpeed(4.0),
        ]
    );
}

#[test]
fn parse_error_reports_line() {
    let error = parse("forward 10\nright 90\njump 3\n").unwrap_err();
    assert_eq!(error.line, 3);
    assert!(error.to_string().starts_with("line 3: "));

    let error = parse("fd 1\nrepeat 2.5 [ fd 1 ]").unwrap_err();
    assert_eq!(error.line, 2);
    assert!(error.message.contains("repeat count"));
}

#[test]
fn aliases_and_signs_parse_to_commands() {
    pretty_assertions::assert_eq!(
        parse_commands("back 3 backward +3 bk -3 lt 45 pd").unwrap(),
        vec![
            Command::MoveBackward(3.0),
            Command::MoveBackward(3.0),
            Command::MoveBackward(-3.0),
            Command::RotateLeft(45.0),
            Command::PenDown,
        ]
    );
}

#[test]
fn comment_on_the_last_line_needs_no_newline() {
    assert_eq!(
        parse_commands("fd 1\nrt 90 ; done").unwrap(),
        vec![Command::MoveForward(1.0), Command::RotateRight(90.0)]
    );
    assert!(parse_commands("; only a comment").unwrap().is_empty());
}

#[test]
fn oversized_expansion_is_rejected() {
    let error =
        parse_commands("fd 1\nrepeat 4294967295 [ repeat 4294967295 [ fd 1 ] ]").unwrap_err();
    assert_eq!(error.line, 2);
    assert!(error.message.contains("limit of 1000000"));

    let error = parse_commands("repeat 1000001 [ pu ]").unwrap_err();
    assert_eq!(error.line, 1);

    assert_eq!(parse_commands("repeat 1000000 [ pu ]").unwrap().len(), 1_000_000);
}
