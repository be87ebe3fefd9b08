#![allow(clippy::module_inception)]

use std::io::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod driver;
pub mod errors;
pub mod formatter;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A location inside the source document.
///
/// `line` is 1-based and counts physical source lines. `column` is 0-based and
/// counts characters of the *normalized* line, so it does not line up with the
/// raw text once whitespace has been squeezed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Writes a human readable report for `error`.
///
/// ```text
/// Error: OpenInput (Check that `missing.txt` exists and is readable)
/// -> could not open missing.txt for reading: No such file or directory
/// ```
pub fn display_error(error: &Error, out: &mut impl Write) -> std::io::Result<()> {
    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }

    match error.get_position() {
        Some(position) => writeln!(out, "-> {}:{}: {}", position.line, position.column, error),
        None => writeln!(out, "-> {}", error),
    }
}
