use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    normalizer::{normalize, NormalizedLine},
    tokens::{Symbol, Token, TokenKind, COMPOUND_SUFFIX},
};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Outcome of a single scan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    Token(Token),
    EndOfLine,
    InvalidCharacter(char),
}

/// Reads the next lexeme at the start of `remaining`.
///
/// Returns the result together with the number of bytes it consumed. Both
/// `EndOfLine` and `InvalidCharacter` consume nothing: skipping the offending
/// character is up to the caller.
pub fn scan(remaining: &str, at: Position) -> (ScanResult, usize) {
    let mut chars = remaining.chars();

    let Some(first) = chars.next() else {
        return (ScanResult::EndOfLine, 0);
    };

    if let Some(symbol) = Symbol::lookup(first) {
        if chars.next() == Some(COMPOUND_SUFFIX) {
            let value = String::from_iter([first, COMPOUND_SUFFIX]);
            let token = MK_TOKEN!(TokenKind::Compound(symbol), value, at.line, at.column);
            return (ScanResult::Token(token), 2);
        }

        let token = MK_TOKEN!(TokenKind::Symbol(symbol), first.to_string(), at.line, at.column);
        return (ScanResult::Token(token), 1);
    }

    // Digits never combine with a trailing `=`.
    if let Some(number) = NUMBER_PATTERN.find(remaining) {
        let value = number.as_str().to_string();
        let consumed = value.len();
        let token = MK_TOKEN!(TokenKind::Number, value, at.line, at.column);
        return (ScanResult::Token(token), consumed);
    }

    (ScanResult::InvalidCharacter(first), 0)
}

/// Owns the cursor over one normalized line.
#[derive(Debug)]
pub struct Lexer {
    source: NormalizedLine,
    pos: usize,
    line: u32,
    column: u32,
    errors: Vec<Error>,
}

impl Lexer {
    pub fn new(source: NormalizedLine, line: u32) -> Lexer {
        Lexer {
            source,
            pos: 0,
            line,
            column: 0,
            errors: vec![],
        }
    }

    /// Moves the cursor forward by `n` bytes.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.column += self.source[self.pos..end].chars().count() as u32;
        self.pos = end;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Hands over the lexical errors recorded since the last call.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// Performs one scan step and moves the cursor past whatever it covered.
    ///
    /// An invalid character is skipped on its own so the next step resumes
    /// right after it. Once the line is exhausted every call yields `EndOfLine`.
    pub fn next_result(&mut self) -> ScanResult {
        let (result, consumed) = scan(self.remainder(), self.current_position());

        match &result {
            ScanResult::Token(token) => {
                tracing::trace!(kind = %token.kind, value = %token.value, col = self.column, "lexeme");
                self.advance_n(consumed);
            }
            ScanResult::InvalidCharacter(ch) => {
                self.errors.push(Error::new(
                    ErrorImpl::UnrecognisedCharacter { ch: *ch },
                    self.current_position(),
                ));
                self.advance_n(ch.len_utf8());
            }
            ScanResult::EndOfLine => {}
        }

        result
    }
}

impl Iterator for Lexer {
    type Item = ScanResult;

    fn next(&mut self) -> Option<ScanResult> {
        match self.next_result() {
            ScanResult::EndOfLine => None,
            result => Some(result),
        }
    }
}

/// Normalizes `raw` and scans it to the end of the line.
///
/// The trailing `EndOfLine` is not included.
pub fn tokenize_line(raw: &str, line: u32) -> Vec<ScanResult> {
    Lexer::new(normalize(raw), line).collect()
}
