use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<char, Symbol> = {
        let mut map = HashMap::new();
        map.insert('+', Symbol::Plus);
        map.insert('-', Symbol::Dash);
        map.insert('*', Symbol::Star);
        map.insert('/', Symbol::Slash);
        map.insert('(', Symbol::OpenParen);
        map.insert(')', Symbol::CloseParen);
        map.insert('^', Symbol::Caret);
        map.insert(';', Symbol::Semicolon);
        map.insert('<', Symbol::Less);
        map.insert('>', Symbol::Greater);
        map.insert('=', Symbol::Assignment);
        map.insert('!', Symbol::Not);
        map
    };
}

/// Character that may follow any symbol to form a compound operator.
pub const COMPOUND_SUFFIX: char = '=';

/// Lexeme that ends a statement.
pub const TERMINATOR: &str = ";";

/// The fixed set of single-character operators and punctuation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    Plus,       // +
    Dash,       // -
    Star,       // *
    Slash,      // /
    OpenParen,  // (
    CloseParen, // )
    Caret,      // ^
    Semicolon,  // ;
    Less,       // <
    Greater,    // >
    Assignment, // =
    Not,        // !
}

impl Symbol {
    pub fn lookup(ch: char) -> Option<Symbol> {
        SYMBOL_LOOKUP.get(&ch).copied()
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::Plus => '+',
            Symbol::Dash => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::OpenParen => '(',
            Symbol::CloseParen => ')',
            Symbol::Caret => '^',
            Symbol::Semicolon => ';',
            Symbol::Less => '<',
            Symbol::Greater => '>',
            Symbol::Assignment => '=',
            Symbol::Not => '!',
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Symbol(Symbol),
    /// A symbol immediately followed by `=`, such as `<=` or `!=`.
    Compound(Symbol),
    Number,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Symbol(symbol) => write!(f, "symbol `{}`", symbol.as_char()),
            TokenKind::Compound(symbol) => {
                write!(f, "compound `{}{}`", symbol.as_char(), COMPOUND_SUFFIX)
            }
            TokenKind::Number => write!(f, "integer literal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is_terminator(&self) -> bool {
        self.value == TERMINATOR
    }
}
