//! Lexical analysis module for the tokenizer.
//!
//! This module turns raw source lines into lexemes. It handles:
//!
//! - Squeezing whitespace and control characters out of a line
//! - Recognition of operators, punctuation and compound `=` operators
//! - Integer literal accumulation
//! - Reporting characters that are not part of any lexeme

pub mod normalizer;
pub mod scanner;
pub mod tokens;
