//! Error types and error handling for the tokenizer.
//!
//! This module defines the errors that can surface while tokenizing a
//! document. It includes:
//!
//! - Setup failures (bad arguments, unreadable input, unwritable output)
//! - Lexical errors for characters that are not part of any lexeme
//! - Error names and tips used when reporting to the user

pub mod errors;
