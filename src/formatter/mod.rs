//! Statement formatting for scanned lexemes.
//!
//! Groups the lexeme stream into `;`-terminated statements, numbers
//! statements and lexemes, and renders every lexeme or lexical error as an
//! output record.

pub mod formatter;

#[cfg(test)]
mod tests;
