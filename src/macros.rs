//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning a run of a normalized line

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
/// * `$line` - 1-based source line the token was read from
/// * `$column` - 0-based column of the first character in the normalized line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {{
        let value: String = $value;
        let width = value.chars().count() as u32;
        $crate::lexer::tokens::Token {
            kind: $kind,
            span: $crate::Span {
                start: $crate::Position::new($line, $column),
                end: $crate::Position::new($line, $column + width),
            },
            value,
        }
    }};
}
