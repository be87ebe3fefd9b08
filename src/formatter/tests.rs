//! Unit tests for the statement formatter.

use super::formatter::{Record, StatementFormatter};
use crate::{
    config::FormatConfig,
    lexer::scanner::{tokenize_line, ScanResult},
};

fn render(lines: &[&str], config: &FormatConfig) -> Vec<String> {
    let mut formatter = StatementFormatter::new(config);
    let mut output = vec![];

    for (number, line) in lines.iter().enumerate() {
        for result in tokenize_line(line, number as u32 + 1) {
            output.extend(formatter.feed(&result).iter().map(|record| record.to_string()));
        }
    }

    output
}

#[test]
fn test_record_display() {
    assert_eq!(Record::Separator(5).to_string(), "-----");
    assert_eq!(Record::StatementHeader(3).to_string(), "Statement #3");
    assert_eq!(
        Record::Lexeme { index: 0, text: "<=".to_string() }.to_string(),
        "Lexeme 0 is <="
    );
    assert_eq!(
        Record::LexicalError('x').to_string(),
        "===> 'x'\nLexical error: not a lexeme"
    );
}

#[test]
fn test_format_error_before_first_statement() {
    let output = render(&["x=1+2;"], &FormatConfig::default());

    assert_eq!(
        output,
        [
            "===> 'x'\nLexical error: not a lexeme",
            "Statement #1",
            "Lexeme 0 is =",
            "Lexeme 1 is 1",
            "Lexeme 2 is +",
            "Lexeme 3 is 2",
            "Lexeme 4 is ;",
        ]
    );
}

#[test]
fn test_format_two_statements_on_one_line() {
    let output = render(&["1<=2;3>4;"], &FormatConfig::default());
    let rule = "-".repeat(50);

    assert_eq!(
        output,
        [
            "Statement #1",
            "Lexeme 0 is 1",
            "Lexeme 1 is <=",
            "Lexeme 2 is 2",
            "Lexeme 3 is ;",
            rule.as_str(),
            "Statement #2",
            "Lexeme 0 is 3",
            "Lexeme 1 is >",
            "Lexeme 2 is 4",
            "Lexeme 3 is ;",
        ]
    );
}

#[test]
fn test_format_digit_then_equals() {
    let output = render(&["5=;"], &FormatConfig::default());

    assert_eq!(
        output,
        ["Statement #1", "Lexeme 0 is 5", "Lexeme 1 is =", "Lexeme 2 is ;"]
    );
}

#[test]
fn test_format_blank_line_changes_nothing() {
    let mut formatter = StatementFormatter::default();

    for result in tokenize_line(" \t \t ", 1) {
        assert!(formatter.feed(&result).is_empty());
    }

    assert_eq!(formatter.statement(), 1);
    assert_eq!(formatter.token_index(), 0);
}

#[test]
fn test_format_statement_spans_lines() {
    let output = render(&["1+", "", "2;"], &FormatConfig::default());

    assert_eq!(
        output,
        ["Statement #1", "Lexeme 0 is 1", "Lexeme 1 is +", "Lexeme 2 is 2", "Lexeme 3 is ;"]
    );
}

#[test]
fn test_format_error_does_not_touch_counters() {
    let mut formatter = StatementFormatter::default();
    formatter.feed(&tokenize_line("1", 1)[0]);

    let records = formatter.feed(&ScanResult::InvalidCharacter('$'));

    assert_eq!(records, [Record::LexicalError('$')]);
    assert_eq!(formatter.statement(), 1);
    assert_eq!(formatter.token_index(), 1);
}

#[test]
fn test_format_end_of_line_emits_nothing() {
    let mut formatter = StatementFormatter::default();

    assert!(formatter.feed(&ScanResult::EndOfLine).is_empty());
}

#[test]
fn test_format_counters_reset_after_terminator() {
    let mut formatter = StatementFormatter::default();

    for result in tokenize_line("(1);", 1) {
        formatter.feed(&result);
    }

    assert_eq!(formatter.statement(), 2);
    assert_eq!(formatter.token_index(), 0);
}

#[test]
fn test_format_custom_separator_width() {
    let config = FormatConfig { separator_width: 3 };
    let output = render(&[";;"], &config);

    assert_eq!(
        output,
        ["Statement #1", "Lexeme 0 is ;", "---", "Statement #2", "Lexeme 0 is ;"]
    );
}

#[test]
fn test_format_trailing_statement_without_terminator() {
    let output = render(&["1;", "2"], &FormatConfig::default());

    assert_eq!(output.last().map(String::as_str), Some("Lexeme 0 is 2"));
    assert_eq!(output.iter().filter(|line| line.starts_with("Statement #")).count(), 2);
}
