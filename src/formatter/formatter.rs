use std::fmt::Display;

use crate::{config::FormatConfig, lexer::scanner::ScanResult};

/// One entry of the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Rule of `-` characters printed between statements.
    Separator(usize),
    StatementHeader(u32),
    Lexeme { index: u32, text: String },
    LexicalError(char),
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Separator(width) => write!(f, "{}", "-".repeat(*width)),
            Record::StatementHeader(statement) => write!(f, "Statement #{}", statement),
            Record::Lexeme { index, text } => write!(f, "Lexeme {} is {}", index, text),
            Record::LexicalError(ch) => {
                write!(f, "===> '{}'\nLexical error: not a lexeme", ch)
            }
        }
    }
}

/// Tracks statement and lexeme numbering across a whole document.
#[derive(Debug, Clone)]
pub struct StatementFormatter {
    statement: u32,
    token: u32,
    separator_width: usize,
}

impl StatementFormatter {
    pub fn new(config: &FormatConfig) -> Self {
        StatementFormatter {
            statement: 1,
            token: 0,
            separator_width: config.separator_width,
        }
    }

    /// Number of the statement the next lexeme belongs to.
    pub fn statement(&self) -> u32 {
        self.statement
    }

    /// Index the next lexeme will get inside its statement.
    pub fn token_index(&self) -> u32 {
        self.token
    }

    pub fn feed(&mut self, result: &ScanResult) -> Vec<Record> {
        let token = match result {
            ScanResult::EndOfLine => return vec![],
            ScanResult::InvalidCharacter(ch) => return vec![Record::LexicalError(*ch)],
            ScanResult::Token(token) => token,
        };

        let mut records = Vec::with_capacity(3);

        if self.token == 0 {
            if self.statement > 1 {
                records.push(Record::Separator(self.separator_width));
            }
            records.push(Record::StatementHeader(self.statement));
        }

        records.push(Record::Lexeme {
            index: self.token,
            text: token.value.clone(),
        });

        if token.is_terminator() {
            self.statement += 1;
            self.token = 0;
        } else {
            self.token += 1;
        }

        records
    }
}

impl Default for StatementFormatter {
    fn default() -> Self {
        StatementFormatter::new(&FormatConfig::default())
    }
}
