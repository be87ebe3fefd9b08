//! Feeds a source document through the lexer and formatter one line at a time.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

use crate::{
    config::{Config, FormatConfig},
    errors::errors::{Error, ErrorImpl},
    formatter::formatter::{Record, StatementFormatter},
    lexer::{
        normalizer::normalize,
        scanner::{Lexer, ScanResult},
    },
};

/// Counts of what a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: u32,
    pub statements: u32,
    pub lexemes: u32,
    pub lexical_errors: u32,
}

impl Summary {
    fn record(&mut self, record: &Record) {
        match record {
            Record::StatementHeader(_) => self.statements += 1,
            Record::Lexeme { .. } => self.lexemes += 1,
            Record::Separator(_) | Record::LexicalError(_) => {}
        }
    }
}

/// Scans every line of `reader` and writes the formatted records to `writer`.
///
/// Lines that are empty once normalized produce no output. A statement may
/// continue on a later line: numbering is carried across the whole document.
pub fn tokenize_document<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &FormatConfig,
) -> Result<Summary, Error> {
    let mut formatter = StatementFormatter::new(config);
    let mut summary = Summary::default();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|source| ErrorImpl::Read { source })?;
        if read == 0 {
            break;
        }

        summary.lines += 1;
        let line = normalize(&String::from_utf8_lossy(&buffer));
        if line.is_empty() {
            continue;
        }

        tracing::debug!(line = summary.lines, text = %line, "scanning line");
        let mut lexer = Lexer::new(line, summary.lines);

        loop {
            let result = lexer.next_result();
            for record in formatter.feed(&result) {
                summary.record(&record);
                writeln!(writer, "{}", record).map_err(|source| ErrorImpl::Write { source })?;
            }

            if result == ScanResult::EndOfLine {
                break;
            }
        }

        for error in lexer.take_errors() {
            if let Some(position) = error.get_position() {
                tracing::debug!(line = position.line, col = position.column, "{}", error);
            }
            summary.lexical_errors += 1;
        }
    }

    writer.flush().map_err(|source| ErrorImpl::Write { source })?;

    Ok(summary)
}

/// Opens the configured files and tokenizes the input into the output.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let input = File::open(&config.input).map_err(|source| ErrorImpl::OpenInput {
        path: config.input.clone(),
        source,
    })?;
    let output = File::create(&config.output).map_err(|source| ErrorImpl::CreateOutput {
        path: config.output.clone(),
        source,
    })?;

    tracing::info!(input = %config.input.display(), output = %config.output.display(), "tokenizing");

    let summary = tokenize_document(BufReader::new(input), BufWriter::new(output), &config.format)?;

    tracing::info!(
        lines = summary.lines,
        statements = summary.statements,
        lexemes = summary.lexemes,
        lexical_errors = summary.lexical_errors,
        "done"
    );

    Ok(summary)
}
