use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::Position;

#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::Usage { .. } => "Usage",
            ErrorImpl::OpenInput { .. } => "OpenInput",
            ErrorImpl::CreateOutput { .. } => "CreateOutput",
            ErrorImpl::Read { .. } => "Read",
            ErrorImpl::Write { .. } => "Write",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::Usage { .. } => {
                ErrorTip::Suggestion(String::from("Usage: tokenizer inputFile outputFile"))
            }
            ErrorImpl::OpenInput { path, .. } => ErrorTip::Suggestion(format!(
                "Check that `{}` exists and is readable",
                path.display()
            )),
            ErrorImpl::CreateOutput { path, .. } => ErrorTip::Suggestion(format!(
                "Check that the directory of `{}` exists and is writable",
                path.display()
            )),
            ErrorImpl::Read { .. } => {
                ErrorTip::Suggestion(String::from("The input stopped being readable mid-run"))
            }
            ErrorImpl::Write { .. } => {
                ErrorTip::Suggestion(String::from("The output stopped being writable mid-run"))
            }
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("unrecognised character {ch:?}")]
    UnrecognisedCharacter { ch: char },
    #[error("expected 2 arguments, received {received}")]
    Usage { received: usize },
    #[error("could not open {} for reading: {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    #[error("could not open {} for writing: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("failed to read input: {source}")]
    Read { source: io::Error },
    #[error("failed to write output: {source}")]
    Write { source: io::Error },
}
