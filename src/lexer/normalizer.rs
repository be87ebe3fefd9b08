use std::{fmt::Display, ops::Deref};

/// A source line with every whitespace and control character removed.
///
/// Only [`normalize`] builds one, so a `NormalizedLine` never contains a
/// separator and the scanner can treat it as a dense run of candidate lexemes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedLine(String);

impl NormalizedLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NormalizedLine {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Display for NormalizedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control()
}

/// Squeezes `raw` together, keeping every other character in its original order.
pub fn normalize(raw: &str) -> NormalizedLine {
    NormalizedLine(raw.chars().filter(|ch| !is_separator(*ch)).collect())
}
