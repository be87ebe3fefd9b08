//! Command-line arguments and run configuration.

use std::path::PathBuf;

use clap::Parser;

/// Width of the rule printed between statements.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 50;

/// Scan a source file and write its lexemes, grouped by statement, to another file
#[derive(Debug, Clone, Parser)]
#[command(name = "tokenizer", version)]
pub struct Cli {
    /// Source file to scan
    pub input: PathBuf,

    /// File the lexeme listing is written to (created or truncated)
    pub output: PathBuf,

    /// Number of `-` characters in the rule between statements
    #[arg(long, default_value_t = DEFAULT_SEPARATOR_WIDTH)]
    pub separator_width: usize,

    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub separator_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: FormatConfig,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            output: cli.output,
            format: FormatConfig {
                separator_width: cli.separator_width,
            },
        }
    }
}

impl Cli {
    /// Picks the log filter: `-v` wins over `env` (the `RUST_LOG` value),
    /// which wins over the `warn` default.
    pub fn log_filter(&self, env: Option<String>) -> String {
        let level = match self.verbose {
            0 => return env.unwrap_or_else(|| String::from("warn")),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        String::from(level)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Config, DEFAULT_SEPARATOR_WIDTH};

    #[test]
    fn test_parse_positional_paths() {
        let cli = Cli::try_parse_from(["tokenizer", "in.txt", "out.txt"]).unwrap();
        let config = Config::from(cli);

        assert_eq!(config.input.to_str(), Some("in.txt"));
        assert_eq!(config.output.to_str(), Some("out.txt"));
        assert_eq!(config.format.separator_width, DEFAULT_SEPARATOR_WIDTH);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "tokenizer",
            "in.txt",
            "out.txt",
            "--separator-width",
            "10",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.separator_width, 10);
        assert_eq!(cli.log_filter(None), "debug");
    }

    #[test]
    fn test_verbose_overrides_rust_log() {
        let cli = Cli::try_parse_from(["tokenizer", "in.txt", "out.txt", "-v"]).unwrap();

        assert_eq!(cli.log_filter(Some(String::from("error"))), "info");
    }

    #[test]
    fn test_rust_log_used_without_verbose() {
        let cli = Cli::try_parse_from(["tokenizer", "in.txt", "out.txt"]).unwrap();

        assert_eq!(cli.log_filter(Some(String::from("tokenizer=debug"))), "tokenizer=debug");
        assert_eq!(cli.log_filter(None), "warn");
    }

    #[test]
    fn test_parse_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["tokenizer", "in.txt"]).is_err());
        assert!(Cli::try_parse_from(["tokenizer", "a", "b", "c"]).is_err());
    }
}
