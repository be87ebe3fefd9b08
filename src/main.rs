use std::{io, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use tokenizer::{
    config::{Cli, Config},
    display_error,
    driver::run,
    errors::errors::{Error, ErrorImpl},
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) if matches!(err.kind(), ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument) => {
            let received = std::env::args().count().saturating_sub(1);
            return report(Error::from(ErrorImpl::Usage { received }));
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let filter = cli.log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    match run(&Config::from(cli)) {
        Ok(_) => {
            println!("Token File Successfully Created!");
            ExitCode::SUCCESS
        }
        Err(error) => report(error),
    }
}

fn report(error: Error) -> ExitCode {
    let _ = display_error(&error, &mut io::stderr());
    ExitCode::FAILURE
}
