//! `word-freq`: count words in a text file (or stdin) and print the most
//! frequent, least frequent and unique words.
//!
//! Usage:
//!   word-freq [INPUT] [--top N] [--bottom N] [--format text|json] [-v|-q]

use std::io::{self, Write};

use clap::Parser;
use word_freq::error::exit_with_error;
use word_freq::{Cli, CliError};

fn init_tracing(cli: &Cli) {
    // Logs go to stderr and are off unless --verbose is given, so stdout
    // carries only the report.
    let filter = if cli.verbose && !cli.quiet {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let rendered = match word_freq::run(&cli) {
        Ok(rendered) => rendered,
        Err(e) => exit_with_error(e),
    };

    if let Err(e) = io::stdout().write_all(rendered.as_bytes()) {
        exit_with_error(CliError::Output(e));
    }
}
