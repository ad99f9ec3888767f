//! word-freq - count words and report them by frequency.
//!
//! Wraps the [`word_forest`] index with everything around it: tokenizing
//! input text, reading files, configuration and report rendering. The
//! `word-freq` binary is a thin shell over [`run`].

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub use cli::Cli;
pub use config::{ConfigError, OutputFormat, RunConfig};
pub use error::{CliError, CliResult};
pub use pipeline::{count, WordCounter};
pub use report::{render_json, render_text, Report};

/// Run the command described by `cli` and return the rendered report.
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = cli.run_config()?;

    let report = match cli.input_path() {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            count(BufReader::new(file), path, &config)?
        }
        None => count(io::stdin().lock(), Path::new("<stdin>"), &config)?,
    };

    Ok(match config.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    })
}
