use std::path::PathBuf;
use std::process;

use crate::config::ConfigError;

/// Exit codes for the binary.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not UTF-8 encoded", .path.display())]
    Encoding { path: PathBuf },
    /// Counting ran out of room; the run is aborted without a report.
    #[error("{0}")]
    Count(#[from] word_forest::Error),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("cannot render report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write report: {0}")]
    Output(#[source] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => EXIT_USAGE,
            _ => EXIT_ERROR,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

/// Print `error: ...` to stderr and exit.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("error: {err}");
    process::exit(err.exit_code());
}
