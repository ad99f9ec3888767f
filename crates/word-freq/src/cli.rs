use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{ConfigError, OutputFormat, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "word-freq",
    about = "Count words and list them by frequency, alphabetically within a frequency",
    version
)]
pub struct Cli {
    /// Input text file (reads stdin when absent or `-`)
    pub input: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of distinct words
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Maximum number of characters across distinct words
    #[arg(long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Entries in the most-frequent section
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Entries in the least-frequent section
    #[arg(long, value_name = "N")]
    pub bottom: Option<usize>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep only ASCII letters in words
    #[arg(long)]
    pub ascii_only: bool,

    /// Enable logging (honours RUST_LOG, defaults to info)
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(n) = self.max_words {
            config.capacity.max_unique_words = n;
        }
        if let Some(n) = self.max_chars {
            config.capacity.max_total_characters = n;
        }
        if let Some(n) = self.top {
            config.top = n;
        }
        if let Some(n) = self.bottom {
            config.bottom = n;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.ascii_only |= self.ascii_only;
        config.validate()?;
        Ok(config)
    }

    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "word-freq",
            "book.txt",
            "--max-words",
            "5",
            "--top",
            "3",
            "--format",
            "json",
            "--ascii-only",
        ])
        .unwrap();
        let cfg = cli.run_config().unwrap();
        assert_eq!(cfg.capacity.max_unique_words, 5);
        assert_eq!(cfg.top, 3);
        assert_eq!(cfg.bottom, 10);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.ascii_only);
        assert_eq!(cli.input_path(), Some(Path::new("book.txt")));
    }

    #[test]
    fn dash_means_stdin() {
        let cli = Cli::try_parse_from(["word-freq", "-"]).unwrap();
        assert_eq!(cli.input_path(), None);
        let cli = Cli::try_parse_from(["word-freq"]).unwrap();
        assert_eq!(cli.input_path(), None);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["word-freq", "-v", "-q"]).is_err());
    }

    #[test]
    fn zero_capacity_flag_rejected() {
        let cli = Cli::try_parse_from(["word-freq", "--max-chars", "0"]).unwrap();
        assert!(matches!(
            cli.run_config(),
            Err(ConfigError::ZeroCapacity {
                field: "max_total_characters"
            })
        ));
    }
}
