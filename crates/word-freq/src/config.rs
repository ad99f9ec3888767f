//! Run configuration.
//!
//! Layered as defaults, then an optional TOML file, then command-line flags
//! (see [`crate::cli`]).
//!
//! ```toml
//! top = 10
//! bottom = 10
//! format = "text"
//! ascii_only = false
//!
//! [capacity]
//! max_unique_words = 50000
//! max_total_characters = 500000
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use word_forest::Capacity;
use word_freq_util::strings::{is_alphabetic, is_ascii_letter, CharPredicate};

pub const DEFAULT_REPORT_SIZE: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{field} must be greater than zero")]
    ZeroCapacity { field: &'static str },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub capacity: Capacity,
    /// Entries in the most-frequent section.
    pub top: usize,
    /// Entries in the least-frequent section.
    pub bottom: usize,
    pub format: OutputFormat,
    /// Keep only `a-z`/`A-Z` in words instead of any alphabetic character.
    pub ascii_only: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::default(),
            top: DEFAULT_REPORT_SIZE,
            bottom: DEFAULT_REPORT_SIZE,
            format: OutputFormat::default(),
            ascii_only: false,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity.max_unique_words == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "max_unique_words",
            });
        }
        if self.capacity.max_total_characters == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "max_total_characters",
            });
        }
        Ok(())
    }

    /// Character filter for the tokenizer.
    pub fn word_chars(&self) -> CharPredicate {
        if self.ascii_only {
            is_ascii_letter
        } else {
            is_alphabetic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let cfg = RunConfig::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = RunConfig::from_toml_str(
            "top = 3\nformat = \"json\"\n[capacity]\nmax_unique_words = 7\n",
            Path::new("x.toml"),
        )
        .unwrap();
        assert_eq!(cfg.top, 3);
        assert_eq!(cfg.bottom, DEFAULT_REPORT_SIZE);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.capacity.max_unique_words, 7);
        assert_eq!(
            cfg.capacity.max_total_characters,
            Capacity::DEFAULT_MAX_TOTAL_CHARACTERS
        );
    }

    #[test]
    fn unknown_format_is_parse_error() {
        let err = RunConfig::from_toml_str("format = \"xml\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config bad.toml"));
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut cfg = RunConfig::default();
        cfg.capacity.max_total_characters = 0;
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.to_string(), "max_total_characters must be greater than zero");
    }

    #[test]
    fn ascii_only_switches_predicate() {
        let cfg = RunConfig {
            ascii_only: true,
            ..RunConfig::default()
        };
        assert!(!(cfg.word_chars())('é'));
        assert!((RunConfig::default().word_chars())('é'));
    }
}
