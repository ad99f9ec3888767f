//! Counting run: tokenized text in, [`Report`] out.

use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};
use word_forest::WordTree;
use word_freq_util::strings::{tokenize, CharPredicate};

use crate::config::RunConfig;
use crate::error::{CliError, CliResult};
use crate::report::Report;

/// One counting run. Owns its word index; nothing is shared across runs.
pub struct WordCounter {
    tree: WordTree,
    word_chars: CharPredicate,
    total_words: u64,
    top: usize,
    bottom: usize,
}

impl WordCounter {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            tree: WordTree::new(config.capacity),
            word_chars: config.word_chars(),
            total_words: 0,
            top: config.top,
            bottom: config.bottom,
        }
    }

    /// Tokenize `line` and count every word in it.
    pub fn feed_line(&mut self, line: &str) -> word_forest::Result<()> {
        for word in tokenize(line, self.word_chars) {
            self.tree.insert(&word)?;
            self.total_words += 1;
        }
        Ok(())
    }

    /// Count every line of `reader`. `source` names the input in errors.
    pub fn feed_reader<R: BufRead>(&mut self, reader: R, source: &Path) -> CliResult<()> {
        for line in reader.lines() {
            let line = line.map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => CliError::Encoding {
                    path: source.to_path_buf(),
                },
                _ => CliError::Io {
                    path: source.to_path_buf(),
                    source: err,
                },
            })?;
            self.feed_line(&line)?;
        }
        debug!(
            source = %source.display(),
            total = self.total_words,
            unique = self.tree.len(),
            "input consumed"
        );
        Ok(())
    }

    pub fn tree(&self) -> &WordTree {
        &self.tree
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn finish(&self) -> Report {
        let ranking = self.tree.ranking();
        Report::from_ranking(&ranking, self.total_words, self.top, self.bottom)
    }
}

/// Count `reader` under `config` and build the report.
///
/// A capacity error aborts the run: no partial report is produced.
pub fn count<R: BufRead>(reader: R, source: &Path, config: &RunConfig) -> CliResult<Report> {
    let started = Instant::now();
    let mut counter = WordCounter::new(config);
    counter.feed_reader(reader, source)?;
    let report = counter.finish();
    info!(
        total = report.total_words,
        unique = report.unique_words,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "counting run finished"
    );
    Ok(report)
}
