//! Report assembly and rendering.

use serde::Serialize;
use word_forest::{Ranking, WordCount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of distinct words.
    pub unique_words: usize,
    /// Number of words read, repeats included.
    pub total_words: u64,
    pub top: Vec<WordCount>,
    pub bottom: Vec<WordCount>,
    pub unique: Vec<WordCount>,
}

impl Report {
    pub fn from_ranking(ranking: &Ranking<'_>, total_words: u64, top: usize, bottom: usize) -> Self {
        Self {
            unique_words: ranking.len(),
            total_words,
            top: owned(ranking.top(top)),
            bottom: owned(ranking.bottom(bottom)),
            unique: owned(ranking.unique()),
        }
    }
}

fn owned(entries: Vec<WordCount<&str>>) -> Vec<WordCount> {
    entries.into_iter().map(WordCount::into_owned).collect()
}

fn push_entries(out: &mut String, entries: &[WordCount]) {
    for wc in entries {
        let unit = if wc.count == 1 { "time" } else { "times" };
        out.push_str(&format!(
            "The word: {} occurs {} {unit}.\n",
            wc.word, wc.count
        ));
    }
}

/// Plain-text report: most frequent, least frequent, then unique words.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "The first {} words sorted alphabetically within frequency:\n",
        report.top.len()
    ));
    push_entries(&mut out, &report.top);

    out.push_str(&format!(
        "\nThe last {} words sorted alphabetically within frequency:\n",
        report.bottom.len()
    ));
    push_entries(&mut out, &report.bottom);

    out.push_str("\nThe unique words sorted alphabetically:\n");
    push_entries(&mut out, &report.unique);

    out
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
