//! Alphabetical traversal and frequency ranking.
//!
//! Ranking is two passes: an in-order walk yields ids alphabetically, then a
//! stable merge sort reorders them by descending count. Because the merge
//! keeps ties in input order, words with equal counts stay alphabetical
//! without ever comparing their text again.

use word_freq_util::sort::merge_sort_by;

use crate::tree::util::in_order;
use crate::tree::WordTree;
use crate::types::{WordCount, WordId};

impl WordTree {
    /// All ids in ascending word order.
    pub fn flatten_alphabetical(&self) -> Vec<WordId> {
        in_order(self.nodes(), self.root())
    }

    /// Sort `ids` by descending count, keeping the existing order of ties.
    pub fn rank_by_frequency(&self, ids: &mut [WordId]) {
        let pool = self.pool();
        merge_sort_by(ids, |a, b| pool.count(*b).cmp(&pool.count(*a)));
    }

    /// Flatten and rank in one go.
    pub fn ranking(&self) -> Ranking<'_> {
        let mut ids = self.flatten_alphabetical();
        self.rank_by_frequency(&mut ids);
        Ranking { tree: self, ids }
    }
}

/// Words ordered by descending frequency, alphabetical within a frequency.
///
/// Borrows the tree, so no insertion can happen while a ranking is alive.
#[derive(Debug)]
pub struct Ranking<'a> {
    tree: &'a WordTree,
    ids: Vec<WordId>,
}

impl<'a> Ranking<'a> {
    fn entry(&self, id: WordId) -> WordCount<&'a str> {
        WordCount {
            word: self.tree.word_text(id),
            count: self.tree.count(id),
        }
    }

    /// The `k` most frequent words. Fewer when there are fewer words.
    pub fn top(&self, k: usize) -> Vec<WordCount<&'a str>> {
        self.ids.iter().take(k).map(|&id| self.entry(id)).collect()
    }

    /// The `k` least frequent words, in ranked order (not reversed).
    pub fn bottom(&self, k: usize) -> Vec<WordCount<&'a str>> {
        let from = self.ids.len().saturating_sub(k);
        self.ids[from..].iter().map(|&id| self.entry(id)).collect()
    }

    /// Words seen exactly once, alphabetically.
    pub fn unique(&self) -> Vec<WordCount<&'a str>> {
        self.iter().filter(|wc| wc.count == 1).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = WordCount<&'a str>> + '_ {
        self.ids.iter().map(|&id| self.entry(id))
    }

    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
