//! Append-only string pool.
//!
//! Every distinct word is written once into a single `String` arena and
//! addressed afterwards by its [`WordId`]. The pool also owns the per-word
//! occurrence counters and is the only place words are compared.

use std::cmp::Ordering;

use tracing::debug;

use crate::capacity::Capacity;
use crate::error::{CapacityKind, Error, Result};
use crate::types::{PoolEntry, WordId};

#[derive(Debug)]
pub struct StringPool {
    arena: String,
    entries: Vec<PoolEntry>,
    num_chars: usize,
    capacity: Capacity,
}

impl StringPool {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            arena: String::with_capacity(capacity.prealloc_bytes()),
            entries: Vec::with_capacity(capacity.prealloc_words()),
            num_chars: 0,
            capacity,
        }
    }

    /// Store `word` as a new entry with a count of 1.
    ///
    /// Both bounds are checked before anything is written, so a failed call
    /// leaves the pool untouched.
    pub fn intern(&mut self, word: &str) -> Result<WordId> {
        let word_limit = self.capacity.word_limit();
        let id = match WordId::from_index(self.entries.len()) {
            Some(id) if self.entries.len() < word_limit => id,
            _ => {
                debug!(limit = word_limit, "word table full");
                return Err(Error::CapacityExceeded {
                    kind: CapacityKind::Words,
                    limit: self.capacity.max_unique_words,
                });
            }
        };

        let len = word.chars().count();
        let char_limit = self.capacity.max_total_characters;
        if self.num_chars.saturating_add(len) > char_limit {
            debug!(limit = char_limit, used = self.num_chars, len, "character arena full");
            return Err(Error::CapacityExceeded {
                kind: CapacityKind::Characters,
                limit: char_limit,
            });
        }

        let start = self.arena.len();
        self.arena.push_str(word);
        self.entries.push(PoolEntry {
            start,
            end: self.arena.len(),
            count: 1,
        });
        self.num_chars += len;
        Ok(id)
    }

    pub fn increment(&mut self, id: WordId) {
        self.entries[id.index()].count += 1;
    }

    /// Ordering of the stored word for `id` relative to `word`.
    ///
    /// Plain lexicographic order by code point, the shorter string first when
    /// one is a prefix of the other. UTF-8 byte order agrees with code point
    /// order, so the stored bytes are compared directly.
    pub fn compare(&self, id: WordId, word: &str) -> Ordering {
        self.word_text(id).as_bytes().cmp(word.as_bytes())
    }

    /// Ordering of two stored words.
    pub fn compare_ids(&self, a: WordId, b: WordId) -> Ordering {
        self.compare(a, self.word_text(b))
    }

    pub fn word_text(&self, id: WordId) -> &str {
        let entry = &self.entries[id.index()];
        &self.arena[entry.start..entry.end]
    }

    pub fn count(&self, id: WordId) -> u64 {
        self.entries[id.index()].count
    }

    pub fn entry(&self, id: WordId) -> &PoolEntry {
        &self.entries[id.index()]
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Characters written to the arena so far.
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// All entries in id order (order of first sight).
    pub fn entries(&self) -> impl Iterator<Item = (WordId, &str, u64)> + '_ {
        self.entries.iter().enumerate().filter_map(move |(i, e)| {
            WordId::from_index(i).map(|id| (id, &self.arena[e.start..e.end], e.count))
        })
    }
}
