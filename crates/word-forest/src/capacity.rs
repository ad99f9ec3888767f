use serde::{Deserialize, Serialize};

/// Upper bound on the arena bytes reserved up front.
const MAX_PREALLOC_BYTES: usize = 1 << 20;
/// Upper bound on the entries (and nodes) reserved up front.
const MAX_PREALLOC_WORDS: usize = 1 << 16;

/// Construction-time bounds of a counting run.
///
/// Neither bound ever grows. Callers that need more room build a new
/// [`WordTree`](crate::WordTree) with larger bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacity {
    /// Maximum number of distinct words.
    pub max_unique_words: usize,
    /// Maximum number of characters across all distinct words.
    pub max_total_characters: usize,
}

impl Capacity {
    pub const DEFAULT_MAX_UNIQUE_WORDS: usize = 50_000;
    pub const DEFAULT_MAX_TOTAL_CHARACTERS: usize = 500_000;

    pub fn new(max_unique_words: usize, max_total_characters: usize) -> Self {
        Self {
            max_unique_words,
            max_total_characters,
        }
    }

    /// Effective word bound, clamped to the id space.
    pub(crate) fn word_limit(&self) -> usize {
        self.max_unique_words.min(u32::MAX as usize - 1)
    }

    /// Entries to reserve in the pool table and the node arena.
    pub(crate) fn prealloc_words(&self) -> usize {
        self.word_limit().min(MAX_PREALLOC_WORDS)
    }

    /// Bytes to reserve in the character arena.
    pub(crate) fn prealloc_bytes(&self) -> usize {
        self.max_total_characters.min(MAX_PREALLOC_BYTES)
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_UNIQUE_WORDS,
            Self::DEFAULT_MAX_TOTAL_CHARACTERS,
        )
    }
}
