//! Arena record types.
//!
//! A word lives in two parallel arenas, the [`StringPool`](crate::StringPool)
//! entry table and the [`WordTree`](crate::WordTree) node table. Both are
//! addressed by the same [`WordId`], so the id is at once the pool key and the
//! tree node key. Links are `Option<WordId>`; `None` plays the role of id `0`.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

/// 1-based identifier of a distinct word.
///
/// Ids are handed out sequentially in order of first sight, starting at 1.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(NonZeroU32);

impl WordId {
    /// Id for the arena slot `index` (0-based), if it fits the id space.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index + 1)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// 0-based arena slot.
    #[inline]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// The raw 1-based id.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// String pool record: where the word's text sits in the arena and how often
/// it has been seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub count: u64,
}

/// Tree record: child links and subtree height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub l: Option<WordId>,
    pub r: Option<WordId>,
    /// Height of the subtree rooted here; a leaf is 0, an absent subtree -1.
    pub height: i32,
}

impl TreeNode {
    pub fn leaf() -> Self {
        Self {
            l: None,
            r: None,
            height: 0,
        }
    }
}

/// A word paired with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordCount<W = String> {
    pub word: W,
    pub count: u64,
}

impl<'a> WordCount<&'a str> {
    /// Copy the borrowed word out of the pool.
    pub fn into_owned(self) -> WordCount<String> {
        WordCount {
            word: self.word.to_string(),
            count: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_id_is_one_based() {
        let id = WordId::from_index(0).unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(id.index(), 0);
        assert_eq!(WordId::from_index(41).unwrap().get(), 42);
        assert_eq!(WordId::from_index(u32::MAX as usize), None);
    }

    #[test]
    fn absent_link_costs_nothing() {
        assert_eq!(
            std::mem::size_of::<Option<WordId>>(),
            std::mem::size_of::<u32>()
        );
    }
}
