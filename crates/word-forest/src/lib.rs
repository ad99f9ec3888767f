//! Arena-based AVL word index.
//!
//! Counts word occurrences and ranks words by descending frequency, breaking
//! ties alphabetically. Three arenas cooperate:
//!
//! - **String pool** ([`StringPool`]): one append-only `String` holding every
//!   distinct word once, plus a per-word entry table with offsets and counts.
//! - **Index tree** ([`WordTree`]): AVL-balanced BST whose node table runs
//!   parallel to the pool entries. Node `id` and entry `id` describe the same
//!   word.
//! - **Ranking** ([`Ranking`]): in-order ids re-sorted by a stable merge sort
//!   on count, with top / bottom / unique queries.
//!
//! Instead of pointers, links are `Option<WordId>` indices into the arenas.
//! Both arenas have fixed bounds ([`Capacity`]); running out is an error, not
//! a reallocation.
//!
//! ```
//! use word_forest::{Capacity, WordTree};
//!
//! let mut tree = WordTree::new(Capacity::default());
//! for word in ["a", "a", "b", "b", "c"] {
//!     tree.insert(word)?;
//! }
//! let ranking = tree.ranking();
//! let top: Vec<(&str, u64)> = ranking.top(3).into_iter().map(|wc| (wc.word, wc.count)).collect();
//! assert_eq!(top, vec![("a", 2), ("b", 2), ("c", 1)]);
//! # Ok::<(), word_forest::Error>(())
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`WordId`], [`PoolEntry`], [`TreeNode`], [`WordCount`] |
//! [`pool`] | [`StringPool`]: interning, counting, comparison |
//! [`tree`] | [`WordTree`]: recursive insert with AVL rebalancing |
//! [`tree::util`] | rotations, validation, debug printer |
//! [`rank`] | traversal, stable ranking, [`Ranking`] queries |

pub mod capacity;
pub mod error;
pub mod pool;
pub mod rank;
pub mod tree;
pub mod types;

pub use capacity::Capacity;
pub use error::{CapacityKind, Error, Result};
pub use pool::StringPool;
pub use rank::Ranking;
pub use tree::WordTree;
pub use types::{PoolEntry, TreeNode, WordCount, WordId};
