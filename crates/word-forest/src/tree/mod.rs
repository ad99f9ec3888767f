//! AVL-balanced word index.
//!
//! Nodes live in a `Vec<TreeNode>` arena that runs parallel to the
//! [`StringPool`] entry table: node `id` describes pool entry `id`. Keys are
//! never stored in the nodes, every comparison goes through the pool.

pub mod util;

use std::cmp::Ordering;

use crate::capacity::Capacity;
use crate::error::Result;
use crate::pool::StringPool;
use crate::types::{TreeNode, WordId};

use self::util::{
    balance, double_left, double_right, height, rotate_left, rotate_right, update_height,
};

#[derive(Debug)]
pub struct WordTree {
    pool: StringPool,
    nodes: Vec<TreeNode>,
    root: Option<WordId>,
}

impl WordTree {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            pool: StringPool::new(capacity),
            nodes: Vec::with_capacity(capacity.prealloc_words()),
            root: None,
        }
    }

    /// Count one occurrence of `word`.
    ///
    /// The first occurrence interns the word and links a new leaf, rebalancing
    /// on the way back up; later occurrences only bump the counter. Returns the
    /// word's id either way.
    ///
    /// Fails with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded)
    /// when a new word does not fit; the tree is left as it was.
    pub fn insert(&mut self, word: &str) -> Result<WordId> {
        let (root, id) = self.insert_at(self.root, word)?;
        self.root = Some(root);
        Ok(id)
    }

    /// Returns `(new subtree root, id of word)`.
    fn insert_at(&mut self, node: Option<WordId>, word: &str) -> Result<(WordId, WordId)> {
        let Some(node) = node else {
            let id = self.pool.intern(word)?;
            debug_assert_eq!(id.index(), self.nodes.len());
            self.nodes.push(TreeNode::leaf());
            return Ok((id, id));
        };

        let (node, id) = match self.pool.compare(node, word) {
            Ordering::Equal => {
                self.pool.increment(node);
                return Ok((node, node));
            }
            // word < node
            Ordering::Greater => {
                let (l, id) = self.insert_at(self.nodes[node.index()].l, word)?;
                self.nodes[node.index()].l = Some(l);
                if balance(&self.nodes, node) == 2 {
                    if self.pool.compare(l, word) == Ordering::Greater {
                        (rotate_right(&mut self.nodes, node), id)
                    } else {
                        (double_right(&mut self.nodes, node), id)
                    }
                } else {
                    (node, id)
                }
            }
            // word > node
            Ordering::Less => {
                let (r, id) = self.insert_at(self.nodes[node.index()].r, word)?;
                self.nodes[node.index()].r = Some(r);
                if balance(&self.nodes, node) == -2 {
                    if self.pool.compare(r, word) == Ordering::Less {
                        (rotate_left(&mut self.nodes, node), id)
                    } else {
                        (double_left(&mut self.nodes, node), id)
                    }
                } else {
                    (node, id)
                }
            }
        };

        update_height(&mut self.nodes, node);
        Ok((node, id))
    }

    /// Id of `word`, if it has been inserted.
    pub fn get(&self, word: &str) -> Option<WordId> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match self.pool.compare(i, word) {
                Ordering::Equal => return Some(i),
                Ordering::Greater => self.nodes[i.index()].l,
                Ordering::Less => self.nodes[i.index()].r,
            };
        }
        None
    }

    /// Occurrences of `word` so far; 0 if never seen.
    pub fn count_of(&self, word: &str) -> u64 {
        self.get(word).map_or(0, |id| self.pool.count(id))
    }

    pub fn word_text(&self, id: WordId) -> &str {
        self.pool.word_text(id)
    }

    pub fn count(&self, id: WordId) -> u64 {
        self.pool.count(id)
    }

    pub fn node(&self, id: WordId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    pub fn root(&self) -> Option<WordId> {
        self.root
    }

    /// Height of the whole tree; -1 when empty.
    pub fn height(&self) -> i32 {
        height(&self.nodes, self.root)
    }

    /// Number of distinct words (= nodes).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn pool(&self) -> &StringPool {
        &self.pool
    }

    pub fn capacity(&self) -> Capacity {
        self.pool.capacity()
    }

    pub(crate) fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        if self.nodes.len() != self.pool.len() {
            return Err(format!(
                "Arena mismatch: {} nodes for {} pool entries",
                self.nodes.len(),
                self.pool.len()
            ));
        }
        util::assert_avl_tree(&self.nodes, self.root, &self.pool)
    }

    /// Debug rendering of the tree shape.
    pub fn print(&self) -> String {
        util::print(&self.nodes, &self.pool, self.root, "")
    }
}

impl Default for WordTree {
    fn default() -> Self {
        Self::new(Capacity::default())
    }
}
