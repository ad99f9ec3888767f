//! Height-based AVL rotations over the node arena.
//!
//! All functions take the arena as a slice and work with [`WordId`]s; a
//! rotation returns the id of the node that now roots the rotated subtree and
//! leaves reattaching it to the parent to the caller.

use std::cmp::Ordering;

use tracing::trace;

use crate::pool::StringPool;
use crate::types::{TreeNode, WordId};

#[inline]
fn l(arena: &[TreeNode], i: WordId) -> Option<WordId> {
    arena[i.index()].l
}

#[inline]
fn r(arena: &[TreeNode], i: WordId) -> Option<WordId> {
    arena[i.index()].r
}

#[inline]
fn set_l(arena: &mut [TreeNode], i: WordId, v: Option<WordId>) {
    arena[i.index()].l = v;
}

#[inline]
fn set_r(arena: &mut [TreeNode], i: WordId, v: Option<WordId>) {
    arena[i.index()].r = v;
}

/// Height of a possibly absent subtree; `None` is -1.
#[inline]
pub(crate) fn height(arena: &[TreeNode], node: Option<WordId>) -> i32 {
    node.map_or(-1, |i| arena[i.index()].height)
}

/// `height(left) - height(right)` of `node`.
#[inline]
pub(crate) fn balance(arena: &[TreeNode], node: WordId) -> i32 {
    height(arena, l(arena, node)) - height(arena, r(arena, node))
}

#[inline]
pub(crate) fn update_height(arena: &mut [TreeNode], node: WordId) {
    let h = height(arena, l(arena, node)).max(height(arena, r(arena, node))) + 1;
    arena[node.index()].height = h;
}

/// Promote the left child of `n`.
///
/// ```text
///       n            nl
///      / \          /  \
///     nl  c   =>   a    n
///    /  \              / \
///   a   nlr          nlr  c
/// ```
pub(crate) fn rotate_right(arena: &mut [TreeNode], n: WordId) -> WordId {
    let Some(nl) = l(arena, n) else {
        return n;
    };
    trace!(node = %n, promoted = %nl, "rotate right");
    let nlr = r(arena, nl);
    set_l(arena, n, nlr);
    set_r(arena, nl, Some(n));
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Promote the right child of `n`. Mirror of [`rotate_right`].
pub(crate) fn rotate_left(arena: &mut [TreeNode], n: WordId) -> WordId {
    let Some(nr) = r(arena, n) else {
        return n;
    };
    trace!(node = %n, promoted = %nr, "rotate left");
    let nrl = l(arena, nr);
    set_r(arena, n, nrl);
    set_l(arena, nr, Some(n));
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Left-right case: rotate the left child left, then `n` right.
pub(crate) fn double_right(arena: &mut [TreeNode], n: WordId) -> WordId {
    if let Some(nl) = l(arena, n) {
        let nl = rotate_left(arena, nl);
        set_l(arena, n, Some(nl));
    }
    rotate_right(arena, n)
}

/// Right-left case: rotate the right child right, then `n` left.
pub(crate) fn double_left(arena: &mut [TreeNode], n: WordId) -> WordId {
    if let Some(nr) = r(arena, n) {
        let nr = rotate_right(arena, nr);
        set_r(arena, n, Some(nr));
    }
    rotate_left(arena, n)
}

/// Check links, stored heights, the AVL balance bound and key order.
pub fn assert_avl_tree(
    arena: &[TreeNode],
    root: Option<WordId>,
    pool: &StringPool,
) -> Result<(), String> {
    fn validate(arena: &[TreeNode], node: WordId, seen: &mut [bool]) -> Result<i32, String> {
        let Some(slot) = seen.get_mut(node.index()) else {
            return Err(format!("Node {node} outside the arena"));
        };
        if *slot {
            return Err(format!("Node {node} reachable twice"));
        }
        *slot = true;

        let lh = match l(arena, node) {
            Some(i) => validate(arena, i, seen)?,
            None => -1,
        };
        let rh = match r(arena, node) {
            Some(i) => validate(arena, i, seen)?,
            None => -1,
        };
        let expected = lh.max(rh) + 1;
        let actual = arena[node.index()].height;
        if actual != expected {
            return Err(format!(
                "Height mismatch at {node}: expected {expected}, got {actual}"
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated at {node}: {lh} vs {rh}"));
        }
        Ok(expected)
    }

    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err("Empty root over a non-empty arena".to_string())
        };
    };

    let mut seen = vec![false; arena.len()];
    validate(arena, root, &mut seen)?;
    if let Some(i) = seen.iter().position(|s| !s) {
        return Err(format!("Node {} unreachable from the root", i + 1));
    }

    let order = in_order(arena, Some(root));
    for pair in order.windows(2) {
        if pool.compare_ids(pair[0], pair[1]) != Ordering::Less {
            return Err(format!(
                "Node order violated: {:?} before {:?}",
                pool.word_text(pair[0]),
                pool.word_text(pair[1])
            ));
        }
    }

    Ok(())
}

/// In-order walk with an explicit stack.
pub(crate) fn in_order(arena: &[TreeNode], root: Option<WordId>) -> Vec<WordId> {
    let mut out = Vec::with_capacity(arena.len());
    let mut stack: Vec<WordId> = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = l(arena, i);
        }
        let Some(i) = stack.pop() else {
            break;
        };
        out.push(i);
        curr = r(arena, i);
    }
    out
}

/// Debug printer for the word tree.
pub fn print(arena: &[TreeNode], pool: &StringPool, node: Option<WordId>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i.index()];
            let left = print(arena, pool, n.l, &format!("{tab}  "));
            let right = print(arena, pool, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} = {} }}\n{tab}L={left}\n{tab}R={right}",
                n.height,
                pool.word_text(i),
                pool.count(i)
            )
        }
    }
}
