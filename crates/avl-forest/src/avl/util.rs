//! AVL balancing primitives as free functions over a node arena.
//!
//! All functions are generic over [`AvlNodeLike`] nodes addressed by
//! `u32` indices. Mutating entry points ([`insert_at`], [`remove_at`])
//! are the recursive descend-then-unwind formulation: the recursion
//! returns the possibly-new local subtree root and the caller re-links
//! it into the parent.

use std::fmt::{Debug, Display};
use std::mem;

use super::types::AvlNodeLike;

/// Height of an optional subtree: 0 when absent, the cached height
/// otherwise. O(1).
#[inline]
pub fn height<K, N>(arena: &[N], node: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    match node {
        None => 0,
        Some(i) => arena[i as usize].height(),
    }
}

/// `height(left) - height(right)` of a node. After any public operation
/// returns this lies in `{-1, 0, 1}`; transiently during rebalancing it
/// can reach ±2, which selects a rotation.
#[inline]
pub fn balance_factor<K, N>(arena: &[N], node: u32) -> i32
where
    N: AvlNodeLike<K>,
{
    let n = &arena[node as usize];
    height(arena, n.l()) as i32 - height(arena, n.r()) as i32
}

/// Recomputes a node's cached height from its children. Must run
/// bottom-up after any structural change, before balance is evaluated
/// at that level.
#[inline]
pub fn update_height<K, N>(arena: &mut [N], node: u32)
where
    N: AvlNodeLike<K>,
{
    let (l, r) = {
        let n = &arena[node as usize];
        (n.l(), n.r())
    };
    let h = 1 + height(arena, l).max(height(arena, r));
    arena[node as usize].set_height(h);
}

/// Right rotation around `n`. The left child is promoted to local root,
/// `n` becomes its right child and inherits the child's former right
/// subtree. Heights are refreshed demoted-node-first. Returns the new
/// local root.
pub fn rotate_right<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let l = arena[n as usize].l().expect("left child exists");
    let lr = arena[l as usize].r();
    arena[n as usize].set_l(lr);
    arena[l as usize].set_r(Some(n));
    update_height(arena, n);
    update_height(arena, l);
    l
}

/// Left rotation around `n`; mirror of [`rotate_right`].
pub fn rotate_left<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let r = arena[n as usize].r().expect("right child exists");
    let rl = arena[r as usize].l();
    arena[n as usize].set_r(rl);
    arena[r as usize].set_l(Some(n));
    update_height(arena, n);
    update_height(arena, r);
    r
}

/// Refreshes `n`'s height and, if the balance factor left the `[-1, 1]`
/// band, applies the matching single or double rotation. The child's
/// balance sign picks between them, which is correct for both the
/// insertion and the deletion unwind. Returns the local subtree root.
pub fn rebalance<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    update_height(arena, n);
    let bf = balance_factor(arena, n);

    if bf > 1 {
        let l = arena[n as usize].l().expect("left child exists");
        if balance_factor(arena, l) < 0 {
            let nl = rotate_left(arena, l);
            arena[n as usize].set_l(Some(nl));
        }
        return rotate_right(arena, n);
    }

    if bf < -1 {
        let r = arena[n as usize].r().expect("right child exists");
        if balance_factor(arena, r) > 0 {
            let nr = rotate_right(arena, r);
            arena[n as usize].set_r(Some(nr));
        }
        return rotate_left(arena, n);
    }

    n
}

/// Places a node into the arena, reusing a free-list slot when one is
/// available. Returns the slot index.
pub fn alloc<N>(arena: &mut Vec<N>, free: &mut Vec<u32>, node: N) -> u32 {
    match free.pop() {
        Some(i) => {
            arena[i as usize] = node;
            i
        }
        None => {
            arena.push(node);
            (arena.len() - 1) as u32
        }
    }
}

/// Recursive insertion into the subtree rooted at `node`.
///
/// Returns `(root, inserted)` where `root` is the possibly-new subtree
/// root index. A duplicate key is a no-op: nothing is allocated and
/// `inserted` is `false`.
pub fn insert_at<K, N, C, F>(
    arena: &mut Vec<N>,
    free: &mut Vec<u32>,
    node: Option<u32>,
    key: K,
    comparator: &C,
    new_node: &F,
) -> (u32, bool)
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
    F: Fn(K) -> N,
{
    let Some(i) = node else {
        return (alloc(arena, free, new_node(key)), true);
    };

    let cmp = comparator(&key, arena[i as usize].key());
    if cmp == 0 {
        return (i, false);
    }

    if cmp < 0 {
        let l = arena[i as usize].l();
        let (child, inserted) = insert_at(arena, free, l, key, comparator, new_node);
        arena[i as usize].set_l(Some(child));
        if !inserted {
            return (i, false);
        }
    } else {
        let r = arena[i as usize].r();
        let (child, inserted) = insert_at(arena, free, r, key, comparator, new_node);
        arena[i as usize].set_r(Some(child));
        if !inserted {
            return (i, false);
        }
    }

    (rebalance(arena, i), true)
}

/// Index of the smallest key in the subtree rooted at `node`.
pub fn min_index<K, N>(arena: &[N], mut node: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    while let Some(l) = arena[node as usize].l() {
        node = l;
    }
    node
}

/// Swaps the keys of two distinct arena slots without touching links or
/// heights. Used by two-child deletion in place of a key copy, so `K`
/// needs no `Clone` bound.
pub fn swap_keys<K, N>(arena: &mut [N], a: u32, b: u32)
where
    N: AvlNodeLike<K>,
{
    debug_assert_ne!(a, b);
    let (lo, hi) = if a < b {
        (a as usize, b as usize)
    } else {
        (b as usize, a as usize)
    };
    let (head, tail) = arena.split_at_mut(hi);
    mem::swap(head[lo].key_mut(), tail[0].key_mut());
}

/// Recursive removal of `key` from the subtree rooted at `node`.
///
/// Returns `(root, removed)`. An absent key is a no-op and reports
/// `removed == false`. The physically removed slot is pushed onto the
/// free list exactly once.
///
/// The two-children case swaps the node's key with its in-order
/// successor (minimum of the right subtree) and then deletes the key
/// from the right subtree; the descent re-finds it at the successor's
/// old slot because the key sorts below everything else there.
pub fn remove_at<K, N, C>(
    arena: &mut Vec<N>,
    free: &mut Vec<u32>,
    node: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, bool)
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(i) = node else {
        return (None, false);
    };

    let cmp = comparator(key, arena[i as usize].key());
    if cmp < 0 {
        let l = arena[i as usize].l();
        let (child, removed) = remove_at(arena, free, l, key, comparator);
        arena[i as usize].set_l(child);
        if !removed {
            return (Some(i), false);
        }
    } else if cmp > 0 {
        let r = arena[i as usize].r();
        let (child, removed) = remove_at(arena, free, r, key, comparator);
        arena[i as usize].set_r(child);
        if !removed {
            return (Some(i), false);
        }
    } else {
        let l = arena[i as usize].l();
        let r = arena[i as usize].r();
        match (l, r) {
            (None, child) | (child, None) => {
                free.push(i);
                return (child, true);
            }
            (Some(_), Some(r)) => {
                let s = min_index(arena, r);
                swap_keys(arena, i, s);
                let (child, removed) = remove_at(arena, free, Some(r), key, comparator);
                debug_assert!(removed);
                arena[i as usize].set_r(child);
            }
        }
    }

    (Some(rebalance(arena, i)), true)
}

/// Iterative BST descent. Returns the arena index holding `key`, if any.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            arena[i as usize].l()
        } else {
            arena[i as usize].r()
        };
    }
    None
}

fn real_height<K, N>(arena: &[N], node: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    match node {
        None => 0,
        Some(i) => {
            let l = real_height(arena, arena[i as usize].l());
            let r = real_height(arena, arena[i as usize].r());
            1 + l.max(r)
        }
    }
}

/// Validates the three structural invariants of an AVL subtree:
/// cached heights match recomputed heights, every balance factor lies
/// in `[-1, 1]`, and an in-order walk yields strictly ascending keys.
pub fn assert_avl_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    fn check_heights<K, N>(arena: &[N], node: u32) -> Result<u32, String>
    where
        N: AvlNodeLike<K>,
    {
        let l = arena[node as usize].l();
        let r = arena[node as usize].r();
        let lh = match l {
            Some(l) => check_heights(arena, l)?,
            None => 0,
        };
        let rh = match r {
            Some(r) => check_heights(arena, r)?,
            None => 0,
        };
        let expected = 1 + lh.max(rh);
        let cached = arena[node as usize].height();
        if cached != expected {
            return Err(format!(
                "Cached height mismatch at node {node}: expected {expected}, got {cached}"
            ));
        }
        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at node {node}: bf={bf}"));
        }
        Ok(expected)
    }

    fn check_order<K, N, C>(
        arena: &[N],
        node: u32,
        prev: &mut Option<u32>,
        comparator: &C,
    ) -> Result<(), String>
    where
        N: AvlNodeLike<K>,
        C: Fn(&K, &K) -> i32,
    {
        if let Some(l) = arena[node as usize].l() {
            check_order(arena, l, prev, comparator)?;
        }
        if let Some(p) = *prev {
            let cmp = comparator(arena[p as usize].key(), arena[node as usize].key());
            if cmp >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        *prev = Some(node);
        if let Some(r) = arena[node as usize].r() {
            check_order(arena, r, prev, comparator)?;
        }
        Ok(())
    }

    let Some(root) = root else {
        return Ok(());
    };

    check_heights(arena, root)?;
    let mut prev = None;
    check_order(arena, root, &mut prev, comparator)
}

/// Renders a subtree as a parenthesized pre-order expression, for
/// example `(10 (5) (20))`. An absent subtree renders as the empty
/// string.
pub fn pre_order_string<K, N>(arena: &[N], node: Option<u32>) -> String
where
    K: Display,
    N: AvlNodeLike<K>,
{
    let Some(i) = node else {
        return String::new();
    };
    let n = &arena[i as usize];
    let mut out = format!("({}", n.key());
    if n.l().is_some() {
        out.push(' ');
        out.push_str(&pre_order_string::<K, N>(arena, n.l()));
    }
    if n.r().is_some() {
        out.push(' ');
        out.push_str(&pre_order_string::<K, N>(arena, n.r()));
    }
    out.push(')');
    out
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.key()
            )
        }
    }
}
