use std::fmt::{Debug, Display};

use super::iter::{InOrderIter, PostOrderIter, PreOrderIter, Traversal};
use super::types::AvlNode;
use super::util;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// AVL tree of unique keys backed by an index arena.
///
/// The handle owns the arena, the free list of recycled slots and the
/// root index. Every public operation leaves the tree balanced and in
/// BST order; duplicate insertion and absent-key removal are no-ops
/// reported through the `bool` return values.
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) arena: Vec<AvlNode<K>>,
    pub(crate) root: Option<u32>,
    free: Vec<u32>,
    comparator: C,
    len: usize,
}

impl<K> AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            free: Vec::new(),
            comparator,
            len: 0,
        }
    }

    /// Inserts `key`. Returns `false` (and leaves the tree untouched)
    /// when the key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = util::insert_at(
            &mut self.arena,
            &mut self.free,
            self.root,
            key,
            &self.comparator,
            &AvlNode::new,
        );
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key`. Returns `false` when the key is absent; that is
    /// not an error and the tree is unchanged.
    pub fn remove(&mut self, key: &K) -> bool {
        let (root, removed) = util::remove_at(
            &mut self.arena,
            &mut self.free,
            self.root,
            key,
            &self.comparator,
        );
        self.root = root;
        if removed {
            self.len -= 1;
        }
        if self.root.is_none() {
            // Whole-tree teardown: drop dead slots instead of carrying
            // an all-free arena forward.
            self.arena.clear();
            self.free.clear();
        }
        removed
    }

    /// Stable arena index of `key`, if present.
    pub fn find(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    /// Height of the whole tree; 0 when empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        util::height(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Lazy in-order iterator; yields keys in ascending order.
    pub fn iter(&self) -> InOrderIter<'_, K, C> {
        InOrderIter::new(self)
    }

    /// Lazy pre-order iterator (node before its subtrees).
    pub fn iter_pre_order(&self) -> PreOrderIter<'_, K, C> {
        PreOrderIter::new(self)
    }

    /// Lazy post-order iterator (subtrees before the node).
    pub fn iter_post_order(&self) -> PostOrderIter<'_, K, C> {
        PostOrderIter::new(self)
    }

    /// Unified traversal entry point for order-driven callers.
    pub fn traverse(&self, order: Traversal) -> Box<dyn Iterator<Item = &K> + '_> {
        match order {
            Traversal::InOrder => Box::new(self.iter()),
            Traversal::PreOrder => Box::new(self.iter_pre_order()),
            Traversal::PostOrder => Box::new(self.iter_post_order()),
        }
    }

    /// Checks BST order, the AVL balance bound and cached-height
    /// consistency over the whole tree.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)
    }
}

impl<K, C> AvlTree<K, C>
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    /// Parenthesized pre-order rendering, e.g. `(10 (5) (20))`.
    pub fn pre_order_string(&self) -> String {
        util::pre_order_string(&self.arena, self.root)
    }
}

impl<K, C> AvlTree<K, C>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    /// Multi-line debug rendering of the node structure.
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = InOrderIter<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
