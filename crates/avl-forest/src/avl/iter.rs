//! Lazy traversal iterators.
//!
//! All three orders walk the arena with an explicit stack (the nodes
//! carry no parent links), borrow the tree immutably and are
//! restartable: asking the tree for a new iterator always starts from
//! the beginning. Depth of the stack is bounded by the tree height,
//! which the AVL invariant keeps logarithmic.

use super::tree::AvlTree;

/// Traversal order selector for [`AvlTree::traverse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Ascending key order.
    InOrder,
    /// Node before its subtrees.
    PreOrder,
    /// Subtrees before the node.
    PostOrder,
}

/// In-order iterator: left subtree, node, right subtree.
pub struct InOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a AvlTree<K, C>,
    stack: Vec<u32>,
    curr: Option<u32>,
}

impl<'a, K, C> InOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<K, C>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            curr: tree.root,
        }
    }
}

impl<'a, K, C> Iterator for InOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.curr {
            self.stack.push(i);
            self.curr = self.tree.arena[i as usize].l;
        }
        let i = self.stack.pop()?;
        self.curr = self.tree.arena[i as usize].r;
        Some(&self.tree.arena[i as usize].k)
    }
}

/// Pre-order iterator: node, left subtree, right subtree.
pub struct PreOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a AvlTree<K, C>,
    stack: Vec<u32>,
}

impl<'a, K, C> PreOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<K, C>) -> Self {
        Self {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'a, K, C> Iterator for PreOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let n = &self.tree.arena[i as usize];
        if let Some(r) = n.r {
            self.stack.push(r);
        }
        if let Some(l) = n.l {
            self.stack.push(l);
        }
        Some(&n.k)
    }
}

/// Post-order iterator: left subtree, right subtree, node.
///
/// Stack entries carry an expanded flag; a node is yielded only the
/// second time it surfaces, after both subtrees have been pushed.
pub struct PostOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a AvlTree<K, C>,
    stack: Vec<(u32, bool)>,
}

impl<'a, K, C> PostOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<K, C>) -> Self {
        Self {
            tree,
            stack: tree.root.into_iter().map(|i| (i, false)).collect(),
        }
    }
}

impl<'a, K, C> Iterator for PostOrderIter<'a, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&self.tree.arena[i as usize].k);
            }
            self.stack.push((i, true));
            let n = &self.tree.arena[i as usize];
            if let Some(r) = n.r {
                self.stack.push((r, false));
            }
            if let Some(l) = n.l {
                self.stack.push((l, false));
            }
        }
        None
    }
}
