use crate::types::{KeyNode, Node};

/// One AVL tree entry: key, child links and the cached subtree height.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Cached height of the subtree rooted here. A leaf has height 1;
    /// an absent subtree counts as 0.
    pub h: u32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }
}

/// AVL-specific node behavior: access to the cached subtree height.
pub trait AvlNodeLike<K>: KeyNode<K> {
    fn height(&self) -> u32;
    fn set_height(&mut self, h: u32);
}

impl<K> AvlNodeLike<K> for AvlNode<K> {
    fn height(&self) -> u32 {
        self.h
    }

    fn set_height(&mut self, h: u32) {
        self.h = h;
    }
}
