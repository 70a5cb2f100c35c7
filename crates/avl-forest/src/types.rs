//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! Tree-manipulation functions take the arena as a slice (or `Vec` when
//! they allocate) and work with indices, so a node type only has to
//! expose its links and key through these traits.

/// Binary-tree links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by tree structures.
///
/// Returns a negative value, zero, or a positive value when the first
/// key sorts before, equal to, or after the second.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Keyed node interface used by search-tree structures.
///
/// `key_mut` exists so deletion can swap keys between two arena slots
/// without requiring `K: Clone`.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn key_mut(&mut self) -> &mut K;
}
