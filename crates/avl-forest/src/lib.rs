//! Arena-based self-balancing AVL tree.
//!
//! Nodes live in a `Vec`-backed arena and all "pointers" are
//! `Option<u32>` indices into it, so the tree owns its whole node graph
//! through a single allocation and rotations are plain index surgery.
//! Slots freed by deletion are recycled through an internal free list.
//!
//! The balancing algorithm is the classic recursive formulation: descend
//! to the mutation point, then on the way back up recompute each node's
//! cached subtree height and rotate wherever the height difference of the
//! two children exceeds one. This keeps the tree height logarithmic in
//! the number of keys, so lookups, insertions and deletions are all
//! O(log n) in the worst case.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`KeyNode`] link/key traits |
//! | [`avl::types`] | [`AvlNode`] and the [`AvlNodeLike`] trait |
//! | [`avl::util`] | height/balance utilities, rotations, insert/remove |
//! | [`avl::tree`] | the [`AvlTree`] handle owning the arena |
//! | [`avl::iter`] | lazy in-/pre-/post-order iterators |
//!
//! # Example
//!
//! ```
//! use avl_forest::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for k in [10, 20, 30] {
//!     tree.insert(k);
//! }
//! assert!(tree.contains(&20));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//! assert_eq!(tree.height(), 2);
//! tree.assert_valid().unwrap();
//! ```

pub mod avl;
pub mod types;

pub use avl::iter::Traversal;
pub use avl::tree::AvlTree;
pub use avl::types::{AvlNode, AvlNodeLike};
pub use types::{Comparator, KeyNode, Node};
