//! AVL tree family: node type, balancing utilities, tree handle and
//! traversal iterators.

pub mod iter;
pub mod tree;
pub mod types;
pub mod util;

pub use iter::{InOrderIter, PostOrderIter, PreOrderIter, Traversal};
pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
