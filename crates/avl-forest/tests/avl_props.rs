//! Property tests for the reachable-state invariants: sortedness of the
//! in-order walk, the AVL height bound and set semantics against a
//! `BTreeSet` model.

use std::collections::BTreeSet;

use avl_forest::AvlTree;
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_order_is_strictly_ascending(keys in proptest::collection::vec(any::<i32>(), 0..300)) {
        let mut tree = AvlTree::new();
        for k in keys {
            tree.insert(k);
        }
        let walked: Vec<i32> = tree.iter().copied().collect();
        for pair in walked.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(tree.assert_valid().is_ok());
    }

    #[test]
    fn height_bound_holds_for_any_insertion_order(keys in proptest::collection::vec(any::<i64>(), 1..500)) {
        let mut tree = AvlTree::new();
        for k in keys {
            tree.insert(k);
        }
        let n = tree.len() as f64;
        prop_assert!(f64::from(tree.height()) <= 1.44 * (n + 2.0).log2());
    }

    #[test]
    fn behaves_like_a_set(ops in proptest::collection::vec((any::<bool>(), 0i32..64), 0..600)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for (is_insert, key) in ops {
            if is_insert {
                prop_assert_eq!(tree.insert(key), model.insert(key));
            } else {
                prop_assert_eq!(tree.remove(&key), model.remove(&key));
            }
        }

        prop_assert_eq!(tree.len(), model.len());
        let got: Vec<i32> = tree.iter().copied().collect();
        let want: Vec<i32> = model.into_iter().collect();
        prop_assert_eq!(got, want);
        prop_assert!(tree.assert_valid().is_ok());
    }

    #[test]
    fn inserted_keys_stay_found_until_deleted(keys in proptest::collection::btree_set(any::<i16>(), 1..150)) {
        let keys: Vec<i16> = keys.into_iter().collect();
        let mut tree = AvlTree::new();
        for &k in &keys {
            tree.insert(k);
            prop_assert!(tree.contains(&k));
        }

        let (gone, kept) = keys.split_at(keys.len() / 2);
        for k in gone {
            prop_assert!(tree.remove(k));
            prop_assert!(!tree.contains(k));
        }
        for k in kept {
            prop_assert!(tree.contains(k));
        }
        prop_assert!(tree.assert_valid().is_ok());
    }
}
