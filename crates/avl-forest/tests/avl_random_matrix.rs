//! Randomized operation sequences under a fixed seed, checked against a
//! `BTreeSet` model with the structural validator run along the way.

use std::collections::BTreeSet;

use avl_forest::AvlTree;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[test]
fn random_insert_delete_churn_holds_invariants() {
    let mut rng = Xoshiro256StarStar::from_seed([7u8; 32]);
    let mut tree = AvlTree::new();
    let mut model = BTreeSet::new();

    for step in 0..5000 {
        let key: i32 = rng.gen_range(0..256);
        if rng.gen_bool(0.6) {
            assert_eq!(tree.insert(key), model.insert(key));
        } else {
            assert_eq!(tree.remove(&key), model.remove(&key));
        }
        assert_eq!(tree.len(), model.len());

        if step % 64 == 0 {
            tree.assert_valid().unwrap();
            let got: Vec<i32> = tree.iter().copied().collect();
            let want: Vec<i32> = model.iter().copied().collect();
            assert_eq!(got, want);
        }
    }

    tree.assert_valid().unwrap();
    let got: Vec<i32> = tree.iter().copied().collect();
    let want: Vec<i32> = model.iter().copied().collect();
    assert_eq!(got, want);
}

#[test]
fn churn_reuses_arena_slots() {
    let mut rng = Xoshiro256StarStar::from_seed([42u8; 32]);
    let mut tree = AvlTree::new();

    // Fill, drain to a small core, refill repeatedly; membership and
    // invariants must survive heavy slot recycling.
    for round in 0..20 {
        for k in 0..200 {
            tree.insert(k * 31 + round);
        }
        tree.assert_valid().unwrap();

        let keep: i32 = rng.gen_range(0..10);
        let keys: Vec<i32> = tree.iter().copied().collect();
        for k in keys {
            if k % 10 != keep {
                assert!(tree.remove(&k));
            }
        }
        tree.assert_valid().unwrap();
        for k in tree.iter() {
            assert_eq!(k % 10, keep);
        }
    }
}

#[test]
fn random_deletions_leave_other_keys_reachable() {
    let mut rng = Xoshiro256StarStar::from_seed([3u8; 32]);
    let mut tree = AvlTree::new();
    let mut present: BTreeSet<i64> = BTreeSet::new();

    for _ in 0..600 {
        let k = rng.gen_range(-1000..1000);
        tree.insert(k);
        present.insert(k);
    }

    while let Some(&victim) = present.iter().next() {
        assert!(tree.remove(&victim));
        present.remove(&victim);
        tree.assert_valid().unwrap();
        for k in present.iter().take(10) {
            assert!(tree.contains(k));
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}
