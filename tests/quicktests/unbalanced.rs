use bst_avl::unbalanced::Tree;

use std::collections::HashSet;

use crate::{is_search_tree, Op};

/// Applies a set of operations to a tree and a list of expected keys.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, expected: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                let before = tree.len();
                tree.insert(*k);
                assert_eq!(tree.len(), before + 1);
                expected.push(*k);
            }
            Op::Remove(k) => {
                let before = tree.len();
                match expected.iter().position(|x| x == k) {
                    Some(pos) => {
                        assert!(tree.delete(k));
                        assert_eq!(tree.len(), before - 1);
                        expected.swap_remove(pos);
                    }
                    None => {
                        assert!(!tree.delete(k));
                        assert_eq!(tree.len(), before);
                    }
                }
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut expected = Vec::new();

        do_ops(&ops, &mut tree, &mut expected);
        expected.iter().all(|key| tree.contains(key)) && is_search_tree(tree.root())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x) && tree.locate(x).is_err())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.delete(delete) {}
        }

        let mut still_present = xs;
        for delete in &deletes {
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }

    fn insertion_order_decides_shape(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        // The first key inserted is always the root of an unbalanced tree.
        tree.preorder().next() == xs.first()
    }
}
