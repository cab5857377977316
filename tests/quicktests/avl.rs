use bst_avl::avl::{Node, Tree};
use bst_avl::node::BinaryNode;

use std::collections::HashSet;

use crate::{is_search_tree, Op};

/// Returns the height of the subtree if every node in it caches the right height and is balanced.
fn checked_height(node: Option<&Node<i8>>) -> Option<usize> {
    match node {
        None => Some(0),
        Some(n) => {
            let left = checked_height(n.left())?;
            let right = checked_height(n.right())?;
            let accurate = n.height() == left.max(right) + 1;
            let balanced = n.balance_factor().abs() <= 1
                && n.balance_factor() == left as isize - right as isize;
            if accurate && balanced {
                Some(n.height())
            } else {
                None
            }
        }
    }
}

quickcheck::quickcheck! {
    fn balanced_after_every_operation(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut size = 0;
        for op in &ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(*k);
                    size += 1;
                }
                Op::Remove(k) => {
                    if tree.delete(k) {
                        size -= 1;
                    }
                }
            }
            if checked_height(tree.root()).is_none()
                || !is_search_tree(tree.root())
                || tree.len() != size
            {
                return false;
            }
        }
        true
    }

    fn height_is_logarithmic(xs: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        // An AVL tree of height h has at least fib(h + 2) - 1 nodes, so h < 1.45 lg(n + 2).
        let bound = 1.45 * ((xs.len() + 2) as f64).log2();
        (tree.height() as f64) < bound.max(1.0)
    }

    fn round_trip_empties(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for x in xs.iter().rev() {
            if !tree.delete(x) {
                return false;
            }
        }
        tree.is_empty() && tree.root().is_none() && tree.len() == 0
    }

    fn same_keys_as_unbalanced(xs: Vec<i8>) -> bool {
        let mut avl = Tree::new();
        let mut bst = bst_avl::unbalanced::Tree::new();
        for x in &xs {
            avl.insert(*x);
            bst.insert(*x);
        }

        avl.in_order().eq(bst.in_order()) && avl.len() == bst.len()
    }

    fn locate_distinct_within_level(xs: Vec<i8>) -> bool {
        let keys: HashSet<_> = xs.into_iter().collect();
        let mut tree = Tree::new();
        for key in &keys {
            tree.insert(*key);
        }

        let coordinates: Vec<_> = keys.iter().map(|k| tree.locate(k)).collect();
        let distinct: HashSet<_> = coordinates.iter().filter_map(|c| c.as_ref().ok().copied()).collect();
        coordinates.iter().all(|c| c.is_ok()) && distinct.len() == keys.len()
    }
}
