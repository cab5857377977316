//! Property tests run against the public API of both trees.

use quickcheck::{Arbitrary, Gen};

use bst_avl::node::BinaryNode;

mod avl;
mod scenarios;
mod unbalanced;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove one copy of the K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Whether an in-order walk never decreases, checked through the nodes rather than the tree's
/// own iterator.
pub fn is_search_tree<N>(root: Option<&N>) -> bool
where
    N: BinaryNode,
    N::Key: Ord + Clone,
{
    fn walk<N>(node: Option<&N>, keys: &mut Vec<N::Key>)
    where
        N: BinaryNode,
        N::Key: Clone,
    {
        if let Some(node) = node {
            walk(node.left(), keys);
            keys.push(node.key().clone());
            walk(node.right(), keys);
        }
    }

    let mut keys = Vec::new();
    walk(root, &mut keys);
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}
