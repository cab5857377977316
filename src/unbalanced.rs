//! An unbalanced BST. Nothing is done to keep its height down so its shape is entirely decided by
//! the order keys are inserted in: inserting sorted keys builds a linked list. It's the baseline
//! the [`avl`][crate::avl] tree is compared against.
//!
//! Equal keys are never rejected or merged. A key equal to a node's key is routed into that
//! node's right subtree so inserting the same key `n` times adds `n` nodes.
//!
//! # Examples
//!
//! ```
//! use bst_avl::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//!
//! // Deleting tells you whether anything was there.
//! assert!(tree.delete(&2));
//! assert!(!tree.delete(&2));
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![3, 1]);
//! ```

use std::cmp::Ordering;

use crate::error::Error;
use crate::locate::{self, Coordinate};
use crate::node::{self, BinaryNode, InOrder, Preorder};

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree without any rebalancing.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Adds a node holding `key`. Keys equal to an existing key are added again to the right of
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;
    }

    /// Removes one node holding `key` and returns `true`. If no node holds `key` nothing happens
    /// and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, found) = delete(self.root.take(), key);
        self.root = root;
        if found {
            self.len -= 1;
        }
        found
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// The smallest key in the tree.
    pub fn minimum(&self) -> Option<&K> {
        self.root().map(|root| node::minimum(root).key())
    }

    /// Where `key` sits in the tree. See [`locate::locate`].
    pub fn locate(&self, key: &K) -> Result<Coordinate, Error>
    where
        K: PartialEq,
    {
        locate::locate(self.root(), key)
    }

    /// The keys in preorder.
    pub fn preorder(&self) -> Preorder<'_, Node<K>> {
        Preorder::new(self.root())
    }

    /// The keys in sorted order.
    pub fn in_order(&self) -> InOrder<'_, Node<K>> {
        InOrder::new(self.root())
    }

    /// How many levels are in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// How many nodes are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

/// A vertex of an unbalanced [`Tree`].
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> BinaryNode for Node<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Takes ownership of a subtree and returns the subtree with `key` added.
fn insert<K: Ord>(link: Link<K>, key: K) -> Box<Node<K>> {
    match link {
        None => Node::new(key),
        Some(mut node) => {
            if key < node.key {
                node.left = Some(insert(node.left.take(), key));
            } else {
                node.right = Some(insert(node.right.take(), key));
            }
            node
        }
    }
}

/// Takes ownership of a subtree and returns the subtree without one node holding `key`, along with
/// whether such a node was found.
fn delete<K: Ord>(link: Link<K>, key: &K) -> (Link<K>, bool) {
    let mut node = match link {
        Some(node) => node,
        None => return (None, false),
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, found) = delete(node.left.take(), key);
            node.left = left;
            (Some(node), found)
        }
        Ordering::Greater => {
            let (right, found) = delete(node.right.take(), key);
            node.right = right;
            (Some(node), found)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => (right, true),
            (left, None) => (left, true),
            // With two children this node's key is replaced by its in-order successor, which is
            // then cut out of the right subtree.
            (left, Some(right)) => {
                let (successor, right) = take_minimum(right);
                node.key = successor;
                node.left = left;
                node.right = right;
                (Some(node), true)
            }
        },
    }
}

/// Detaches the smallest node of a subtree. Returns its key and what's left of the subtree.
fn take_minimum<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        Some(left) => {
            let (minimum, left) = take_minimum(left);
            node.left = left;
            (minimum, Some(node))
        }
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
    }
}
