//! A self-balancing BST (specifically, an AVL tree). After every insertion and deletion each node
//! on the path back up to the root has its cached height recomputed and, if its children's
//! heights differ by more than one, is fixed with one of four rotation patterns. This keeps the
//! height of the tree `O(lg N)` no matter what order keys arrive in.
//!
//! Like the [`unbalanced`][crate::unbalanced] tree, equal keys are never merged. A key equal to a
//! node's key is inserted into its right subtree. Rotations may later move an equal key to the
//! left of its twin, but an in-order walk always yields the keys in non-decreasing order.
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
//!
//! # Examples
//!
//! ```
//! use bst_avl::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input would make a linked list of an unbalanced tree.
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(
//!     tree.preorder().copied().collect::<Vec<_>>(),
//!     vec![4, 2, 1, 3, 6, 5, 7],
//! );
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::error::Error;
use crate::locate::{self, Coordinate};
use crate::node::{self, BinaryNode, InOrder, Preorder};

type Link<K> = Option<Box<Node<K>>>;

/// An AVL tree.
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

    /// Adds a node holding `key` and rebalances. Keys equal to an existing key are added again.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(3);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// // Left-heavy on the left: rotated right around 3.
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;
    }

    /// Removes one node holding `key`, rebalances, and returns `true`. If no node holds `key`
    /// nothing happens and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3, 4] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![3, 2, 4]);
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

    /// Where `key` landed after rebalancing. See [`locate::locate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::avl::Tree;
    /// use bst_avl::Error;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=3 {
    ///     tree.insert(key);
    /// }
    ///
    /// let coordinate = tree.locate(&3).unwrap();
    /// assert_eq!((coordinate.level, coordinate.position), (1, 1));
    /// assert_eq!(tree.locate(&42), Err(Error::KeyNotFound));
    /// ```
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

    /// How many levels are in the tree, read from the root's cached height.
    pub fn height(&self) -> usize {
        height(&self.root)
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

/// A vertex of an AVL [`Tree`].
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    fn new(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The left subtree's height minus the right subtree's height. Between -1 and 1 inclusive for
    /// every node of a tree at rest.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
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

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Takes ownership of a subtree and returns the rebalanced subtree with `key` added.
fn insert<K: Ord>(link: Link<K>, key: K) -> Box<Node<K>> {
    let mut node = match link {
        None => return Node::new(key),
        Some(node) => node,
    };

    // The side of the child `key` goes down is decided before `key` moves. If this node ends up
    // needing a rotation, the child grew without rotating so its key is still the same.
    if key < node.key {
        let below_left = node.left.as_ref().map_or(false, |child| key < child.key);
        node.left = Some(insert(node.left.take(), key));
        rebalance_after_insert(node, below_left)
    } else {
        let below_left = node.right.as_ref().map_or(false, |child| key < child.key);
        node.right = Some(insert(node.right.take(), key));
        rebalance_after_insert(node, below_left)
    }
}

/// Restores the AVL invariant at `node` after a key was added below it. `below_left` says whether
/// the key went into the left subtree of the child it went through. Equal keys go right, like
/// everywhere else.
fn rebalance_after_insert<K>(mut node: Box<Node<K>>, below_left: bool) -> Box<Node<K>> {
    node.fix_height();
    match node.balance_factor() {
        b if b > 1 => {
            if below_left {
                rotate_right(node)
            } else {
                rotate_left_right(node)
            }
        }
        b if b < -1 => {
            if below_left {
                rotate_right_left(node)
            } else {
                rotate_left(node)
            }
        }
        _ => node,
    }
}

/// Takes ownership of a subtree and returns the rebalanced subtree without one node holding
/// `key`, along with whether such a node was found.
fn delete<K: Ord>(link: Link<K>, key: &K) -> (Link<K>, bool) {
    let mut node = match link {
        Some(node) => node,
        None => return (None, false),
    };

    let found = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, found) = delete(node.left.take(), key);
            node.left = left;
            found
        }
        Ordering::Greater => {
            let (right, found) = delete(node.right.take(), key);
            node.right = right;
            found
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // A lone child is already balanced and keeps its cached height.
            (None, right) => return (right, true),
            (left, None) => return (left, true),
            // With two children this node's key is replaced by its in-order successor, which is
            // then cut out of the right subtree.
            (left, Some(right)) => {
                let (successor, right) = take_minimum(right);
                node.key = successor;
                node.left = left;
                node.right = right;
                true
            }
        },
    };

    (Some(rebalance_after_delete(node)), found)
}

/// Detaches the smallest node of a subtree, rebalancing on the way back up. Returns its key and
/// what's left of the subtree.
fn take_minimum<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        Some(left) => {
            let (minimum, left) = take_minimum(left);
            node.left = left;
            (minimum, Some(rebalance_after_delete(node)))
        }
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
    }
}

/// Restores the AVL invariant at `node` after something below it was removed. The children's
/// own balance factors pick the rotation.
fn rebalance_after_delete<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.fix_height();
    match node.balance_factor() {
        b if b > 1 => {
            if balance_factor(&node.left) >= 0 {
                rotate_right(node)
            } else {
                rotate_left_right(node)
            }
        }
        b if b < -1 => {
            if balance_factor(&node.right) <= 0 {
                rotate_left(node)
            } else {
                rotate_right_left(node)
            }
        }
        _ => node,
    }
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///       old_root              new_root
///        /     \              /     \
///   new_root    z   rotate ->  x    old_root
///    / \                             /  \
///   x   y                           y    z
/// ```
fn rotate_right<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    trace!("rotating right at height {}", old_root.height);

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Mirror image of [`rotate_right`].
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    trace!("rotating left at height {}", old_root.height);

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}

fn rotate_left_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let left = node.left.take().expect("Rotate left-right => left child");
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

fn rotate_right_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let right = node.right.take().expect("Rotate right-left => right child");
    node.right = Some(rotate_right(right));
    rotate_left(node)
}
