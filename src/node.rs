//! The read-only view of a tree vertex shared by every tree in this crate.
//!
//! Both [`unbalanced::Node`][crate::unbalanced::Node] and [`avl::Node`][crate::avl::Node] own
//! their children exclusively (no parent pointers, no sharing). Anything that only needs to
//! _look_ at a tree (traversals, [`locate`][crate::locate::locate], finding the minimum) is
//! written once against [`BinaryNode`] instead of once per tree.

/// A vertex of a binary search tree.
///
/// Implementors uphold the BST invariant: every key in `left()` is less than `key()` and every
/// key in `right()` is greater than or equal to it.
pub trait BinaryNode {
    /// The type of key stored in the node.
    type Key;

    /// The key stored in this node.
    fn key(&self) -> &Self::Key;

    /// The root of the left subtree, if any.
    fn left(&self) -> Option<&Self>;

    /// The root of the right subtree, if any.
    fn right(&self) -> Option<&Self>;
}

/// Finds the node holding the smallest key in the subtree rooted at `node` by following left
/// children until there are none.
pub fn minimum<N: BinaryNode>(node: &N) -> &N {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current
}

/// Counts the nodes in the subtree rooted at `root`.
pub fn len<N: BinaryNode>(root: Option<&N>) -> usize {
    Preorder::new(root).count()
}

/// Recomputes the height of the subtree rooted at `root` by walking it. An absent subtree has a
/// height of 0 and a leaf has a height of 1.
pub fn height<N: BinaryNode>(root: Option<&N>) -> usize {
    // Level-by-level so degenerate trees don't blow the stack.
    let mut level: Vec<&N> = root.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }
    height
}

/// Iterator over the keys of a tree in preorder: the root, then the left subtree, then the right
/// subtree.
///
/// # Examples
///
/// ```
/// use bst_avl::unbalanced::Tree;
///
/// let mut tree = Tree::new();
/// for key in [2, 1, 3] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
/// ```
pub struct Preorder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> Preorder<'a, N> {
    /// Starts a preorder traversal at `root`.
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for Preorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Iterator over the keys of a tree in sorted order: the left subtree, then the root, then the
/// right subtree.
pub struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> InOrder<'a, N> {
    /// Starts an in-order traversal at `root`.
    pub fn new(root: Option<&'a N>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: BinaryNode> Iterator for InOrder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}
