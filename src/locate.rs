//! Finding where a key sits in a tree.
//!
//! A key's [`Coordinate`] is its depth (the root is level 0) and its horizontal position within
//! that level. The position is the path from the root read as a binary number, most significant
//! bit first, with a left step as `0` and a right step as `1`. So the leftmost slot of every level
//! is position 0, and two nodes on the same level never share a position.
//!
//! ```text
//! level 0:            (0)
//!                   /     \
//! level 1:       (0)       (1)
//!               /   \     /   \
//! level 2:    (0)   (1) (2)   (3)
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::error::Error;
use crate::node::BinaryNode;

/// Where a node sits in its tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// How many edges separate the node from the root.
    pub level: usize,
    /// How many slots of a full level are to the left of the node.
    pub position: u128,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}, position {}", self.level, self.position)
    }
}

/// Searches the tree rooted at `root` for `key` level by level and returns the coordinate of the
/// first (shallowest, then leftmost) node holding it.
///
/// The search is breadth-first and compares keys only for equality, so it finds a key even where
/// the tree's ordering wouldn't send a search.
///
/// # Errors
///
/// [`Error::KeyNotFound`] if no node holds `key`. [`Error::PositionOverflow`] if the node holding
/// `key` is deeper than a `u128` position can describe, which only a badly degenerate tree can
/// reach.
///
/// # Examples
///
/// ```
/// use bst_avl::locate::{locate, Coordinate};
/// use bst_avl::unbalanced::Tree;
///
/// let mut tree = Tree::new();
/// for key in [4, 2, 6, 5] {
///     tree.insert(key);
/// }
///
/// assert_eq!(locate(tree.root(), &5), Ok(Coordinate { level: 2, position: 2 }));
/// assert!(locate(tree.root(), &1).is_err());
/// ```
pub fn locate<N>(root: Option<&N>, key: &N::Key) -> Result<Coordinate, Error>
where
    N: BinaryNode,
    N::Key: PartialEq,
{
    // Positions past `u128::MAX` are `None` and only matter if the key turns up there.
    let mut queue: VecDeque<(&N, usize, Option<u128>)> =
        root.map(|root| (root, 0, Some(0))).into_iter().collect();

    while let Some((node, level, position)) = queue.pop_front() {
        if node.key() == key {
            let position = position.ok_or(Error::PositionOverflow { level })?;
            return Ok(Coordinate { level, position });
        }

        let children = [(node.left(), 0), (node.right(), 1)];
        for (child, bit) in children.iter() {
            if let Some(child) = child {
                let position = position
                    .and_then(|p| p.checked_mul(2))
                    .and_then(|p| p.checked_add(*bit));
                queue.push_back((*child, level + 1, position));
            }
        }
    }

    Err(Error::KeyNotFound)
}
