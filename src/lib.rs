//! This crate exposes two Binary Search Trees (BSTs), one that never rebalances and one that
//! does (an AVL tree), so the shapes they take over the same keys can be compared.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The
//! [`unbalanced`] tree's height depends entirely on insertion order and can be
//! `O(N)`. The [`avl`] tree rotates nodes after every change to keep its height
//! `O(lg N)`.
//!
//! Both trees own their nodes outright: `insert` and `delete` take a subtree by
//! value and hand back the (possibly new) root of that subtree.
//!
//! ## Locating keys
//!
//! [`locate::locate`] reports the level and horizontal position of a key, which
//! is how the `roster` binary reports where employees landed after rebalancing.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;
pub mod locate;
pub mod node;
pub mod report;
pub mod roster;
pub mod unbalanced;

pub use error::Error;
