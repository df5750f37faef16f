//! A Binary Search Tree (BST) over unique, totally ordered keys that is balanced when it is
//! built and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path from the root
//! `Node` to a leaf `Node`. [`Tree::build`] splits the sorted keys at their midpoint so the
//! height starts out as `O(lg N)`. [`Tree::insert`] and [`Tree::delete`] don't rotate anything,
//! so a run of unlucky mutations can make the tree tall again. [`Tree::is_balanced`] detects that
//! and [`Tree::rebalance`] rebuilds the tree from its keys.
//!
//! Every node can be visited in [level, in, pre or post order][Order] with a callback, and the
//! keys can be iterated in ascending order with [`Tree::iter`].

#![deny(missing_docs)]

mod error;
mod node;
mod traverse;
mod tree;

pub use error::TraversalError;
pub use node::{height, Node};
pub use traverse::{Iter, Order};
pub use tree::{Tree, Visit};
