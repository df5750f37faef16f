//! A Binary Search Tree that is balanced on construction and rebalanced on demand.
//!
//! Mutations don't keep the tree balanced the way an AVL or red-black tree would. Inserting keys
//! in sorted order will skew it, [`Tree::is_balanced`] will notice and [`Tree::rebalance`] will
//! rebuild it.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::build(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert!(tree.is_balanced());
//!
//! // Duplicates were dropped and the keys come back sorted.
//! let mut keys = Vec::new();
//! tree.in_order(Some(&mut |node| keys.push(*node.key()))).unwrap();
//! assert_eq!(keys, [1, 2, 3, 4, 5, 6, 9]);
//!
//! for key in 10..15 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.keys(Order::Pre)[0], &6);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::TraversalError;
use crate::node::{self, Link, Node};
use crate::traverse::{self, Iter, Order};

/// The callback type accepted by the traversal methods.
pub type Visit<'v, K> = &'v mut dyn FnMut(&Node<K>);

/// A Binary Search Tree over unique, totally ordered keys.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping a `Box<Node>` recurses once per level, which a badly skewed tree can turn into a
    // stack overflow. Detach every node first so each drop is shallow.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a height-balanced tree out of `keys`. The keys may come in any order and may
    /// repeat; duplicates are dropped.
    ///
    /// The keys are sorted and the tree is built by making the middle key the root and building
    /// the subtrees out of the keys to its left and right, so the result is as short as possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    ///
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.keys(Order::Pre), [&4, &2, &1, &3, &6, &5, &9]);
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        let given = keys.len();
        keys.sort();
        keys.dedup();
        debug!("Building tree from {} keys ({} unique)", given, keys.len());
        Self::from_sorted(keys)
    }

    /// Builds a balanced tree out of keys that are already sorted and unique.
    fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        let root = build_balanced(len, &mut keys.into_iter());
        Self { root, len }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if `key` is
    /// already in the tree.
    ///
    /// This never rebalances the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match &mut self.root {
            Some(root) => root.insert(key),
            None => {
                self.root = Some(Node::new_boxed(key));
                true
            }
        };

        if inserted {
            self.len += 1;
        } else {
            trace!("Ignoring duplicate key");
        }
        inserted
    }

    /// Deletes `key` from the tree and returns it. Deleting a key that isn't in the tree does
    /// nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert!(tree.find(&2).is_none());
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let deleted = node::delete(&mut self.root, key);
        match deleted {
            Some(_) => self.len -= 1,
            None => trace!("Key to delete not found"),
        }
        deleted
    }

    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|n| n.find(key))
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(Node::min_value)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(Node::max_value)
    }

    /// The height of the whole tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges between the root and `target`. `target` is compared by identity, not
    /// by key, so a node from another tree is never found even if it holds an equal key.
    /// Returns `-1` when `target` isn't part of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    /// let other = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(tree.find(&2).unwrap()), 0);
    /// assert_eq!(tree.depth(tree.find(&3).unwrap()), 1);
    /// assert_eq!(tree.depth(other.find(&3).unwrap()), -1);
    /// ```
    pub fn depth(&self, target: &Node<K>) -> isize {
        fn depth_below<K>(node: Option<&Node<K>>, target: &Node<K>, depth: isize) -> isize {
            match node {
                None => -1,
                Some(n) if std::ptr::eq(n, target) => depth,
                Some(n) => match depth_below(n.left(), target, depth + 1) {
                    -1 => depth_below(n.right(), target, depth + 1),
                    found => found,
                },
            }
        }

        depth_below(self.root(), target, 0)
    }

    /// Whether, at every node, the heights of the left and right subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        /// The height of `node` if its subtree is balanced.
        fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
            match node {
                None => Some(-1),
                Some(n) => {
                    let left = balanced_height(n.left())?;
                    let right = balanced_height(n.right())?;
                    if (left - right).abs() <= 1 {
                        Some(left.max(right) + 1)
                    } else {
                        None
                    }
                }
            }
        }

        balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree so it is balanced. The set of keys doesn't change.
    pub fn rebalance(&mut self) {
        let mut keys = Vec::with_capacity(self.len);
        drain_in_order(self.root.take(), &mut keys);
        *self = Self::from_sorted(keys);

        debug!("Rebalanced {} keys to height {}", self.len, self.height());
    }

    /// Calls `callback` on every node in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::MissingCallback`] without visiting anything when `callback` is
    /// `None`.
    pub fn traverse(
        &self,
        order: Order,
        callback: Option<Visit<'_, K>>,
    ) -> Result<(), TraversalError> {
        let Some(callback) = callback else {
            trace!("Refusing {:?} order traversal without a callback", order);
            return Err(TraversalError::MissingCallback);
        };

        traverse::walk(self.root(), order, callback);
        Ok(())
    }

    /// Calls `callback` on every node breadth first. See [`Tree::traverse`].
    pub fn level_order(&self, callback: Option<Visit<'_, K>>) -> Result<(), TraversalError> {
        self.traverse(Order::Level, callback)
    }

    /// Calls `callback` on every node in ascending key order. See [`Tree::traverse`].
    pub fn in_order(&self, callback: Option<Visit<'_, K>>) -> Result<(), TraversalError> {
        self.traverse(Order::In, callback)
    }

    /// Calls `callback` on every node before either of its subtrees. See [`Tree::traverse`].
    pub fn pre_order(&self, callback: Option<Visit<'_, K>>) -> Result<(), TraversalError> {
        self.traverse(Order::Pre, callback)
    }

    /// Calls `callback` on every node after both of its subtrees. See [`Tree::traverse`].
    pub fn post_order(&self, callback: Option<Visit<'_, K>>) -> Result<(), TraversalError> {
        self.traverse(Order::Post, callback)
    }

    /// Collects references to every key in the given order.
    pub fn keys<'a>(&'a self, order: Order) -> Vec<&'a K> {
        let mut keys = Vec::with_capacity(self.len);
        traverse::walk(self.root(), order, &mut |n: &'a Node<K>| keys.push(n.key()));
        keys
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> From<Vec<K>> for Tree<K>
where
    K: Ord,
{
    fn from(keys: Vec<K>) -> Self {
        Self::build(keys)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a balanced subtree out of the next `len` keys of `keys`, which must be sorted.
///
/// The root is the key at index `(len - 1) / 2`, i.e. the midpoint `floor((start + end) / 2)` of
/// the inclusive range being built.
fn build_balanced<K>(len: usize, keys: &mut impl Iterator<Item = K>) -> Link<K> {
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build_balanced(left_len, keys);
    let key = keys.next()?;
    let right = build_balanced(len - left_len - 1, keys);
    Some(Node::with_children(key, left, right))
}

/// Moves every key of the subtree into `keys` in ascending order.
///
/// Walks with an explicit stack so a skewed tree can be drained no matter how deep it is.
fn drain_in_order<K>(link: Link<K>, keys: &mut Vec<K>) {
    // Keys whose left subtree is still being drained, with their right subtree.
    let mut pending: Vec<(K, Link<K>)> = Vec::new();
    let mut current = link;
    loop {
        while let Some(node) = current {
            let (key, left, right) = node.into_parts();
            pending.push((key, right));
            current = left;
        }
        match pending.pop() {
            Some((key, right)) => {
                keys.push(key);
                current = right;
            }
            None => break,
        }
    }
}
