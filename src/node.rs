//! The unit of storage in a [`Tree`][crate::Tree]. Every `Node` owns its children outright so a
//! tree is a plain ownership hierarchy with no parent pointers and no sharing.

use std::cmp::Ordering;
use std::mem;

/// An owning, possibly empty, link to a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds a key and up to two children. All keys in the left subtree are less than
/// `key` and all keys in the right subtree are greater.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// Height of an optional subtree. An empty subtree has height `-1` so a leaf has height `0`.
///
/// # Examples
///
/// ```
/// use balanced_bst::{height, Tree};
///
/// let tree = Tree::build(vec![1, 2, 3]);
///
/// assert_eq!(height(tree.root()), 1);
/// assert_eq!(height(tree.find(&1)), 0);
/// assert_eq!(height::<i32>(None), -1);
/// ```
pub fn height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, Node::height)
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn with_children(key: K, left: Link<K>, right: Link<K>) -> Box<Self> {
        Box::new(Self { key, left, right })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> isize {
        height(self.left()).max(height(self.right())) + 1
    }

    /// The smallest key in the subtree rooted at this node.
    pub fn min_value(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// The largest key in the subtree rooted at this node.
    pub fn max_value(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }

    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// Attaches a new leaf for `key` below this node. Returns `false` if `key` is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match key.cmp(&self.key) {
            Ordering::Less => match &mut self.left {
                Some(left) => left.insert(key),
                None => {
                    self.left = Some(Self::new_boxed(key));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match &mut self.right {
                Some(right) => right.insert(key),
                None => {
                    self.right = Some(Self::new_boxed(key));
                    true
                }
            },
        };

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
        inserted
    }

    /// Gives up ownership of both children.
    pub(crate) fn take_children(&mut self) -> (Link<K>, Link<K>) {
        (self.left.take(), self.right.take())
    }

    pub(crate) fn into_parts(self) -> (K, Link<K>, Link<K>) {
        (self.key, self.left, self.right)
    }
}

/// Removes the node holding `key` from the subtree behind `link` and returns its key.
///
/// A node with at most one child is spliced out and replaced by that child. A node with two
/// children instead takes over its in-order successor's key, and the successor node (which has no
/// left child) is spliced out of the right subtree.
pub(crate) fn delete<K>(link: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let node = link.as_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let successor = delete_min(&mut node.right)?;
            Some(mem::replace(&mut node.key, successor))
        }
        Ordering::Equal => {
            let (key, left, right) = link.take()?.into_parts();
            *link = left.or(right);
            Some(key)
        }
    }
}

/// Splices the smallest node out of the subtree behind `link` and returns its key.
fn delete_min<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return delete_min(&mut node.left);
    }

    let (key, _, right) = link.take()?.into_parts();
    *link = right;
    Some(key)
}
