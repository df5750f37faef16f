//! Ways of visiting every node of a [`Tree`][crate::Tree].
//!
//! The callback driven walks visit each node exactly once, synchronously, in the order named by
//! [`Order`]. [`Iter`] is a lazy in-order walk for callers that would rather pull keys out.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// The order nodes are visited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then its children left to right, then their children...
    Level,
    /// Left subtree, the node itself, then the right subtree. Visits keys in ascending order.
    In,
    /// The node itself, then the left subtree, then the right subtree.
    Pre,
    /// Left subtree, right subtree, then the node itself.
    Post,
}

impl Order {
    /// All orders, in the order they're usually listed.
    pub const ALL: [Order; 4] = [Order::Level, Order::In, Order::Pre, Order::Post];
}

/// Visits `root` and every node below it in the given order.
pub(crate) fn walk<'a, K, F>(root: Option<&'a Node<K>>, order: Order, visit: &mut F)
where
    F: FnMut(&'a Node<K>) + ?Sized,
{
    match order {
        Order::Level => level_order(root, visit),
        Order::In => in_order(root, visit),
        Order::Pre => pre_order(root, visit),
        Order::Post => post_order(root, visit),
    }
}

fn level_order<'a, K, F>(root: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a Node<K>) + ?Sized,
{
    let mut queue: VecDeque<&Node<K>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

fn in_order<'a, K, F>(node: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a Node<K>) + ?Sized,
{
    if let Some(node) = node {
        in_order(node.left(), visit);
        visit(node);
        in_order(node.right(), visit);
    }
}

fn pre_order<'a, K, F>(node: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a Node<K>) + ?Sized,
{
    if let Some(node) = node {
        visit(node);
        pre_order(node.left(), visit);
        pre_order(node.right(), visit);
    }
}

fn post_order<'a, K, F>(node: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a Node<K>) + ?Sized,
{
    if let Some(node) = node {
        post_order(node.left(), visit);
        post_order(node.right(), visit);
        visit(node);
    }
}

/// An in-order iterator over the keys of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter].
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    /// Nodes whose left subtree has been queued but that haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
