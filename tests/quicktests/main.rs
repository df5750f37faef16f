use balanced_bst::{Node, Order, Tree};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

/// The mutations a quicktest applies to a tree.
#[derive(Copy, Clone, Debug)]
enum Op<K> {
    Insert(K),
    Delete(K),
    Rebalance,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree and a set so the two can be compared afterwards.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                set.insert(k);
            }
            Op::Delete(k) => {
                tree.delete(&k);
                set.remove(&k);
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.in_order(Some(&mut |n| keys.push(*n.key()))).unwrap();
    keys
}

/// Every node's key is greater than everything to its left and less than everything to its
/// right, checked directly against the node links.
fn ordered_below(node: Option<&Node<i8>>, low: Option<i8>, high: Option<i8>) -> bool {
    match node {
        None => true,
        Some(n) => {
            let key = *n.key();
            low.is_none_or(|low| low < key)
                && high.is_none_or(|high| key < high)
                && ordered_below(n.left(), low, Some(key))
                && ordered_below(n.right(), Some(key), high)
        }
    }
}

#[quickcheck]
fn bst_invariant_holds(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let keys = in_order(&tree);
    ordered_below(tree.root(), None, None)
        && keys.windows(2).all(|w| w[0] < w[1])
        && keys == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, dup: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = Tree::build(xs.clone());
    let before = in_order(&tree);

    !tree.insert(xs[dup % xs.len()]) && in_order(&tree) == before
}

#[quickcheck]
fn rebalance_keeps_key_set(xs: Vec<i8>, extra: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs);
    for x in extra {
        tree.insert(x);
    }
    let before = in_order(&tree);
    tree.rebalance();

    tree.is_balanced() && in_order(&tree) == before
}

#[quickcheck]
fn build_height_bound(xs: Vec<i16>) -> bool {
    let tree = Tree::build(xs);
    let n = tree.len();
    // ceil(log2(n + 1)) - 1
    let bound = (usize::BITS - n.leading_zeros()) as isize - 1;

    tree.height() <= bound && tree.is_balanced()
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, key: i8) -> bool {
    let mut tree = Tree::build(xs);
    let before = in_order(&tree);
    let present = before.contains(&key);

    let deleted = tree.delete(&key);
    let after = in_order(&tree);

    if present {
        let expected: Vec<_> = before.iter().copied().filter(|k| *k != key).collect();
        deleted == Some(key) && after.len() + 1 == before.len() && after == expected
    } else {
        deleted.is_none() && after == before
    }
}

#[quickcheck]
fn every_order_visits_every_node_once(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    Order::ALL.iter().all(|&order| {
        let mut visited = tree.keys(order);
        visited.sort();
        visited.len() == tree.len() && visited.iter().copied().eq(tree.iter())
    })
}

#[quickcheck]
fn depth_matches_key_path(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    tree.iter().all(|key| {
        let mut steps = 0;
        let mut node = tree.root();
        while let Some(n) = node {
            if n.key() == key {
                break;
            }
            node = if key < n.key() { n.left() } else { n.right() };
            steps += 1;
        }
        tree.find(key).map(|n| tree.depth(n)) == Some(steps)
    })
}
