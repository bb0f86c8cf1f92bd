//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! leftist and heap-order invariants hold after every step, and that the
//! queues agree with a simple sorted-multiset reference.

use leftist_heap::{
    EmptyQueueError, LeftistTree, MinPriorityQueue, PersistentMinPriorityQueue, SharedLeftistTree,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Reference multiset of priorities
#[derive(Default)]
struct Multiset(BTreeMap<i32, usize>);

impl Multiset {
    fn insert(&mut self, p: i32) {
        *self.0.entry(p).or_default() += 1;
    }

    fn remove(&mut self, p: i32) -> bool {
        match self.0.get_mut(&p) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                self.0.remove(&p);
                true
            }
            None => false,
        }
    }

    fn min(&self) -> Option<i32> {
        self.0.keys().next().copied()
    }
}

/// Checks rank and heap order at every node; returns the number of nodes
fn check_tree<V>(node: Option<&LeftistTree<(i32, V)>>) -> Result<usize, TestCaseError> {
    let Some(node) = node else {
        return Ok(0);
    };
    let left_rank = node.left_child().map_or(0, |c| c.rank());
    let right_rank = node.right_child().map_or(0, |c| c.rank());
    prop_assert!(left_rank >= right_rank, "leftist invariant broken");
    prop_assert_eq!(node.rank(), right_rank + 1);
    for child in [node.left_child(), node.right_child()].into_iter().flatten() {
        prop_assert!(node.data().0 <= child.data().0, "heap order broken");
    }
    Ok(1 + check_tree(node.left_child())? + check_tree(node.right_child())?)
}

/// Same walk for the shared node type
fn check_shared_tree<V>(node: Option<&SharedLeftistTree<(i32, V)>>) -> Result<usize, TestCaseError> {
    let Some(node) = node else {
        return Ok(0);
    };
    let left_rank = node.left_child().map_or(0, |c| c.rank());
    let right_rank = node.right_child().map_or(0, |c| c.rank());
    prop_assert!(left_rank >= right_rank, "leftist invariant broken");
    prop_assert_eq!(node.rank(), right_rank + 1);
    for child in [node.left_child(), node.right_child()].into_iter().flatten() {
        prop_assert!(node.data().0 <= child.data().0, "heap order broken");
    }
    Ok(1 + check_shared_tree(node.left_child())? + check_shared_tree(node.right_child())?)
}

fn build(values: &[(i32, u32)]) -> MinPriorityQueue<i32, u32> {
    let mut queue = MinPriorityQueue::new();
    for &(p, v) in values {
        queue.add(p, v);
    }
    queue
}

fn drain(mut queue: MinPriorityQueue<i32, u32>) -> Vec<(i32, u32)> {
    std::iter::from_fn(|| queue.remove_minimum().ok()).collect()
}

/// Priorities must match exactly; values only as a multiset within each tie
fn same_up_to_ties(a: &[(i32, u32)], b: &[(i32, u32)]) -> bool {
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a.iter().map(|(p, _)| p).eq(b.iter().map(|(p, _)| p)) && a_sorted == b_sorted
}

fn ops_strategy() -> impl Strategy<Value = Vec<(bool, i32)>> {
    prop::collection::vec((any::<bool>(), -100i32..100), 0..200)
}

proptest! {
    #[test]
    fn prop_invariants_min_and_count(ops in ops_strategy()) {
        let mut queue = MinPriorityQueue::new();
        let mut reference = Multiset::default();
        let mut expected_count = 0usize;

        for (should_remove, priority) in ops {
            if should_remove {
                let expected_min = reference.min();
                match queue.remove_minimum() {
                    Ok((p, v)) => {
                        prop_assert_eq!(Some(p), expected_min);
                        prop_assert_eq!(p, v);
                        prop_assert!(reference.remove(p));
                        expected_count -= 1;
                    }
                    Err(EmptyQueueError) => prop_assert!(expected_min.is_none()),
                }
            } else {
                queue.add(priority, priority);
                reference.insert(priority);
                expected_count += 1;
            }

            prop_assert_eq!(queue.count(), expected_count);
            prop_assert_eq!(check_tree(queue.root())?, expected_count);
            prop_assert_eq!(queue.minimum_priority().ok().copied(), reference.min());
        }
    }

    #[test]
    fn prop_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut queue = MinPriorityQueue::new();
        for &v in &values {
            queue.add(v, ());
        }

        let mut last = i32::MIN;
        let mut extracted = 0;
        loop {
            let Ok(&p) = queue.minimum_priority() else {
                break;
            };
            prop_assert!(p >= last, "priority {} came after {}", p, last);
            queue.remove_minimum_priority().unwrap();
            last = p;
            extracted += 1;
        }
        prop_assert_eq!(extracted, values.len());
        prop_assert_eq!(queue.remove_minimum_priority(), Err(EmptyQueueError));

        queue.add(1, ());
        prop_assert_eq!(queue.minimum_priority(), Ok(&1));
    }

    #[test]
    fn prop_merge_order_does_not_matter(
        a in prop::collection::vec((-20i32..20, any::<u32>()), 0..50),
        b in prop::collection::vec((-20i32..20, any::<u32>()), 0..50),
        c in prop::collection::vec((-20i32..20, any::<u32>()), 0..50),
    ) {
        // (A + B) + C
        let mut left = build(&a);
        left.merge(build(&b));
        left.merge(build(&c));

        // A + (B + C)
        let mut bc = build(&b);
        bc.merge(build(&c));
        let mut right = build(&a);
        right.merge(bc);

        // (C + A) + B
        let mut other = build(&c);
        other.merge(build(&a));
        other.merge(build(&b));

        let total = a.len() + b.len() + c.len();
        prop_assert_eq!(left.count(), total);
        prop_assert_eq!(right.count(), total);
        prop_assert_eq!(check_tree(other.root())?, total);

        let left = drain(left);
        let right = drain(right);
        let other = drain(other);
        prop_assert!(same_up_to_ties(&left, &right));
        prop_assert!(same_up_to_ties(&left, &other));
    }

    #[test]
    fn prop_merge_trees_keeps_invariants(
        a in prop::collection::vec(-50i32..50, 0..100),
        b in prop::collection::vec(-50i32..50, 0..100),
    ) {
        let qa = build(&a.iter().map(|&p| (p, 0)).collect::<Vec<_>>());
        let qb = build(&b.iter().map(|&p| (p, 1)).collect::<Vec<_>>());
        let mut queue = MinPriorityQueue::new();
        queue.merge(qa);
        queue.merge(qb);
        prop_assert_eq!(check_tree(queue.root())?, a.len() + b.len());
    }

    #[test]
    fn prop_persistent_matches_owned(ops in ops_strategy()) {
        let mut owned = MinPriorityQueue::new();
        let mut persistent = PersistentMinPriorityQueue::new();

        for (should_remove, priority) in ops {
            if should_remove {
                let a = owned.remove_minimum().map(|(p, _)| p);
                let b = persistent.remove_minimum().map(|(p, _)| p);
                prop_assert_eq!(a, b);
            } else {
                owned.add(priority, ());
                persistent.add(priority, ());
            }
            prop_assert_eq!(owned.count(), persistent.count());
            prop_assert_eq!(owned.minimum_priority().ok(), persistent.minimum_priority().ok());
            prop_assert_eq!(check_shared_tree(persistent.root())?, persistent.count());
        }
    }

    #[test]
    fn prop_snapshots_are_isolated(
        initial in prop::collection::vec(-50i32..50, 0..60),
        ops in ops_strategy(),
    ) {
        let mut queue = PersistentMinPriorityQueue::new();
        for &p in &initial {
            queue.add(p, p);
        }
        let snapshot = queue.clone();

        for (should_remove, priority) in ops {
            if should_remove {
                let _ = queue.remove_minimum_priority();
            } else {
                queue.add(priority, priority);
            }
        }
        prop_assert_eq!(check_shared_tree(queue.root())?, queue.count());

        let mut expected = initial.clone();
        expected.sort_unstable();
        let mut snapshot = snapshot;
        let drained: Vec<i32> = std::iter::from_fn(|| snapshot.remove_minimum_priority().ok()).collect();
        prop_assert_eq!(drained, expected);
    }
}

#[test]
fn test_explicit_tree_merge() {
    let leaf = |p: i32| Some(Box::new(LeftistTree::new((p, 0u32), None, None)));
    let left = MinPriorityQueue::merge_trees(leaf(4), leaf(9));
    let right = MinPriorityQueue::merge_trees(leaf(2), leaf(7));
    let merged = MinPriorityQueue::merge_trees(left, right);

    assert_eq!(check_tree(merged.as_deref()).ok(), Some(4));
    assert_eq!(merged.as_ref().map(|n| n.data().0), Some(2));
}
