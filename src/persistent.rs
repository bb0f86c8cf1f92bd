//! Persistent minimum priority queue with O(1) snapshots
//!
//! [`PersistentMinPriorityQueue`] has the same operations and the same merge
//! as [`MinPriorityQueue`](crate::MinPriorityQueue), but its nodes are shared
//! through `Rc`. Cloning a queue copies one pointer, and the clone is an
//! independent snapshot: later changes to either queue never show up in the
//! other.
//!
//! Nodes are still never modified in place. When a merge has to rebuild a
//! node it takes the node apart by move if nothing else references it, and
//! clones only that node's payload if a snapshot still does. Everything off
//! the merged right spines stays shared.
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::PersistentMinPriorityQueue;
//!
//! let mut queue = PersistentMinPriorityQueue::new();
//! queue.add(2, "two");
//! queue.add(1, "one");
//!
//! let snapshot = queue.clone();
//! assert_eq!(queue.remove_minimum_priority(), Ok("one"));
//!
//! assert_eq!(queue.count(), 1);
//! assert_eq!(snapshot.count(), 2);
//! assert_eq!(snapshot.minimum_priority(), Ok(&1));
//! ```

use crate::leftist_tree::order_children;
use crate::rank::Rank;
use crate::traits::{EmptyQueueError, Heap, MergeableHeap};
use smallvec::SmallVec;
use std::rc::Rc;

/// Type alias for a shared node reference
pub type NodeRef<T> = Rc<SharedLeftistTree<T>>;

/// An optional shared leftist tree of (priority, value) pairs
pub type SharedHeapTree<P, V> = Option<NodeRef<(P, V)>>;

/// One node of a leftist heap whose children may be shared between snapshots
///
/// Construction orders the children exactly like
/// [`LeftistTree::new`](crate::LeftistTree::new).
#[derive(Debug)]
pub struct SharedLeftistTree<T> {
    data: T,
    left_child: Option<NodeRef<T>>,
    right_child: Option<NodeRef<T>>,
    rank: Rank,
}

impl<T> SharedLeftistTree<T> {
    /// Builds a node from a payload and two children, in either order
    pub fn new(data: T, left_child: Option<NodeRef<T>>, right_child: Option<NodeRef<T>>) -> Self {
        let (left_child, right_child, rank) =
            order_children(left_child, right_child, |child| child.rank);
        SharedLeftistTree {
            data,
            left_child,
            right_child,
            rank,
        }
    }

    /// The payload stored in this node
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The child with the larger rank, if any
    pub fn left_child(&self) -> Option<&SharedLeftistTree<T>> {
        self.left_child.as_deref()
    }

    /// The child with the smaller rank, if any
    pub fn right_child(&self) -> Option<&SharedLeftistTree<T>> {
        self.right_child.as_deref()
    }

    /// Length of this node's right spine (always ≥ 1)
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// Takes a node apart, moving out of it when this is the last reference
fn take_apart<T: Clone>(node: NodeRef<T>) -> (T, Option<NodeRef<T>>, Option<NodeRef<T>>) {
    match Rc::try_unwrap(node) {
        Ok(node) => (node.data, node.left_child, node.right_child),
        Err(shared) => (
            shared.data.clone(),
            shared.left_child.clone(),
            shared.right_child.clone(),
        ),
    }
}

/// A minimum priority queue whose clones are cheap, isolated snapshots
///
/// Mutating operations need `P: Clone` and `V: Clone` so that nodes still
/// referenced by a snapshot can be copied instead of moved.
pub struct PersistentMinPriorityQueue<P, V> {
    root: SharedHeapTree<P, V>,
    count: usize,
}

impl<P, V> PersistentMinPriorityQueue<P, V> {
    /// Creates an empty queue
    pub fn new() -> Self {
        PersistentMinPriorityQueue {
            root: None,
            count: 0,
        }
    }

    /// Number of values currently in the queue
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Smallest priority in the queue
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    pub fn minimum_priority(&self) -> Result<&P, EmptyQueueError> {
        self.peek().map(|(priority, _)| priority).ok_or(EmptyQueueError)
    }

    /// Smallest priority and its value, without removing them
    pub fn peek(&self) -> Option<(&P, &V)> {
        self.root.as_deref().map(|node| {
            let (priority, value) = node.data();
            (priority, value)
        })
    }

    /// Root of the underlying tree, for read-only inspection
    pub fn root(&self) -> Option<&SharedLeftistTree<(P, V)>> {
        self.root.as_deref()
    }

    /// Returns true if both queues currently share the same root node
    pub fn shares_root_with(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Removes every value from this queue; snapshots are unaffected
    pub fn clear(&mut self) {
        let mut pending: SmallVec<[NodeRef<(P, V)>; 16]> = self.root.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            // Shared nodes stay alive for their other owners.
            if let Ok(node) = Rc::try_unwrap(node) {
                pending.extend(node.left_child);
                pending.extend(node.right_child);
            }
        }
        self.count = 0;
    }
}

impl<P: PartialOrd + Clone, V: Clone> PersistentMinPriorityQueue<P, V> {
    /// Adds `value` with the given priority
    pub fn add(&mut self, priority: P, value: V) {
        let node = Rc::new(SharedLeftistTree::new((priority, value), None, None));
        self.root = Self::merge_trees(self.root.take(), Some(node));
        self.count += 1;
    }

    /// Removes the value with the smallest priority and returns it
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    pub fn remove_minimum_priority(&mut self) -> Result<V, EmptyQueueError> {
        self.remove_minimum().map(|(_, value)| value)
    }

    /// Removes the smallest priority and its value and returns both
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    pub fn remove_minimum(&mut self) -> Result<(P, V), EmptyQueueError> {
        let root = self.root.take().ok_or(EmptyQueueError)?;
        let (data, left, right) = take_apart(root);
        self.root = Self::merge_trees(left, right);
        self.count -= 1;
        Ok(data)
    }

    /// Moves every value of `other` into this queue
    pub fn merge(&mut self, mut other: Self) {
        self.root = Self::merge_trees(self.root.take(), other.root.take());
        self.count += other.count;
        other.count = 0;
    }

    /// Merges two shared leftist heaps into one
    ///
    /// Same algorithm and tie policy as
    /// [`MinPriorityQueue::merge_trees`](crate::MinPriorityQueue::merge_trees).
    pub fn merge_trees(h1: SharedHeapTree<P, V>, h2: SharedHeapTree<P, V>) -> SharedHeapTree<P, V> {
        match (h1, h2) {
            (None, h) | (h, None) => h,
            (Some(h1), Some(h2)) => {
                let (top, other) = if h1.data.0 < h2.data.0 {
                    (h1, h2)
                } else {
                    (h2, h1)
                };
                let (data, left, right) = take_apart(top);
                let merged = Self::merge_trees(right, Some(other));
                Some(Rc::new(SharedLeftistTree::new(data, left, merged)))
            }
        }
    }
}

impl<P, V> Clone for PersistentMinPriorityQueue<P, V> {
    fn clone(&self) -> Self {
        PersistentMinPriorityQueue {
            root: self.root.clone(),
            count: self.count,
        }
    }
}

impl<P, V> Drop for PersistentMinPriorityQueue<P, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P, V> Default for PersistentMinPriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for PersistentMinPriorityQueue<P, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentMinPriorityQueue")
            .field("count", &self.count)
            .field("minimum", &self.peek())
            .finish()
    }
}

impl<P: Ord + Clone, V: Clone> Heap<V, P> for PersistentMinPriorityQueue<P, V> {
    fn new() -> Self {
        PersistentMinPriorityQueue::new()
    }

    fn is_empty(&self) -> bool {
        PersistentMinPriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, priority: P, item: V) {
        self.add(priority, item)
    }

    fn peek(&self) -> Option<(&P, &V)> {
        PersistentMinPriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Option<(P, V)> {
        self.remove_minimum().ok()
    }
}

impl<P: Ord + Clone, V: Clone> MergeableHeap<V, P> for PersistentMinPriorityQueue<P, V> {
    fn merge(&mut self, other: Self) {
        PersistentMinPriorityQueue::merge(self, other)
    }
}
