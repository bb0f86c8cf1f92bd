//! Minimum priority queue backed by a leftist heap
//!
//! Every mutation is a merge of two leftist trees:
//!
//! - `add` merges the current tree with a fresh single-node tree
//! - `remove_minimum_priority` drops the root and merges its two children
//!
//! [`MinPriorityQueue::merge_trees`] walks down the right spines of both
//! inputs, always keeping the smaller root on top, and rebuilds the nodes it
//! passes through with [`LeftistTree::new`], which restores the leftist
//! invariant bottom-up. Subtrees off the right spines are moved into the
//! result untouched. Right spines have at most `log₂(n + 1)` nodes, so every
//! operation is O(log n) and the recursion depth is bounded the same way.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add`                     | O(log n)          |
//! | `minimum_priority`        | O(1)              |
//! | `remove_minimum_priority` | O(log n)          |
//! | `count`                   | O(1)              |
//! | `merge`                   | O(log n + log m)  |
//!
//! # Equal priorities
//!
//! When two roots compare equal the merge keeps the root of its second
//! operand on top. Which of several equal-priority values comes out first
//! is therefore implementation-defined; the queue is not FIFO among equal
//! priorities.
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::{EmptyQueueError, MinPriorityQueue};
//!
//! let mut queue = MinPriorityQueue::new();
//! queue.add(5, "a");
//! queue.add(1, "b");
//! queue.add(3, "c");
//!
//! assert_eq!(queue.minimum_priority(), Ok(&1));
//! assert_eq!(queue.remove_minimum_priority(), Ok("b"));
//! assert_eq!(queue.count(), 2);
//! assert_eq!(queue.remove_minimum_priority(), Ok("c"));
//! assert_eq!(queue.remove_minimum_priority(), Ok("a"));
//! assert_eq!(queue.remove_minimum_priority(), Err(EmptyQueueError));
//! ```

use crate::leftist_tree::LeftistTree;
use crate::traits::{EmptyQueueError, Heap, MergeableHeap};
use smallvec::SmallVec;

/// An optional leftist tree of (priority, value) pairs; `None` is the empty heap
pub type HeapTree<P, V> = Option<Box<LeftistTree<(P, V)>>>;

/// A queue that removes values in order of increasing priority
///
/// Priorities only need `PartialOrd`. A priority that compares neither less
/// nor greater than another (for example `f64::NAN`) is treated like an
/// equal one: nothing panics, but the minimum is then only as meaningful as
/// the ordering.
pub struct MinPriorityQueue<P, V> {
    root: HeapTree<P, V>,
    count: usize,
}

impl<P, V> MinPriorityQueue<P, V> {
    /// Creates an empty queue
    pub fn new() -> Self {
        MinPriorityQueue {
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

    /// Root of the underlying leftist tree, for read-only inspection
    pub fn root(&self) -> Option<&LeftistTree<(P, V)>> {
        self.root.as_deref()
    }

    /// Removes every value
    ///
    /// Nodes are released with an explicit work list, so very deep trees
    /// (long left spines) do not exhaust the stack.
    pub fn clear(&mut self) {
        let mut pending: SmallVec<[Box<LeftistTree<(P, V)>>; 16]> =
            self.root.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            let (_, left, right) = node.into_parts();
            pending.extend(left);
            pending.extend(right);
        }
        self.count = 0;
    }
}

impl<P: PartialOrd, V> MinPriorityQueue<P, V> {
    /// Adds `value` with the given priority
    pub fn add(&mut self, priority: P, value: V) {
        let node = Box::new(LeftistTree::new((priority, value), None, None));
        self.root = Self::merge_trees(self.root.take(), Some(node));
        self.count += 1;
    }

    /// Removes the value with the smallest priority and returns it
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty; the queue is
    /// unchanged.
    pub fn remove_minimum_priority(&mut self) -> Result<V, EmptyQueueError> {
        self.remove_minimum().map(|(_, value)| value)
    }

    /// Removes the smallest priority and its value and returns both
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty; the queue is
    /// unchanged.
    pub fn remove_minimum(&mut self) -> Result<(P, V), EmptyQueueError> {
        let root = self.root.take().ok_or(EmptyQueueError)?;
        let (data, left, right) = root.into_parts();
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

    /// Merges two leftist heaps into one
    ///
    /// The smaller root stays on top with its left subtree unchanged, and
    /// its right subtree is merged with the whole of the other heap. When
    /// the roots compare equal (or are incomparable) `h2`'s root wins.
    ///
    /// Both inputs are consumed; nodes off the two right spines are moved
    /// into the result, the rest are rebuilt.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftist_heap::{LeftistTree, MinPriorityQueue};
    ///
    /// let a = Some(Box::new(LeftistTree::new((3, "a"), None, None)));
    /// let b = Some(Box::new(LeftistTree::new((2, "b"), None, None)));
    ///
    /// let merged = MinPriorityQueue::merge_trees(a, b).unwrap();
    /// assert_eq!(merged.data(), &(2, "b"));
    /// assert_eq!(merged.left_child().map(|c| c.data()), Some(&(3, "a")));
    /// ```
    pub fn merge_trees(h1: HeapTree<P, V>, h2: HeapTree<P, V>) -> HeapTree<P, V> {
        match (h1, h2) {
            (None, h) | (h, None) => h,
            (Some(h1), Some(h2)) => {
                let (top, other) = if h1.data().0 < h2.data().0 {
                    (h1, h2)
                } else {
                    (h2, h1)
                };
                let (data, left, right) = top.into_parts();
                let merged = Self::merge_trees(right, Some(other));
                Some(Box::new(LeftistTree::new(data, left, merged)))
            }
        }
    }
}

impl<P, V> Drop for MinPriorityQueue<P, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P, V> Default for MinPriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for MinPriorityQueue<P, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinPriorityQueue")
            .field("count", &self.count)
            .field("minimum", &self.peek())
            .finish()
    }
}

impl<P: Ord, V> Heap<V, P> for MinPriorityQueue<P, V> {
    fn new() -> Self {
        MinPriorityQueue::new()
    }

    fn is_empty(&self) -> bool {
        MinPriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, priority: P, item: V) {
        self.add(priority, item)
    }

    fn peek(&self) -> Option<(&P, &V)> {
        MinPriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Option<(P, V)> {
        self.remove_minimum().ok()
    }
}

impl<P: Ord, V> MergeableHeap<V, P> for MinPriorityQueue<P, V> {
    fn merge(&mut self, other: Self) {
        MinPriorityQueue::merge(self, other)
    }
}
