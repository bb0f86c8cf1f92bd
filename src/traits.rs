//! Common traits for the priority queues in this crate
//!
//! This module provides a small trait hierarchy shared by
//! [`MinPriorityQueue`](crate::MinPriorityQueue) and
//! [`PersistentMinPriorityQueue`](crate::PersistentMinPriorityQueue):
//!
//! - [`Heap`]: base trait with a `BinaryHeap`-like API
//! - [`MergeableHeap`]: adds consuming merge of two heaps
//!
//! The inherent methods of each queue report an empty queue through
//! [`EmptyQueueError`]; the trait surface follows `BinaryHeap` and uses
//! `Option` instead.

use std::fmt;

/// Error returned when the minimum is requested from a queue with no elements
///
/// This is the only failure a priority queue in this crate can report.
/// The queue is left untouched when it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "priority queue is empty")
    }
}

impl std::error::Error for EmptyQueueError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use leftist_heap::Heap;
/// use leftist_heap::MinPriorityQueue;
///
/// let mut heap: MinPriorityQueue<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Heaps that can absorb another heap of the same type
pub trait MergeableHeap<T, P: Ord>: Heap<T, P> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n + log m) for leftist heaps of sizes n and m.
    fn merge(&mut self, other: Self);
}
