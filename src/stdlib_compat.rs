//! Standard library compatibility layer
//!
//! Provides a `BinaryHeap`-shaped wrapper where each item is its own priority.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//! - **Merge cost**: [`StdHeap::append`] is O(log n + log m) on the default
//!   leftist backend instead of `BinaryHeap`'s O(n + m).
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::stdlib_compat::StdHeap;
//!
//! let mut heap: StdHeap<i32> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::min_priority_queue::MinPriorityQueue;
use crate::traits::{Heap, MergeableHeap};

/// A `BinaryHeap`-like min-heap of items ordered by themselves
///
/// # Type Parameters
/// - `T`: The item type, must implement `Ord`
/// - `H`: The underlying heap, [`MinPriorityQueue<T, ()>`] unless given
pub struct StdHeap<T: Ord, H: Heap<(), T> = MinPriorityQueue<T, ()>> {
    heap: H,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Ord, H: Heap<(), T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    ///
    /// The item itself serves as the priority.
    pub fn push(&mut self, item: T) {
        self.heap.push(item, ())
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|(priority, _)| priority)
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|(priority, _)| priority)
    }
}

impl<T: Ord, H: MergeableHeap<(), T>> StdHeap<T, H> {
    /// Moves all items of `other` into this heap
    pub fn append(&mut self, other: Self) {
        self.heap.merge(other.heap)
    }
}

impl<T: Ord, H: Heap<(), T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
