//! Leftist Heap Priority Queues for Rust
//!
//! This crate provides a minimum priority queue built on a leftist heap: a
//! binary tree where every node's left subtree has a right spine at least as
//! long as its right subtree's. Insertion and removal of the minimum are both
//! expressed as a merge of two trees, which only walks the (logarithmic)
//! right spines.
//!
//! # Features
//!
//! - **[`MinPriorityQueue`]**: O(log n) add, remove-min and merge; O(1) minimum and count
//! - **[`PersistentMinPriorityQueue`]**: same operations over `Rc`-shared nodes,
//!   with O(1) snapshots via `Clone`
//! - **[`LeftistTree`]**: the immutable node type, usable directly with
//!   [`MinPriorityQueue::merge_trees`]
//! - **[`stdlib_compat::StdHeap`]**: `BinaryHeap`-shaped wrapper
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::MinPriorityQueue;
//!
//! let mut queue = MinPriorityQueue::new();
//! queue.add(5, "item1");
//! queue.add(3, "item2");
//! assert_eq!(queue.minimum_priority(), Ok(&3));
//! assert_eq!(queue.remove_minimum_priority(), Ok("item2"));
//! assert_eq!(queue.count(), 1);
//! ```
//!
//! # Concurrency
//!
//! The queues are single-threaded. [`MinPriorityQueue`] is `Send` and `Sync`
//! when its contents are, so it can be shared behind a `Mutex`;
//! [`PersistentMinPriorityQueue`] uses `Rc` and is neither.

pub mod leftist_tree;
pub mod min_priority_queue;
pub mod persistent;
pub mod rank;
pub mod stdlib_compat;
pub mod traits;

pub use leftist_tree::LeftistTree;
pub use min_priority_queue::{HeapTree, MinPriorityQueue};
pub use persistent::{PersistentMinPriorityQueue, SharedLeftistTree};
// Re-export the main traits for convenience
pub use traits::{EmptyQueueError, Heap, MergeableHeap};
