//! Leftist tree nodes
//!
//! A [`LeftistTree`] is one immutable node of a leftist heap: a payload, two
//! optional owned children and a rank. The rank is the length of the node's
//! right spine, and every node keeps
//!
//! ```text
//! rank(left_child) >= rank(right_child)      (missing child = rank 0)
//! ```
//!
//! so the right spine of an n-node tree has at most `log₂(n + 1)` nodes.
//!
//! The constructor establishes the invariant for the node it builds by
//! swapping the children when they arrive in the wrong order. Nodes are
//! never modified after construction; merging lives in
//! [`MinPriorityQueue::merge_trees`](crate::MinPriorityQueue::merge_trees),
//! which only ever consumes trees and builds new nodes.
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::LeftistTree;
//!
//! let small = Box::new(LeftistTree::new(7, None, None));
//! let node = LeftistTree::new(1, None, Some(small));
//!
//! // The only child was moved to the left.
//! assert_eq!(node.left_child().map(|c| *c.data()), Some(7));
//! assert!(node.right_child().is_none());
//! assert_eq!(node.rank(), 1);
//! ```

use crate::rank::{checked_increment, rank_of, Rank};

/// One node of a leftist heap
///
/// Each child is exclusively owned by its parent. Subtrees that a merge does
/// not touch are moved into the result rather than copied.
#[derive(Debug)]
pub struct LeftistTree<T> {
    data: T,
    left_child: Option<Box<LeftistTree<T>>>,
    right_child: Option<Box<LeftistTree<T>>>,
    rank: Rank,
}

impl<T> LeftistTree<T> {
    /// Builds a node from a payload and two children, in either order
    ///
    /// The child with the larger (or equal) rank becomes the left child and
    /// the node's rank becomes `1 + rank(right child)`.
    pub fn new(
        data: T,
        left_child: Option<Box<LeftistTree<T>>>,
        right_child: Option<Box<LeftistTree<T>>>,
    ) -> Self {
        let (left_child, right_child, rank) =
            order_children(left_child, right_child, |child| child.rank);
        LeftistTree {
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
    pub fn left_child(&self) -> Option<&LeftistTree<T>> {
        self.left_child.as_deref()
    }

    /// The child with the smaller rank, if any
    pub fn right_child(&self) -> Option<&LeftistTree<T>> {
        self.right_child.as_deref()
    }

    /// Length of this node's right spine (always ≥ 1)
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Consumes the node, returning its payload and children
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        T,
        Option<Box<LeftistTree<T>>>,
        Option<Box<LeftistTree<T>>>,
    ) {
        (self.data, self.left_child, self.right_child)
    }
}

/// Puts two children in leftist order and computes the parent's rank
///
/// Shared by every node type in the crate so they agree on tie handling:
/// equal ranks keep the given order.
pub(crate) fn order_children<C>(
    left: Option<C>,
    right: Option<C>,
    rank: impl Fn(&C) -> Rank,
) -> (Option<C>, Option<C>, Rank) {
    let left_rank = rank_of(left.as_ref(), &rank);
    let right_rank = rank_of(right.as_ref(), &rank);
    let (left, right, spine) = if left_rank >= right_rank {
        (left, right, right_rank)
    } else {
        (right, left, left_rank)
    };
    debug_assert!(rank_of(left.as_ref(), &rank) >= rank_of(right.as_ref(), &rank));
    (left, right, checked_increment(spine))
}
