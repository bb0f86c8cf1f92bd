//! Rank ("s-value") type for leftist tree nodes.
//!
//! # Why u8?
//!
//! The rank of a leftist tree node is the length of its right spine. The
//! leftist invariant makes the right spine the shortest root-to-leaf path, so
//! a node of rank `r` roots a subtree of at least `2^r - 1` nodes. The rank
//! of any tree that fits in memory is therefore bounded by `log₂(n + 1)`:
//!
//! - 2⁶⁴ elements → max rank 64
//! - 2²⁵⁵ elements → max rank 255
//!
//! Since `u8` can represent values 0-255, it is enough for any heap that
//! could ever be built, and it saves 7 bytes per node over `usize` on 64-bit
//! systems.
//!
//! # Missing children
//!
//! A missing child has rank 0 and every present node has rank ≥ 1. See
//! [`rank_of`].

/// Type alias for node rank.
pub type Rank = u8;

/// Maximum valid rank value.
///
/// In practice rank values never exceed ~64 even for the largest possible
/// heaps on current hardware.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. This would require a tree with more than
/// 2²⁵⁵ nodes and so indicates a bug.
///
/// # Example
///
/// ```rust
/// use leftist_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: this should be impossible since rank is at most log₂(n + 1) \
         and u8::MAX (255) supports trees with up to 2²⁵⁵ nodes",
    )
}

/// Rank of an optional child, where a missing child has rank 0.
///
/// # Example
///
/// ```rust
/// use leftist_heap::rank::rank_of;
///
/// assert_eq!(rank_of::<u32>(None, |_| 3), 0);
/// assert_eq!(rank_of(Some(&7u32), |_| 3), 3);
/// ```
#[inline]
pub fn rank_of<C>(child: Option<&C>, rank: impl Fn(&C) -> Rank) -> Rank {
    child.map_or(0, rank)
}
