//! Order-statistic binary search tree for Rust.
//!
//! This crate provides [`RankTreeSet`], an ordered set of unique keys backed by
//! a binary search tree in which every node carries the size of its subtree.
//! The size augmentation turns rank queries and selection into single O(height)
//! descents instead of full traversals:
//!
//! - [`count_less_than`](RankTreeSet::count_less_than) /
//!   [`count_greater_than`](RankTreeSet::count_greater_than) - How many
//!   elements fall on one side of a key
//! - [`count_in_range`](RankTreeSet::count_in_range) - How many elements fall
//!   in an inclusive range
//! - [`kth_smallest`](RankTreeSet::kth_smallest) /
//!   [`get_by_rank`](RankTreeSet::get_by_rank) - The element at a given sorted
//!   position
//! - [`rank_of`](RankTreeSet::rank_of) - The sorted position of an element
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use rank_tree::{Rank, RankTreeSet};
//!
//! let mut set = RankTreeSet::new();
//! for key in [5, 3, 8, 1, 4] {
//!     set.insert(key);
//! }
//!
//! assert!(set.contains(&3));
//! assert_eq!(set.count_less_than(&5), 3);
//! assert_eq!(set.count_in_range(&2, &6), 3);
//! assert_eq!(set.kth_smallest(3), Some(&4));
//! assert_eq!(set[Rank(0)], 1);
//!
//! set.remove(&3);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 4, 5, 8]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library
//!   dependency (the bundled REPL binary uses std)
//! - **O(height) rank operations** - Rank, range-count, and selection queries
//!   via subtree size augmentation
//! - **Explicit results** - Duplicate inserts, absent-key removals, and
//!   out-of-range selections report through return values, never panics
//!
//! # Implementation
//!
//! The tree is a plain binary search tree: nodes own their children outright
//! (`Option<Box<Node>>`) and mutations recurse top-down, each frame returning
//! the possibly replaced subtree to its caller and repairing the stored size
//! on the way back up. There is no rebalancing. All operations are bounded by
//! the tree height, which is O(log n) for random insertion orders but O(n)
//! when keys arrive sorted. Callers that need a guaranteed logarithmic bound
//! should feed keys in shuffled order or reach for a balanced structure.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod command;
pub mod rank_tree_set;

pub use order_statistic::Rank;
pub use rank_tree_set::RankTreeSet;
