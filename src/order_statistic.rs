/// A zero-based rank into the sorted order of a set.
///
/// Wraps a position rather than a key, so that rank-based indexing cannot be
/// confused with key-based lookup at a call site.
///
/// # Examples
///
/// ```
/// use rank_tree::{Rank, RankTreeSet};
///
/// let set = RankTreeSet::from([30, 10, 20]);
///
/// assert_eq!(set[Rank(0)], 10);
/// assert_eq!(set[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
