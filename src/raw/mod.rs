mod node;
mod raw_rank_tree;

pub(crate) use node::{Link, Node};
pub(crate) use raw_rank_tree::RawRankTree;
