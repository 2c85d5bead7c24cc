//! Vocabulary prefix tree.
//!
//! The [`PrefixIndex`] stores every vocabulary word as a path of single
//! character edges from a shared root, so words with a common prefix share
//! nodes. Distance searches walk this tree once per query instead of comparing
//! the query against every word.

pub mod prefix_index;

pub use prefix_index::*;
