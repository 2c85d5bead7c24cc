//! Edit-distance search over the vocabulary trie.

pub mod bounded;

pub use bounded::*;
