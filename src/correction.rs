//! Correction cost of noisy input against the vocabulary.
//!
//! Each token found verbatim costs nothing. Every other token costs its
//! minimum edit distance to the vocabulary, and the report sums these costs.

pub mod aggregate;
pub mod config;

pub use aggregate::*;
pub use config::*;
