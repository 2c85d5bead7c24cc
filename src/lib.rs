//! # Lexitrie
//!
//! Measures how many character-level corrections turn noisy text into words
//! of a fixed vocabulary.
//!
//! ## Features
//!
//! - Vocabulary prefix tree with O(1) exact-match lookup
//! - Levenshtein search that shares DP rows across common prefixes and prunes
//!   subtrees by their row minimum
//! - Exact-threshold and branch-and-bound distance strategies
//! - Optional parallel processing of input tokens
//!
//! ```
//! use lexitrie::correction::total_edit_distance;
//! use lexitrie::trie::build_index;
//!
//! let index = build_index(["CAT", "DOG", "BIRD"]).unwrap();
//! assert_eq!(total_edit_distance(&["CAT", "COT", "DIG"], &index).unwrap(), 2);
//! ```

pub mod cli;
pub mod correction;
pub mod error;
pub mod loader;
pub mod search;
pub mod trie;
pub mod util;

pub mod prelude {
    pub use crate::correction::{
        CorrectionConfig, CorrectionReport, SearchStrategy, TokenOutcome, correct_tokens,
        token_distance, total_edit_distance,
    };
    pub use crate::error::{LexitrieError, Result};
    pub use crate::search::BoundedDistanceSearch;
    pub use crate::trie::{PrefixIndex, TrieNode, build_index};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
