//! Error types for the Lexitrie library.
//!
//! All errors are represented by the [`LexitrieError`] enum. Index construction
//! fails fast on an empty vocabulary, so no search can ever run without at
//! least one reachable word.
//!
//! # Examples
//!
//! ```
//! use lexitrie::error::{LexitrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexitrieError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexitrie operations.
#[derive(Error, Debug)]
pub enum LexitrieError {
    /// I/O errors (reading vocabulary or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The vocabulary contained no words.
    #[error("Index error: empty vocabulary")]
    EmptyVocabulary,

    /// Index construction errors
    #[error("Index error: {0}")]
    Index(String),

    /// Search errors
    #[error("Search error: {0}")]
    Search(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexitrieError.
pub type Result<T> = std::result::Result<T, LexitrieError>;

impl LexitrieError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Index(msg.into())
    }

    /// Create a new search error.
    pub fn search<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Search(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::other(format!("Internal error: {}", msg.into()))
    }
}
