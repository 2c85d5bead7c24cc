//! Configuration for the correction driver.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexitrieError, Result};

/// How the minimum distance of a single token is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Exact-threshold searches with `D = 1, 2, 3, …` until one succeeds.
    #[default]
    IncreasingThreshold,
    /// A single traversal whose pruning bound tightens to the best match so far.
    BranchAndBound,
}

/// Configuration for computing token distances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Largest distance tried per token. Tokens that need more are reported
    /// as unresolved instead of being searched further.
    pub max_distance: Option<usize>,
    /// Process tokens on the rayon thread pool.
    pub parallel: bool,
    /// Strategy used for tokens not found verbatim.
    pub strategy: SearchStrategy,
    /// Skip trie subtrees that cannot reach the current budget.
    pub prune: bool,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            max_distance: None,
            parallel: false,
            strategy: SearchStrategy::default(),
            prune: true,
        }
    }
}

impl CorrectionConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: CorrectionConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance == Some(0) {
            return Err(LexitrieError::config("max_distance must be at least 1"));
        }
        Ok(())
    }
}
