//! Command line argument parsing for Lexitrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::correction::SearchStrategy;

/// Lexitrie - count the character edits needed to fit text to a vocabulary
#[derive(Parser, Debug, Clone)]
#[command(name = "lexitrie")]
#[command(about = "Count the character edits needed to fit text to a vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexitrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexitrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sum the minimum edit distances of every token in an input file
    Total(TotalArgs),

    /// Minimum edit distance of a single word
    Distance(DistanceArgs),

    /// Show vocabulary index statistics
    Stats(StatsArgs),
}

/// Arguments for summing distances over an input file
#[derive(Parser, Debug, Clone)]
pub struct TotalArgs {
    /// Input text file
    #[arg(value_name = "INPUT", default_value = "187")]
    pub input: PathBuf,

    /// Vocabulary file, one word per line
    #[arg(
        long,
        value_name = "FILE",
        env = "LEXITRIE_VOCABULARY",
        default_value = "vocabulary.txt"
    )]
    pub vocabulary: PathBuf,

    /// Correction configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Largest distance tried per token
    #[arg(short, long)]
    pub max_distance: Option<usize>,

    /// Process tokens in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Distance search strategy
    #[arg(short, long)]
    pub strategy: Option<StrategyArg>,

    /// Disable subtree pruning
    #[arg(long)]
    pub no_prune: bool,

    /// Include per-token distances in the output
    #[arg(short, long)]
    pub details: bool,

    /// Cross-check every distance against a full scan of the vocabulary
    #[arg(long)]
    pub verify: bool,
}

/// Arguments for a single word
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Word to look up (upper-cased before searching)
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Vocabulary file, one word per line
    #[arg(
        long,
        value_name = "FILE",
        env = "LEXITRIE_VOCABULARY",
        default_value = "vocabulary.txt"
    )]
    pub vocabulary: PathBuf,

    /// Largest distance tried
    #[arg(short, long)]
    pub max_distance: Option<usize>,

    /// Distance search strategy
    #[arg(short, long)]
    pub strategy: Option<StrategyArg>,

    /// Cross-check the distance against a full scan of the vocabulary
    #[arg(long)]
    pub verify: bool,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Vocabulary file, one word per line
    #[arg(
        long,
        value_name = "FILE",
        env = "LEXITRIE_VOCABULARY",
        default_value = "vocabulary.txt"
    )]
    pub vocabulary: PathBuf,
}

/// Search strategies available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyArg {
    /// Try distances 1, 2, 3, ... in order
    Threshold,
    /// One traversal with a tightening bound
    BranchAndBound,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Threshold => SearchStrategy::IncreasingThreshold,
            StrategyArg::BranchAndBound => SearchStrategy::BranchAndBound,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
