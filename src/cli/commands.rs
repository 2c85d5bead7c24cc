//! Command implementations for Lexitrie CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, anyhow};
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::correction::{CorrectionConfig, CorrectionReport, correct_tokens, token_distance};
use crate::error::{LexitrieError, Result};
use crate::loader::{load_tokens, load_vocabulary, normalize_token};
use crate::trie::{PrefixIndex, build_index};
use crate::util::levenshtein::nearest_distance;

/// Execute a CLI command.
pub fn execute_command(args: LexitrieArgs) -> Result<()> {
    match &args.command {
        Command::Total(total_args) => run_total(total_args, &args),
        Command::Distance(distance_args) => run_distance(distance_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Sum the distances of every token in the input file.
fn run_total(args: &TotalArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let config = resolve_config(args)?;

    if !args.input.exists() {
        return Err(anyhow!("Input file {} doesn't exist", args.input.display()).into());
    }
    let index = load_index(&args.vocabulary)?;
    let tokens = load_tokens(&args.input)
        .with_context(|| format!("Error opening input file {}", args.input.display()))?;

    let start_time = Instant::now();
    let report = correct_tokens(&tokens, &index, &config)?;
    let duration = start_time.elapsed();

    if args.verify {
        verify_report(&report, &index)?;
        info!("Verified {} distances against a full scan", report.tokens.len());
    }

    let result = TotalResult {
        total: report.total,
        tokens: report.tokens.len(),
        exact_matches: report.exact_matches,
        unresolved: report.unresolved,
        duration_ms: duration.as_millis() as u64,
        details: args.details.then_some(report.tokens),
    };

    output_result("Total edit distance", &result, cli_args)
}

/// Load `--config` if given and apply the command line overrides on top.
fn resolve_config(args: &TotalArgs) -> Result<CorrectionConfig> {
    let mut config = match &args.config {
        Some(path) => CorrectionConfig::load_from_file(path)
            .with_context(|| format!("Error loading config file {}", path.display()))?,
        None => CorrectionConfig::default(),
    };
    if args.max_distance.is_some() {
        config.max_distance = args.max_distance;
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }
    if args.no_prune {
        config.prune = false;
    }
    Ok(config)
}

/// Look up a single word.
fn run_distance(args: &DistanceArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let config = CorrectionConfig {
        max_distance: args.max_distance,
        strategy: args.strategy.map(Into::into).unwrap_or_default(),
        ..Default::default()
    };
    config.validate()?;

    let index = load_index(&args.vocabulary)?;
    let word = normalize_token(&args.word);
    let distance = token_distance(&word, &index, &config)?;

    if args.verify
        && let Some(distance) = distance
    {
        check_distance(&word, distance, &index)?;
    }

    output_result(
        "Minimum edit distance",
        &DistanceResult { word, distance },
        cli_args,
    )
}

/// Show index statistics.
fn show_stats(args: &StatsArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let index = load_index(&args.vocabulary)?;

    output_result(
        "Vocabulary index statistics",
        &IndexStatsResult {
            words: index.len(),
            nodes: index.node_count(),
            max_depth: index.max_depth(),
            min_word_len: index.min_word_len(),
        },
        cli_args,
    )
}

/// Load a vocabulary file and build its index.
fn load_index(path: &Path) -> Result<PrefixIndex> {
    if !path.exists() {
        return Err(anyhow!("Vocabulary file {} doesn't exist", path.display()).into());
    }

    let words = load_vocabulary(path)
        .with_context(|| format!("Error opening vocabulary file {}", path.display()))?;
    build_index(&words)
}

/// Compare every resolved distance in `report` with a full vocabulary scan.
fn verify_report(report: &CorrectionReport, index: &PrefixIndex) -> Result<()> {
    for outcome in &report.tokens {
        if let Some(distance) = outcome.distance {
            check_distance(&outcome.token, distance, index)?;
        }
    }
    Ok(())
}

fn check_distance(word: &str, distance: usize, index: &PrefixIndex) -> Result<()> {
    let expected = nearest_distance(word, index.words());
    if expected != Some(distance) {
        return Err(LexitrieError::search(format!(
            "{word:?}: trie search gave {distance}, full scan gave {expected:?}"
        )));
    }
    Ok(())
}
