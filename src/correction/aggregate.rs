//! Per-token minimum distances and their sum.

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::correction::config::{CorrectionConfig, SearchStrategy};
use crate::error::{LexitrieError, Result};
use crate::search::BoundedDistanceSearch;
use crate::trie::PrefixIndex;

/// Distance found for one input token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOutcome {
    /// The token as it was searched.
    pub token: String,
    /// Minimum edit distance to the vocabulary, or `None` if it exceeds the
    /// configured `max_distance`.
    pub distance: Option<usize>,
}

impl TokenOutcome {
    /// Check if the token is a vocabulary word.
    pub fn is_exact(&self) -> bool {
        self.distance == Some(0)
    }
}

/// Distances for a batch of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// One outcome per input token, in input order.
    pub tokens: Vec<TokenOutcome>,
    /// Sum of all resolved distances.
    pub total: usize,
    /// Number of tokens found verbatim in the vocabulary.
    pub exact_matches: usize,
    /// Number of tokens whose distance exceeded `max_distance`.
    pub unresolved: usize,
}

impl CorrectionReport {
    fn from_outcomes(tokens: Vec<TokenOutcome>) -> Self {
        let total = tokens.iter().filter_map(|t| t.distance).sum();
        let exact_matches = tokens.iter().filter(|t| t.is_exact()).count();
        let unresolved = tokens.iter().filter(|t| t.distance.is_none()).count();

        CorrectionReport {
            tokens,
            total,
            exact_matches,
            unresolved,
        }
    }
}

/// Minimum edit distance from `token` to the vocabulary.
///
/// Tokens present verbatim cost 0. Otherwise the distance is searched for
/// according to `config.strategy`, never beyond
/// `max(len(token), shortest word length)`, which bounds the distance to the
/// shortest vocabulary word. Returns `Ok(None)` when `config.max_distance`
/// stops the search first, and a config error when `config` is invalid.
pub fn token_distance(
    token: &str,
    index: &PrefixIndex,
    config: &CorrectionConfig,
) -> Result<Option<usize>> {
    config.validate()?;

    let Some(shortest) = index.min_word_len() else {
        return Err(LexitrieError::EmptyVocabulary);
    };

    if index.contains(token) {
        return Ok(Some(0));
    }

    let bound = token.chars().count().max(shortest);
    let limit = config.max_distance.map_or(bound, |cap| cap.min(bound));
    let searcher = BoundedDistanceSearch::new(index).with_pruning(config.prune);

    let found = match config.strategy {
        SearchStrategy::IncreasingThreshold => {
            (1..=limit).find(|&distance| searcher.search(token, distance))
        }
        SearchStrategy::BranchAndBound => searcher.min_distance(token, limit),
    };

    match found {
        Some(distance) => {
            debug!("{token:?}: distance {distance}");
            Ok(Some(distance))
        }
        None if limit < bound => {
            warn!("{token:?}: no vocabulary word within {limit} edits");
            Ok(None)
        }
        None => Err(LexitrieError::internal(format!(
            "no vocabulary word within {bound} edits of {token:?}"
        ))),
    }
}

/// Compute the distance of every token and collect them into a report.
pub fn correct_tokens<S>(
    tokens: &[S],
    index: &PrefixIndex,
    config: &CorrectionConfig,
) -> Result<CorrectionReport>
where
    S: AsRef<str> + Sync,
{
    config.validate()?;

    let outcome = |token: &S| -> Result<TokenOutcome> {
        let token = token.as_ref();
        Ok(TokenOutcome {
            token: token.to_string(),
            distance: token_distance(token, index, config)?,
        })
    };

    let outcomes = if config.parallel {
        tokens.par_iter().map(outcome).collect::<Result<Vec<_>>>()?
    } else {
        tokens.iter().map(outcome).collect::<Result<Vec<_>>>()?
    };

    let report = CorrectionReport::from_outcomes(outcomes);
    info!(
        "Corrected {} tokens: total distance {}, {} exact, {} unresolved",
        report.tokens.len(),
        report.total,
        report.exact_matches,
        report.unresolved
    );

    Ok(report)
}

/// Sum of the minimum edit distances of `tokens` to the vocabulary.
pub fn total_edit_distance<S>(tokens: &[S], index: &PrefixIndex) -> Result<usize>
where
    S: AsRef<str> + Sync,
{
    Ok(correct_tokens(tokens, index, &CorrectionConfig::default())?.total)
}
