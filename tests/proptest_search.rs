//! Property-based tests for the trie distance search.
//!
//! Small alphabets keep words close to each other, so most queries have
//! several candidates within a few edits and pruning decisions actually matter.

use lexitrie::correction::{CorrectionConfig, SearchStrategy, token_distance, total_edit_distance};
use lexitrie::search::BoundedDistanceSearch;
use lexitrie::trie::build_index;
use lexitrie::util::levenshtein::{levenshtein_distance, nearest_distance};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[A-D]{1,7}"
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[A-E]{0,8}"
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..=12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The threshold loop finds the same distance as a full scan.
    #[test]
    fn prop_distance_matches_brute_force(
        vocabulary in vocabulary_strategy(),
        query in query_strategy(),
    ) {
        let index = build_index(&vocabulary).unwrap();
        let expected = nearest_distance(&query, &vocabulary);

        let found = token_distance(&query, &index, &CorrectionConfig::default()).unwrap();
        prop_assert_eq!(found, expected);
    }

    /// Branch-and-bound agrees with the threshold loop.
    #[test]
    fn prop_strategies_agree(
        vocabulary in vocabulary_strategy(),
        query in query_strategy(),
    ) {
        let index = build_index(&vocabulary).unwrap();
        let branch_and_bound = CorrectionConfig {
            strategy: SearchStrategy::BranchAndBound,
            ..Default::default()
        };

        prop_assert_eq!(
            token_distance(&query, &index, &branch_and_bound).unwrap(),
            token_distance(&query, &index, &CorrectionConfig::default()).unwrap()
        );
    }

    /// Pruning never changes whether a threshold is hit.
    #[test]
    fn prop_pruning_is_sound(
        vocabulary in vocabulary_strategy(),
        query in query_strategy(),
        distance in 0usize..=9,
    ) {
        let index = build_index(&vocabulary).unwrap();
        let pruned = BoundedDistanceSearch::new(&index);
        let full = BoundedDistanceSearch::new(&index).with_pruning(false);

        prop_assert_eq!(pruned.search(&query, distance), full.search(&query, distance));
        prop_assert_eq!(pruned.min_distance(&query, distance), full.min_distance(&query, distance));
    }

    /// Without pruning, the search hits exactly the distances that occur in
    /// the vocabulary.
    #[test]
    fn prop_unpruned_search_is_exact(
        vocabulary in vocabulary_strategy(),
        query in query_strategy(),
        distance in 0usize..=9,
    ) {
        let index = build_index(&vocabulary).unwrap();
        let full = BoundedDistanceSearch::new(&index).with_pruning(false);
        let occurs = vocabulary
            .iter()
            .any(|word| levenshtein_distance(&query, word) == distance);

        prop_assert_eq!(full.search(&query, distance), occurs);
    }

    /// No threshold below the true minimum succeeds, and the minimum does.
    #[test]
    fn prop_monotonic_threshold(
        vocabulary in vocabulary_strategy(),
        query in query_strategy(),
    ) {
        let index = build_index(&vocabulary).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);
        let minimum = nearest_distance(&query, &vocabulary).unwrap();

        for smaller in 0..minimum {
            prop_assert!(!searcher.search(&query, smaller));
        }
        prop_assert!(searcher.search(&query, minimum));
    }

    /// Every vocabulary word costs nothing.
    #[test]
    fn prop_vocabulary_words_cost_zero(vocabulary in vocabulary_strategy()) {
        let index = build_index(&vocabulary).unwrap();
        prop_assert_eq!(total_edit_distance(&vocabulary, &index).unwrap(), 0);
    }

    /// Inserting every word twice changes neither the tree nor the totals.
    #[test]
    fn prop_duplicate_insertion_is_idempotent(
        vocabulary in vocabulary_strategy(),
        queries in prop::collection::vec(query_strategy(), 0..6),
    ) {
        let once = build_index(&vocabulary).unwrap();
        let twice = build_index(vocabulary.iter().chain(vocabulary.iter())).unwrap();

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(
            total_edit_distance(&queries, &once).unwrap(),
            total_edit_distance(&queries, &twice).unwrap()
        );
    }
}
