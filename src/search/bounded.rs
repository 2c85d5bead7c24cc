//! Distance-bounded depth-first search over the vocabulary trie.
//!
//! Each visited node gets one row of the Levenshtein DP matrix, derived from
//! its parent's row and the edge character. Row `j` holds the edit distance
//! between the node's path and the first `j` query characters, and the row
//! minimum is a lower bound on the distance from the query to any word below
//! the node. Subtrees whose bound already exceeds the budget are skipped.
//!
//! The traversal uses an explicit stack and a row buffer indexed by depth, so
//! no recursion is involved regardless of word length.

use log::trace;

use crate::trie::{PrefixIndex, TrieNode};

/// Counters collected during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Trie nodes whose DP row was computed.
    pub nodes_visited: usize,
    /// Nodes whose children were skipped because the row minimum was too large.
    pub subtrees_pruned: usize,
}

/// Result of a single exact-threshold search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether a terminal node at exactly the requested distance was reached.
    pub found: bool,
    /// Traversal counters.
    pub stats: TraversalStats,
}

/// DP rows for the current root-to-node path, one per depth.
///
/// Rows at depth `d` are overwritten by the next node visited at depth `d`.
/// With depth-first order the row at `d - 1` still belongs to the parent of
/// any node popped at depth `d`.
struct DistanceRows<'q> {
    query: &'q [char],
    rows: Vec<Vec<usize>>,
}

impl<'q> DistanceRows<'q> {
    fn new(query: &'q [char]) -> Self {
        DistanceRows {
            query,
            rows: vec![(0..=query.len()).collect()],
        }
    }

    /// Compute the row of a node at `depth` (at least 1) reached through `c`.
    fn advance(&mut self, depth: usize, c: char) -> &[usize] {
        if self.rows.len() == depth {
            self.rows.push(vec![0; self.query.len() + 1]);
        }

        let (parents, current) = self.rows.split_at_mut(depth);
        let previous_row = &parents[depth - 1];
        let current_row = &mut current[0];

        current_row[0] = previous_row[0] + 1;
        for j in 1..=self.query.len() {
            let insertion_cost = current_row[j - 1] + 1;
            let deletion_cost = previous_row[j] + 1;
            let substitution_cost = previous_row[j - 1] + usize::from(self.query[j - 1] != c);
            current_row[j] = insertion_cost.min(deletion_cost).min(substitution_cost);
        }

        &self.rows[depth]
    }
}

type WorkItem<'a> = (&'a TrieNode, char, usize);

fn push_children<'a>(stack: &mut Vec<WorkItem<'a>>, node: &'a TrieNode, depth: usize) {
    // Reversed so that siblings pop in ascending character order.
    stack.extend(
        node.children()
            .iter()
            .rev()
            .map(|(&c, child)| (child, c, depth + 1)),
    );
}

/// Check if a distance is within `cap` and strictly better than `best`.
fn improves(distance: usize, best: Option<usize>, cap: usize) -> bool {
    distance <= cap && best.is_none_or(|b| distance < b)
}

/// Searches a [`PrefixIndex`] for vocabulary words at a given edit distance.
///
/// # Exact-equality contract
///
/// [`search`](Self::search) answers "is some vocabulary word at distance
/// *exactly* `distance`, as seen by the pruned traversal?", not "within
/// `distance`". Called with thresholds `1, 2, 3, …` in order, the first
/// `true` is the minimum distance. Called in isolation with a threshold below
/// the true minimum, it returns `false`, and a threshold above the minimum may
/// or may not succeed. Use [`min_distance`](Self::min_distance) when the
/// threshold loop is not wanted.
#[derive(Debug, Clone, Copy)]
pub struct BoundedDistanceSearch<'a> {
    index: &'a PrefixIndex,
    prune: bool,
}

impl<'a> BoundedDistanceSearch<'a> {
    /// Create a searcher over a built index, with pruning enabled.
    pub fn new(index: &'a PrefixIndex) -> Self {
        BoundedDistanceSearch { index, prune: true }
    }

    /// Enable or disable subtree pruning. Results never depend on it; only the
    /// number of visited nodes does.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Check if a vocabulary word at exactly `distance` edits from `word` is
    /// reachable. See the type-level docs for the exact-equality contract.
    pub fn search(&self, word: &str, distance: usize) -> bool {
        self.search_traced(word, distance).found
    }

    /// Same as [`search`](Self::search), also returning traversal counters.
    pub fn search_traced(&self, word: &str, distance: usize) -> SearchOutcome {
        let query: Vec<char> = word.chars().collect();
        let mut rows = DistanceRows::new(&query);
        let mut stats = TraversalStats::default();

        let mut stack = Vec::new();
        push_children(&mut stack, self.index.root(), 0);

        while let Some((node, c, depth)) = stack.pop() {
            let row = rows.advance(depth, c);
            stats.nodes_visited += 1;

            let last = row[row.len() - 1];
            if node.is_terminal() && last == distance {
                trace!(
                    "{word:?} matched {:?} at distance {distance}",
                    node.terminal_word().unwrap_or_default()
                );
                return SearchOutcome { found: true, stats };
            }

            let lower_bound = row.iter().copied().min().unwrap_or(last);
            if !self.prune || lower_bound <= distance {
                push_children(&mut stack, node, depth);
            } else if !node.children().is_empty() {
                stats.subtrees_pruned += 1;
            }
        }

        SearchOutcome {
            found: false,
            stats,
        }
    }

    /// Smallest edit distance from `word` to any vocabulary word, provided it
    /// does not exceed `cap`.
    ///
    /// Runs one branch-and-bound traversal: the pruning bound starts at `cap`
    /// and tightens to the best distance found so far.
    pub fn min_distance(&self, word: &str, cap: usize) -> Option<usize> {
        let query: Vec<char> = word.chars().collect();
        let mut rows = DistanceRows::new(&query);
        let mut best: Option<usize> = None;

        let mut stack = Vec::new();
        push_children(&mut stack, self.index.root(), 0);

        while let Some((node, c, depth)) = stack.pop() {
            let row = rows.advance(depth, c);

            let last = row[row.len() - 1];
            let lower_bound = row.iter().copied().min().unwrap_or(last);

            if node.is_terminal() && improves(last, best, cap) {
                best = Some(last);
                if last == 0 {
                    break;
                }
            }

            if !self.prune || improves(lower_bound, best, cap) {
                push_children(&mut stack, node, depth);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::build_index;

    #[test]
    fn test_search_finds_exact_threshold() {
        let index = build_index(["CAT", "DOG", "BIRD"]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert!(searcher.search("COT", 1));
        assert!(searcher.search("DIG", 1));
        assert!(searcher.search("CAT", 0));
        assert!(!searcher.search("COT", 0));
    }

    #[test]
    fn test_search_below_minimum_is_false() {
        let index = build_index(["A"]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert!(!searcher.search("ABC", 1));
        assert!(searcher.search("ABC", 2));
    }

    #[test]
    fn test_search_is_exact_not_within() {
        // Only word is at distance 1; threshold 2 is never hit exactly.
        let index = build_index(["CAT"]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert!(searcher.search("CAR", 1));
        assert!(!searcher.search("CAR", 2));
    }

    #[test]
    fn test_search_needs_descendant_terminal() {
        // "AB" is a prefix of the only word but not a word itself.
        let index = build_index(["ABCD"]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert!(!searcher.search("AB", 0));
        assert!(searcher.search("AB", 2));
    }

    #[test]
    fn test_empty_query() {
        let index = build_index(["AB", "XYZ"]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert!(!searcher.search("", 0));
        assert!(!searcher.search("", 1));
        assert!(searcher.search("", 2));
        assert_eq!(searcher.min_distance("", 10), Some(2));
    }

    #[test]
    fn test_pruning_skips_far_subtrees() {
        let index = build_index(["CATALOG", "ZZZZZZZZ"]).unwrap();
        let pruned = BoundedDistanceSearch::new(&index).search_traced("CAT", 1);
        let full = BoundedDistanceSearch::new(&index)
            .with_pruning(false)
            .search_traced("CAT", 1);

        assert!(!pruned.found);
        assert!(!full.found);
        assert_eq!(full.stats.nodes_visited, 15);
        assert_eq!(full.stats.subtrees_pruned, 0);
        assert_eq!(pruned.stats.subtrees_pruned, 2);
        assert!(pruned.stats.nodes_visited < full.stats.nodes_visited);
    }

    #[test]
    fn test_pruning_does_not_change_result() {
        let index = build_index(["KITTEN", "SITTING", "MITTENS", "BITTEN"]).unwrap();
        let pruned = BoundedDistanceSearch::new(&index);
        let full = BoundedDistanceSearch::new(&index).with_pruning(false);

        for word in ["KNITTING", "SIT", "MITT", "B", "TEN"] {
            for distance in 0..=8 {
                assert_eq!(
                    pruned.search(word, distance),
                    full.search(word, distance),
                    "{word} at {distance}"
                );
            }
        }
    }

    #[test]
    fn test_min_distance() {
        let index = build_index(["CAT", "DOG", "BIRD"]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert_eq!(searcher.min_distance("CAT", 5), Some(0));
        assert_eq!(searcher.min_distance("COT", 5), Some(1));
        assert_eq!(searcher.min_distance("BORED", 5), Some(2));
        assert_eq!(searcher.min_distance("BORED", 1), None);
    }

    #[test]
    fn test_long_word_does_not_recurse() {
        let long_word: String = std::iter::repeat_n('A', 50_000).collect();
        let index = build_index([long_word.as_str()]).unwrap();
        let searcher = BoundedDistanceSearch::new(&index);

        assert!(searcher.search("AAAA", 49_996));
    }

    #[test]
    fn test_rows_follow_recurrence() {
        let query: Vec<char> = "CAT".chars().collect();
        let mut rows = DistanceRows::new(&query);

        assert_eq!(rows.advance(1, 'C'), &[1, 0, 1, 2]);
        assert_eq!(rows.advance(2, 'O'), &[2, 1, 1, 2]);
        assert_eq!(rows.advance(3, 'T'), &[3, 2, 2, 1]);
        // Sibling at depth 2 reuses the depth-1 row.
        assert_eq!(rows.advance(2, 'A'), &[2, 1, 0, 1]);
    }
}
