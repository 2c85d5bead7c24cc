//! Reference Levenshtein distance algorithms.
//!
//! These compute the full DP matrix for a single pair of strings. The trie
//! search never calls them; they back the brute-force oracle used by tests and
//! benchmarks, and the `--verify` path of the CLI.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    // Two rows are enough: row i only reads row i - 1
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Minimum Levenshtein distance from `word` to any entry of `vocabulary`,
/// computed by scanning every entry.
///
/// Returns `None` for an empty vocabulary.
pub fn nearest_distance<I, S>(word: &str, vocabulary: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<usize> = None;
    for candidate in vocabulary {
        let distance = levenshtein_distance(word, candidate.as_ref());
        if best.is_none_or(|b| distance < b) {
            best = Some(distance);
            if distance == 0 {
                break;
            }
        }
    }
    best
}
