//! Prefix tree over the reference vocabulary.

use std::collections::BTreeMap;

use ahash::AHashSet;
use log::debug;

use crate::error::{LexitrieError, Result};

/// A node of the vocabulary trie.
///
/// Children are keyed by the edge character. A `BTreeMap` keeps sibling
/// iteration in ascending character order, which makes traversal order
/// deterministic.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal_word: Option<String>,
}

impl TrieNode {
    /// Create a new node with no children and no terminal word.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Child nodes keyed by edge character.
    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    /// Get the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// The vocabulary word ending exactly at this node.
    pub fn terminal_word(&self) -> Option<&str> {
        self.terminal_word.as_deref()
    }

    /// Check if some vocabulary word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal_word.is_some()
    }
}

impl Drop for TrieNode {
    // Unlink descendants onto a heap stack so that dropping a very deep
    // chain does not recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Trie of vocabulary words plus a hash set for exact membership checks.
///
/// The index only grows. Once built it is read-only and can be shared across
/// threads by reference.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    words: AHashSet<String>,
    node_count: usize,
    max_depth: usize,
    min_word_len: Option<usize>,
}

impl PrefixIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        PrefixIndex::default()
    }

    /// Insert a word, creating one node per character that is not already
    /// present on its path.
    ///
    /// Returns `true` if the word was not in the index before. Inserting the
    /// same word again leaves the index unchanged. The empty word is ignored,
    /// since the root is never a match candidate.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || self.words.contains(word) {
            return false;
        }

        let mut node = &mut self.root;
        let mut depth = 0;
        let mut created = 0;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
            depth += 1;
        }
        node.terminal_word = Some(word.to_string());

        self.node_count += created;
        self.words.insert(word.to_string());
        self.max_depth = self.max_depth.max(depth);
        self.min_word_len = Some(self.min_word_len.map_or(depth, |len| len.min(depth)));
        true
    }

    /// Check if `word` was inserted verbatim.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Walk the trie along `prefix` and return the node it ends at.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// The root node. It holds no character and is never terminal.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of trie nodes, excluding the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length in characters of the longest word.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Length in characters of the shortest word, or `None` when empty.
    pub fn min_word_len(&self) -> Option<usize> {
        self.min_word_len
    }

    /// Iterate over the distinct words in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Build a [`PrefixIndex`] from a vocabulary.
///
/// Fails with [`LexitrieError::EmptyVocabulary`] if the vocabulary yields no
/// word, and with an index error if any supplied word is empty.
pub fn build_index<I, S>(vocabulary: I) -> Result<PrefixIndex>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = PrefixIndex::new();
    let mut supplied = 0usize;

    for (position, word) in vocabulary.into_iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(LexitrieError::index(format!(
                "empty word at vocabulary position {position}"
            )));
        }
        index.insert(word);
        supplied += 1;
    }

    if index.is_empty() {
        return Err(LexitrieError::EmptyVocabulary);
    }

    debug!(
        "Built prefix index: {} words ({} supplied), {} nodes, max depth {}",
        index.len(),
        supplied,
        index.node_count(),
        index.max_depth()
    );

    Ok(index)
}
