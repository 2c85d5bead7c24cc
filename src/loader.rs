//! Reading vocabulary and input files.
//!
//! The vocabulary file holds one word per line and is used verbatim. The input
//! file is free text: it is split on whitespace and every token is upper-cased
//! before it is compared against the vocabulary.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Normalize a raw input token for lookup.
pub fn normalize_token(token: &str) -> String {
    token.to_uppercase()
}

/// Split free text into normalized tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize_token).collect()
}

/// Load a vocabulary from a text file with one word per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    debug!("Loaded {} vocabulary words from {}", words.len(), path.display());
    Ok(words)
}

/// Load and normalize the tokens of an input file.
pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let tokens = tokenize(&fs::read_to_string(path)?);

    debug!("Loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}
