//! Shared utility modules used across Lexitrie components.

pub mod levenshtein;
