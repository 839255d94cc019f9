//! Fuzzy matching algorithms.
//!
//! A matcher decides whether a pattern is an ordered subsequence of a choice
//! and how good that placement is. Scores compare across choices for the same
//! pattern only; higher is better.

/// Greedy leftmost subsequence matcher
pub mod greedy;
pub(crate) mod util;

pub(crate) type IndexType = usize;
pub(crate) type ScoreType = i64;

/// Matched character indices, one per pattern character, strictly increasing
pub type MatchIndices = Vec<IndexType>;

/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }
}
