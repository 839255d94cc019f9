//! Greedy leftmost subsequence matcher.
//!
//! The candidate is scanned once, left to right; the next unmatched pattern
//! character is consumed whenever it equals the current candidate character
//! (both folded to lowercase). The first placement found this way is the only
//! one scored, there is no search for a better placement further right.
//!
//! The score rewards tight, contiguous and word-aligned matches:
//!
//! ```text
//! score = 2 * len - (span - len) + 2 * adjacent_pairs + 3 * word_starts
//! ```
//!
//! where `span` is the distance from the first to the last matched char
//! (inclusive), `adjacent_pairs` counts consecutive matched indices that
//! differ by one, and `word_starts` counts matches at index 0 or right after
//! a non-alphanumeric char.
//!
//! # Example:
//! ```
//! use gototab::fuzzy_matcher::FuzzyMatcher;
//! use gototab::fuzzy_matcher::greedy::GreedyMatcher;
//!
//! let matcher = GreedyMatcher::default();
//!
//! assert_eq!(None, matcher.fuzzy_match("abc", "abx"));
//! assert!(matcher.fuzzy_match("axbycz", "abc").is_some());
//!
//! let (_score, indices) = matcher.fuzzy_indices("axbycz", "abc").unwrap();
//! assert_eq!(indices, [0, 2, 4]);
//! ```

use crate::fuzzy_matcher::util::{fold_char, fold_chars, is_word_start};
use crate::fuzzy_matcher::{FuzzyMatcher, IndexType, MatchIndices, ScoreType};

/// Score given to every choice when the pattern is empty.
///
/// It is the lowest valid score; an empty pattern ranks nothing above
/// anything else, so a stable sort keeps the input order.
pub const EMPTY_QUERY_SCORE: ScoreType = ScoreType::MIN;

const SCORE_MATCH: ScoreType = 2;
const SCORE_GAP: ScoreType = 1;
const BONUS_CONSECUTIVE: ScoreType = 2;
const BONUS_WORD_START: ScoreType = 3;

/// Case-insensitive greedy matcher, see the module docs for the scoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyMatcher;

impl GreedyMatcher {
    /// Greedy leftmost placement of `pattern` inside `choice`.
    ///
    /// Returns the matched char indices, or `None` as soon as the choice runs
    /// out before the pattern does.
    fn find_positions(choice: &[char], pattern: &[char]) -> Option<MatchIndices> {
        let mut positions = Vec::with_capacity(pattern.len());
        let mut pattern_iter = pattern.iter().peekable();

        for (idx, &ch) in choice.iter().enumerate() {
            match pattern_iter.peek() {
                Some(&&wanted) if wanted == ch => {
                    positions.push(idx);
                    pattern_iter.next();
                }
                Some(_) => {}
                None => break,
            }
        }

        if pattern_iter.peek().is_some() {
            return None;
        }
        Some(positions)
    }

    fn score(choice: &[char], positions: &[IndexType]) -> ScoreType {
        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            return EMPTY_QUERY_SCORE;
        };
        let len = positions.len() as ScoreType;
        let span = (last - first + 1) as ScoreType;

        let consecutive = positions.windows(2).filter(|pair| pair[1] == pair[0] + 1).count() as ScoreType;
        let word_starts = positions
            .iter()
            .filter(|&&idx| is_word_start(choice, idx))
            .count() as ScoreType;

        len * SCORE_MATCH - (span - len) * SCORE_GAP + consecutive * BONUS_CONSECUTIVE + word_starts * BONUS_WORD_START
    }
}

impl FuzzyMatcher for GreedyMatcher {
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
        if pattern.is_empty() {
            return Some((EMPTY_QUERY_SCORE, Vec::new()));
        }

        let folded_pattern = fold_chars(pattern);
        let choice_chars: Vec<char> = choice.chars().collect();
        let folded_choice: Vec<char> = choice_chars.iter().copied().map(fold_char).collect();

        let positions = Self::find_positions(&folded_choice, &folded_pattern)?;
        let score = Self::score(&choice_chars, &positions);
        trace!("greedy match {pattern:?} in {choice:?}: {positions:?} -> {score}");
        Some((score, positions))
    }
}

/// Fuzzy match `choice` against `pattern`, returning the score and matched
/// character indices.
pub fn fuzzy_indices(choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
    GreedyMatcher.fuzzy_indices(choice, pattern)
}

/// Fuzzy match `choice` against `pattern`, returning only the score.
pub fn fuzzy_match(choice: &str, pattern: &str) -> Option<ScoreType> {
    GreedyMatcher.fuzzy_match(choice, pattern)
}
