//! Literal, case-insensitive substring location.
//!
//! This is what decides which parts of a displayed string get emphasized. It
//! is independent of the fuzzy matcher: a choice can match fuzzily and still
//! carry no emphasis at all when the query never appears verbatim in it.

use std::fmt::{Display, Error, Formatter};

use crate::fuzzy_matcher::util::fold_chars;
use crate::{AttributedString, EmphasisSpan};

//------------------------------------------------------------------------------
// Exact locator
/// Finds literal occurrences of one query, ignoring case
#[derive(Debug, Clone, Default)]
pub struct ExactLocator {
    query: String,
    folded_query: Vec<char>,
}

impl ExactLocator {
    /// Prepares a locator for `query`, folding it once
    pub fn new(query: &str) -> Self {
        ExactLocator {
            query: query.to_string(),
            folded_query: fold_chars(query),
        }
    }

    /// Every non-overlapping occurrence of the query in `text`, left to right.
    ///
    /// The search resumes right after the end of the previous occurrence, so
    /// `aa` in `aaa` yields a single span. An empty query yields nothing.
    pub fn locate(&self, text: &str) -> Vec<EmphasisSpan> {
        let needle = &self.folded_query[..];
        if needle.is_empty() {
            return Vec::new();
        }

        let haystack = fold_chars(text);
        let len = needle.len();
        let mut spans = Vec::new();
        let mut start = 0;
        while start + len <= haystack.len() {
            let Some(offset) = haystack[start..].windows(len).position(|window| window == needle) else {
                break;
            };
            let begin = start + offset;
            spans.push(EmphasisSpan::new(begin, begin + len));
            start = begin + len;
        }
        spans
    }

    /// Wraps `text` with its emphasis spans
    pub fn attribute(&self, text: &str) -> AttributedString {
        AttributedString::new(text, self.locate(text))
    }
}

impl Display for ExactLocator {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Exact|{})", self.query)
    }
}

/// Emphasis spans of `query` inside `text`, see [`ExactLocator::locate`]
pub fn locate(query: &str, text: &str) -> Vec<EmphasisSpan> {
    ExactLocator::new(query).locate(text)
}
