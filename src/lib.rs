//! Gototab is the ranking and selection core of a fuzzy tab switcher.
//!
//! It ranks tabs and commands against a typed query, marks the parts of each
//! string that justify the match, and keeps a single highlighted cursor that
//! moves across several independently ordered lists as if they were one.
//! Rendering and input capture are left to the caller, who listens to the
//! [`event::EventBus`].
//!
//! # Examples
//!
//! ```
//! use gototab::prelude::*;
//!
//! let tabs = vec![
//!     TabItem::new("Hello world!", "https://example.com/hello", None, ItemAction::noop()),
//!     TabItem::new("Travis", "https://travis-ci.org", None, ItemAction::noop()),
//!     TabItem::new("Appveyor", "https://ci.appveyor.com", None, ItemAction::noop()),
//! ];
//!
//! let displayed = filter_tab_items(&tabs, "avi");
//! assert_eq!(displayed.len(), 1);
//! assert_eq!(displayed[0].title.text(), "Travis");
//! assert_eq!(displayed[0].title.spans(), &[EmphasisSpan::new(2, 5)]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Display;

pub use crate::controller::Controller;
pub use crate::cursor::{CursorPosition, MultiListCursor};
pub use crate::event::{EventBus, Notification, Topic};
pub use crate::fuzzy_matcher::greedy::EMPTY_QUERY_SCORE;
pub use crate::options::GototabOptions;
pub use crate::search::filter;

pub mod commands;
pub mod controller;
pub mod cursor;
pub mod engine;
pub mod event;
pub mod fuzzy_matcher;
pub mod item;
pub mod options;
pub mod prelude;
pub mod render;
pub mod search;

/// Score of a fuzzy match, higher is better
pub type Score = i64;

//------------------------------------------------------------------------------
// Emphasis

/// Half-open `[start, end)` range of character indices to emphasize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmphasisSpan {
    /// First emphasized char index
    pub start: usize,
    /// One past the last emphasized char index
    pub end: usize,
}

impl EmphasisSpan {
    /// Creates a span, `start` must not exceed `end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Number of chars covered, zero for a reversed span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A string together with the spans to emphasize when rendering it.
///
/// Spans are sorted, non-overlapping and lie within the string's char count.
/// No spans means no emphasis, which is what an empty query produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributedString {
    text: String,
    spans: Vec<EmphasisSpan>,
}

impl AttributedString {
    /// Wraps `text` with the given spans
    pub fn new(text: impl Into<String>, spans: Vec<EmphasisSpan>) -> Self {
        let text = text.into();
        debug_assert!(
            spans.windows(2).all(|pair| pair[0].end <= pair[1].start),
            "overlapping or unsorted spans {spans:?}"
        );
        debug_assert!(
            spans.last().is_none_or(|span| span.end <= text.chars().count()),
            "span out of bounds in {text:?}: {spans:?}"
        );
        Self { text, spans }
    }

    /// Text without any emphasis
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// The original string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The emphasis spans, in order
    pub fn spans(&self) -> &[EmphasisSpan] {
        &self.spans
    }

    /// Whether at least one non-empty span exists
    pub fn is_emphasized(&self) -> bool {
        self.spans.iter().any(|span| !span.is_empty())
    }

    /// Splits the text into consecutive `(piece, emphasized)` segments covering
    /// the whole string. Empty pieces are skipped.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut offsets: Vec<usize> = self.text.char_indices().map(|(byte, _)| byte).collect();
        offsets.push(self.text.len());
        let char_count = offsets.len() - 1;
        let byte_at = |char_idx: usize| offsets[char_idx.min(char_count)];

        let mut res = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut prev = 0;
        for span in &self.spans {
            if span.start > prev {
                res.push((&self.text[byte_at(prev)..byte_at(span.start)], false));
            }
            if !span.is_empty() {
                res.push((&self.text[byte_at(span.start)..byte_at(span.end)], true));
            }
            prev = span.end;
        }
        if prev < char_count {
            res.push((&self.text[byte_at(prev)..], false));
        }
        res
    }
}

impl Display for AttributedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
