//! Matching engines that work on whole strings rather than subsequences.

/// Literal substring location used for emphasis
pub mod exact;
