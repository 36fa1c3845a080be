//! Fuzzy matching of identifiers against short, user-typed patterns.
//!
//! The matcher aligns a pattern as a case-insensitive subsequence of a
//! candidate, scoring the alignment with word-role heuristics (segment
//! starts, camelCase heads, consecutive runs) and normalizing the result to
//! `[0, 1]`.

use std::ops::Range;

/// Default role classification of candidate and pattern bytes
pub mod roles;
/// Pattern compilation
pub mod pattern;
/// Alignment engine and range extraction
pub mod matcher;
/// Ranking of candidate lists
pub mod rank;

/// Maximum size of a candidate scored against a matcher, in bytes.
/// Longer candidates are truncated to this size.
pub const MAX_INPUT_SIZE: usize = 127;

/// Maximum size of a pattern, in bytes. Longer patterns are truncated to this size.
pub const MAX_PATTERN_SIZE: usize = 63;

/// Normalized similarity score, in `[0, 1]`.
pub type ScoreType = f32;

/// Half-open `[begin, end)` byte offsets into a candidate.
pub type ByteRange = Range<usize>;

/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched byte ranges of the choice.
    ///
    /// Returns `None` when the choice does not match (score 0).
    fn fuzzy_ranges(&self, choice: &str, pattern: &str) -> Option<(ScoreType, Vec<ByteRange>)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.fuzzy_ranges(choice, pattern).map(|(score, _)| score)
    }
}
