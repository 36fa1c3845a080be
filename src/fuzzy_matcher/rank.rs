//! Ranking candidate lists against a pattern.
//!
//! # Example:
//! ```
//! use fuzzrank::fuzzy_matcher::rank::{RoleMatcher, best_match, rank};
//!
//! let names = ["abc", "axbxc", "xyz"];
//! assert_eq!(best_match("abc", &names), "abc");
//!
//! let ranked = rank(&RoleMatcher::default(), "fb", &["fooBar", "xyz"]);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].text, "fooBar");
//! assert_eq!(ranked[0].ranges, [0..1, 3..4]);
//! ```

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::fuzzy_matcher::matcher::Matcher;
use crate::fuzzy_matcher::{ByteRange, FuzzyMatcher, ScoreType};

/// Returns the name most similar to the pattern, or the empty string.
///
/// Ties keep the earliest name. A name the pattern does not match at all is
/// also tried the other way around, matching the name against the pattern.
pub fn best_match<'a, S: AsRef<str>>(pattern: &str, names: &'a [S]) -> &'a str {
    let mut matcher = Matcher::new(pattern);
    let mut best = "";
    let mut high_score: ScoreType = 0.0;
    for name in names {
        let name = name.as_ref();
        let score = matcher.score(name);
        if score > high_score {
            high_score = score;
            best = name;
        } else if score == 0.0 {
            // The shorter string may be the one to look for.
            let rev_score = Matcher::new(name).score(pattern);
            if rev_score > high_score {
                high_score = rev_score;
                best = name;
            }
        }
    }
    debug!("best match for {pattern:?}: {best:?} ({high_score})");
    best
}

/// A candidate matched by [`rank`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'a> {
    /// Position of the candidate in the input list
    pub index: usize,
    /// The candidate
    pub text: &'a str,
    /// Similarity to the pattern, in `(0, 1]`
    pub score: ScoreType,
    /// Matched byte ranges of `text`
    pub ranges: Vec<ByteRange>,
}

/// Scores every candidate and returns the matched ones, best first.
/// Candidates with equal scores keep their input order.
pub fn rank<'a, S: AsRef<str>>(matcher: &dyn FuzzyMatcher, pattern: &str, candidates: &'a [S]) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let text = text.as_ref();
            let (score, ranges) = matcher.fuzzy_ranges(text, pattern)?;
            Some(Ranked {
                index,
                text,
                score,
                ranges,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!("ranked {}/{} candidates for {pattern:?}", ranked.len(), candidates.len());
    ranked
}

/// [`FuzzyMatcher`] keeping one [`Matcher`] per thread.
///
/// The per-thread matcher is rebuilt only when the pattern changes, so
/// scoring a list against the same pattern compiles it once per thread.
#[derive(Debug, Default)]
pub struct RoleMatcher {
    cache: ThreadLocal<RefCell<Option<Matcher>>>,
}

impl RoleMatcher {
    /// Creates a matcher with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn with_matcher<R>(&self, pattern: &str, f: impl FnOnce(&mut Matcher) -> R) -> Option<R> {
        let mut slot = self.cache.get_or(|| RefCell::new(None)).borrow_mut();
        if !slot
            .as_ref()
            .is_some_and(|m| m.pattern().is_compiled_from(pattern.as_bytes()))
        {
            trace!("compiling {pattern:?} for thread {:?}", std::thread::current().id());
            *slot = Some(Matcher::new(pattern));
        }
        slot.as_mut().map(f)
    }
}

impl FuzzyMatcher for RoleMatcher {
    fn fuzzy_ranges(&self, choice: &str, pattern: &str) -> Option<(ScoreType, Vec<ByteRange>)> {
        self.with_matcher(pattern, |m| {
            let score = m.score(choice);
            (score > 0.0).then(|| (score, m.matched_ranges()))
        })
        .flatten()
    }

    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.with_matcher(pattern, |m| m.score(choice))
            .filter(|&score| score > 0.0)
    }
}
