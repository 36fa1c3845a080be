//! fuzzrank is a fuzzy matching library for identifiers.
//!
//! It scores how well a short, user-typed pattern matches candidate strings
//! such as completion items or symbol names, and reports which bytes of the
//! candidate explain the match. Scores are normalized to `[0, 1]`: 0 means no
//! match, 1 a perfect one. fuzzrank can be used as a library or, with the
//! `cli` feature, through the `fzr` command-line tool.
//!
//! # Examples
//!
//! ```
//! use fuzzrank::prelude::*;
//!
//! let mut matcher = Matcher::new("abc");
//! assert_eq!(matcher.score("abc"), 1.0);
//! assert_eq!(matcher.score("xyz"), 0.0);
//!
//! let score = matcher.score("a.b.c");
//! assert!(score > 0.0 && score < 1.0);
//! assert_eq!(matcher.matched_ranges(), [0..1, 2..3, 4..5]);
//!
//! assert_eq!(best_match("abc", &["abc", "axbxc", "xyz"]), "abc");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::fuzzy_matcher::matcher::Matcher;
pub use crate::fuzzy_matcher::rank::{RoleMatcher, best_match, rank};
pub use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};
pub use crate::options::RankOptions;

pub mod fuzzy_matcher;
pub mod options;
pub mod output;
pub mod prelude;
pub mod util;
