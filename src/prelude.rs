//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! fuzzrank types and traits with a single `use fuzzrank::prelude::*;` statement.

pub use crate::fuzzy_matcher::matcher::{Matcher, ScoreTable};
pub use crate::fuzzy_matcher::pattern::CompiledPattern;
pub use crate::fuzzy_matcher::rank::{Ranked, RoleMatcher, best_match, rank};
pub use crate::fuzzy_matcher::roles::{AsciiRoles, RoleClassifier, RuneRole};
pub use crate::fuzzy_matcher::{ByteRange, FuzzyMatcher, MAX_INPUT_SIZE, MAX_PATTERN_SIZE, ScoreType};
pub use crate::options::{RankOptions, RankOptionsBuilder};
pub use crate::output::render;
