//! One-time preparation of a query pattern.

use std::fmt::{Display, Error, Formatter};

use crate::fuzzy_matcher::MAX_PATTERN_SIZE;
use crate::fuzzy_matcher::roles::{RoleClassifier, RuneRole};

/// Highest score a single pattern character can contribute.
const MAX_CHAR_SCORE: usize = 4;

/// Length of the pattern prefix that must align exactly for a match to start
/// in the middle of a candidate word.
const SHORT_PREFIX_LEN: usize = 3;

/// A pattern ready to be scored against many candidates. Never mutated once built.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    bytes: Vec<u8>,
    lower: Vec<u8>,
    case_sensitive: bool,
    roles: Vec<RuneRole>,
    scale: f32,
}

impl CompiledPattern {
    /// Compile `pattern`, truncating it to [`MAX_PATTERN_SIZE`] bytes.
    pub fn new<C: RoleClassifier + ?Sized>(pattern: &[u8], classifier: &C) -> Self {
        let bytes = truncate(pattern).to_vec();
        let lower = bytes.to_ascii_lowercase();
        let case_sensitive = bytes != lower;

        let mut roles = vec![RuneRole::None; bytes.len()];
        classifier.classify(&bytes, &mut roles);

        let scale = if bytes.is_empty() {
            0.0
        } else {
            1.0 / (MAX_CHAR_SCORE * bytes.len()) as f32
        };

        trace!(
            "compiled pattern {:?}: case_sensitive={case_sensitive}, roles={roles:?}",
            String::from_utf8_lossy(&bytes)
        );

        Self {
            bytes,
            lower,
            case_sensitive,
            roles,
            scale,
        }
    }

    /// The (truncated) pattern bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The pattern, ASCII-lowercased
    pub fn lower(&self) -> &[u8] {
        &self.lower
    }

    /// First bytes of the lowercased pattern, at most three
    pub fn short(&self) -> &[u8] {
        &self.lower[..self.lower.len().min(SHORT_PREFIX_LEN)]
    }

    /// Set if the pattern is mix-cased
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Role of each pattern byte
    pub fn roles(&self) -> &[RuneRole] {
        &self.roles
    }

    /// Factor converting a raw alignment score into `[0, 1]`; 0 for an empty pattern.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// An empty pattern matches everything.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether compiling `pattern` would yield this pattern
    pub fn is_compiled_from(&self, pattern: &[u8]) -> bool {
        self.bytes == truncate(pattern)
    }
}

impl Display for CompiledPattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

fn truncate(pattern: &[u8]) -> &[u8] {
    &pattern[..pattern.len().min(MAX_PATTERN_SIZE)]
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::roles::AsciiRoles;

    fn compile(pattern: &str) -> CompiledPattern {
        CompiledPattern::new(pattern.as_bytes(), &AsciiRoles)
    }

    #[test]
    fn lowercase_pattern_is_case_insensitive() {
        let p = compile("foobar");
        assert!(!p.is_case_sensitive());
        assert_eq!(p.lower(), b"foobar");
    }

    #[test]
    fn mixed_case_pattern_is_case_sensitive() {
        let p = compile("fooBar");
        assert!(p.is_case_sensitive());
        assert_eq!(p.bytes(), b"fooBar");
        assert_eq!(p.lower(), b"foobar");
    }

    #[test]
    fn short_prefix() {
        assert_eq!(compile("fooBar").short(), b"foo");
        assert_eq!(compile("Ab").short(), b"ab");
        assert!(compile("").short().is_empty());
    }

    #[test]
    fn scale() {
        assert_eq!(compile("abcd").scale(), 1.0 / 16.0);
        assert_eq!(compile("").scale(), 0.0);
    }

    #[test]
    fn truncates_long_patterns() {
        let long = "a".repeat(100);
        let p = compile(&long);
        assert_eq!(p.len(), MAX_PATTERN_SIZE);
        assert_eq!(p.roles().len(), MAX_PATTERN_SIZE);
        assert!(p.is_compiled_from(long.as_bytes()));
        assert!(p.is_compiled_from(&long.as_bytes()[..MAX_PATTERN_SIZE]));
        assert!(!p.is_compiled_from(b"aaa"));
    }

    #[test]
    fn display() {
        assert_eq!(compile("Foo").to_string(), "Foo");
    }
}
