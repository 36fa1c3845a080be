//! Structural roles of the bytes of an identifier.
//!
//! Every byte is labelled as the head of a word, the continuation of a word,
//! the continuation of a run of capitals, a segment separator, or nothing in
//! particular. Both patterns and candidates are classified the same way.
//!
//! # Example:
//! ```
//! use fuzzrank::fuzzy_matcher::roles::{RuneRole, rune_roles};
//!
//! let roles = rune_roles(b"fooBar");
//! assert_eq!(roles[0], RuneRole::Head);
//! assert_eq!(roles[3], RuneRole::Head);
//! assert_eq!(roles[4], RuneRole::Tail);
//! ```

use std::ops::Range;

/// Role of a single byte within an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuneRole {
    /// Not part of a word, nor a separator (`_`, `-`, spaces, `/`...)
    #[default]
    None,
    /// Segment separator (`.` and `:`)
    Sep,
    /// Continuation of a word
    Tail,
    /// Continuation of a run of capitals (`B` and `C` in `ABC`)
    UcTail,
    /// First byte of a word
    Head,
}

/// Assigns a [`RuneRole`] to every byte of an input.
///
/// Implementations must be pure and length-preserving: `roles` has exactly
/// the length of `input` and every slot is overwritten.
pub trait RoleClassifier {
    /// Classify `input`, writing one role per byte into `roles`.
    fn classify(&self, input: &[u8], roles: &mut [RuneRole]);
}

impl<F> RoleClassifier for F
where
    F: Fn(&[u8], &mut [RuneRole]),
{
    fn classify(&self, input: &[u8], roles: &mut [RuneRole]) {
        self(input, roles)
    }
}

/// Default classifier: ASCII letters and digits form words, `.` and `:`
/// separate segments, every non-ASCII byte behaves like a lowercase letter.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiRoles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    None,
    Punct,
    Lower,
    Upper,
}

#[inline]
fn char_kind(b: u8) -> CharKind {
    match b {
        b'.' | b'/' | b':' => CharKind::Punct,
        b'0'..=b'9' | b'a'..=b'z' | 0x80..=0xff => CharKind::Lower,
        b'A'..=b'Z' => CharKind::Upper,
        _ => CharKind::None,
    }
}

impl RoleClassifier for AsciiRoles {
    fn classify(&self, input: &[u8], roles: &mut [RuneRole]) {
        debug_assert_eq!(input.len(), roles.len());

        let (mut prev, mut prev2) = (CharKind::None, CharKind::None);
        for (i, &b) in input.iter().enumerate() {
            let kind = char_kind(b);
            let role = match kind {
                CharKind::Lower if matches!(prev, CharKind::None | CharKind::Punct) => RuneRole::Head,
                CharKind::Lower => RuneRole::Tail,
                // Last of a run of capitals: `aBC`, `BC`
                CharKind::Upper if prev == CharKind::Upper && i + 1 == input.len() => RuneRole::UcTail,
                CharKind::Upper => RuneRole::Head,
                CharKind::Punct if b == b'.' || b == b':' => RuneRole::Sep,
                CharKind::Punct | CharKind::None => RuneRole::None,
            };

            // Two capitals followed by something that is not lowercase: the
            // previous capital cannot start a word (`ABC`, `ZABC`, `AB.`).
            if kind != CharKind::Lower
                && i > 1
                && roles[i - 1] == RuneRole::Head
                && prev2 == CharKind::Upper
                && matches!(roles[i - 2], RuneRole::Head | RuneRole::UcTail)
            {
                roles[i - 1] = RuneRole::UcTail;
            }

            roles[i] = role;
            prev2 = prev;
            prev = kind;
        }
    }
}

/// Classify `input` with [`AsciiRoles`].
pub fn rune_roles(input: &[u8]) -> Vec<RuneRole> {
    let mut roles = vec![RuneRole::None; input.len()];
    AsciiRoles.classify(input, &mut roles);
    roles
}

/// Returns the last segment of `input`, ignoring trailing separators.
///
/// `roles` must be the classification of `input`.
pub fn last_segment<'a>(input: &'a [u8], roles: &[RuneRole]) -> &'a [u8] {
    let Some(end) = roles.iter().rposition(|&r| r != RuneRole::Sep) else {
        return &[];
    };
    let start = roles[..end]
        .iter()
        .rposition(|&r| r == RuneRole::Sep)
        .map_or(0, |sep| sep + 1);
    &input[start..=end]
}

/// Iterates over the byte spans of the words described by `roles`.
///
/// A [`RuneRole::Head`] starts a new word; separators and role-less bytes end
/// the current word and belong to none.
pub fn words(roles: &[RuneRole]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut start = 0;
    let mut i = 0;
    std::iter::from_fn(move || {
        while i < roles.len() {
            let idx = i;
            i += 1;
            match roles[idx] {
                RuneRole::Tail | RuneRole::UcTail => {}
                role => {
                    let word = start..idx;
                    start = if role == RuneRole::Head { idx } else { idx + 1 };
                    if !word.is_empty() {
                        return Some(word);
                    }
                }
            }
        }
        if start < roles.len() {
            let word = start..roles.len();
            start = roles.len();
            return Some(word);
        }
        None
    })
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::RuneRole::{Head as H, None as N, Sep as S, Tail as T, UcTail as U};
    use super::*;

    #[test]
    fn camel_case() {
        assert_eq!(rune_roles(b"fooBar"), [H, T, T, H, T, T]);
        assert_eq!(rune_roles(b"FooBar"), [H, T, T, H, T, T]);
    }

    #[test]
    fn capital_runs() {
        assert_eq!(rune_roles(b"ABC"), [H, U, U]);
        assert_eq!(rune_roles(b"HTTPServer"), [H, U, U, U, H, T, T, T, T, T]);
    }

    #[test]
    fn separators() {
        assert_eq!(rune_roles(b"foo.bar"), [H, T, T, S, H, T, T]);
        assert_eq!(rune_roles(b"a::b"), [H, S, S, H]);
        assert_eq!(rune_roles(b"foo_bar"), [H, T, T, N, H, T, T]);
        assert_eq!(rune_roles(b"a/b"), [H, N, H]);
    }

    #[test]
    fn digits_continue_words() {
        assert_eq!(rune_roles(b"x11"), [H, T, T]);
    }

    #[test]
    fn non_ascii_is_lowercase() {
        let input = "é".as_bytes();
        assert_eq!(rune_roles(input), [H, T]);
    }

    #[test]
    fn empty_input() {
        assert!(rune_roles(b"").is_empty());
    }

    #[test]
    fn closure_classifier() {
        let all_heads = |input: &[u8], roles: &mut [RuneRole]| {
            for role in roles.iter_mut().take(input.len()) {
                *role = RuneRole::Head;
            }
        };
        let mut roles = [N; 3];
        all_heads.classify(b"abc", &mut roles);
        assert_eq!(roles, [H, H, H]);
    }

    #[test]
    fn test_last_segment() {
        let last = |s: &str| {
            let roles = rune_roles(s.as_bytes());
            String::from_utf8_lossy(last_segment(s.as_bytes(), &roles)).into_owned()
        };
        assert_eq!(last("foo.bar"), "bar");
        assert_eq!(last("foo.bar.."), "bar");
        assert_eq!(last("foo"), "foo");
        assert_eq!(last("a::b::Cde"), "Cde");
        assert_eq!(last(".."), "");
        assert_eq!(last(""), "");
    }

    #[test]
    fn test_words() {
        let spans = |s: &str| words(&rune_roles(s.as_bytes())).collect::<Vec<_>>();
        assert_eq!(spans("fooBar"), [0..3, 3..6]);
        assert_eq!(spans("foo_bar"), [0..3, 4..7]);
        assert_eq!(spans("HTTPServer"), [0..4, 4..10]);
        assert_eq!(spans("foo.bar."), [0..3, 4..7]);
        assert!(spans("").is_empty());
    }
}
