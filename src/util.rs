//! Small text helpers shared by the library and the `fzr` binary.

use std::io::{self, BufRead};

use crate::fuzzy_matcher::ByteRange;

/// Wrap every matched byte range of `text` in brackets.
///
/// Ranges must be ascending and non-overlapping, as returned by
/// [`Matcher::matched_ranges`](crate::Matcher::matched_ranges); offsets past
/// the end of `text` are clamped.
///
/// # Examples
///
/// ```
/// use fuzzrank::util::wrap_ranges;
///
/// assert_eq!(wrap_ranges("fooBar", &[0..1, 3..4]), "[f]oo[B]ar");
/// ```
pub fn wrap_ranges(text: &str, ranges: &[ByteRange]) -> String {
    let bytes = text.as_bytes();
    let mut res = String::with_capacity(text.len() + 2 * ranges.len());
    let mut prev = 0;
    for range in ranges {
        let start = range.start.min(bytes.len());
        let end = range.end.min(bytes.len());
        if start < prev || start >= end {
            continue;
        }
        res.push_str(&String::from_utf8_lossy(&bytes[prev..start]));
        res.push('[');
        res.push_str(&String::from_utf8_lossy(&bytes[start..end]));
        res.push(']');
        prev = end;
    }
    res.push_str(&String::from_utf8_lossy(&bytes[prev..]));
    res
}

/// Read all lines of `reader`, without their line endings.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wrap_ranges() {
        assert_eq!(wrap_ranges("axbycz", &[0..1, 2..3, 4..5]), "[a]x[b]y[c]z");
        assert_eq!(wrap_ranges("abc", &[0..3]), "[abc]");
        assert_eq!(wrap_ranges("abc", &[]), "abc");
        assert_eq!(wrap_ranges("abc", &[1..2, 0..1]), "a[b]c");
        assert_eq!(wrap_ranges("abc", &[2..10]), "ab[c]");
    }

    #[test]
    fn test_read_lines() {
        let input = "fooBar\nfoo_bar\r\n\nlast";
        let lines = read_lines(io::Cursor::new(input)).unwrap();
        assert_eq!(lines, ["fooBar", "foo_bar", "", "last"]);
    }
}
