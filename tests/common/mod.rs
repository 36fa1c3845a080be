use rand::RngExt as _;
use rand::distr::Alphanumeric;

const SEPARATORS: [&str; 5] = ["", ".", "_", "::", "/"];

/// Random ASCII letters and digits
pub fn random_word(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random words joined by separators, `fooBar.baz_QUX` style
pub fn random_identifier(words: usize, word_len: usize) -> String {
    (0..words)
        .map(|i| format!("{}{}", SEPARATORS[i % SEPARATORS.len()], random_word(word_len)))
        .collect()
}

/// Every `step`-th byte of `candidate`, at most `len` of them
pub fn subsequence_of(candidate: &str, step: usize, len: usize) -> String {
    candidate.chars().step_by(step).take(len).collect()
}

/// Straightforward case-insensitive subsequence test, for cross-checking
pub fn is_subsequence_ignore_case(candidate: &str, pattern: &str) -> bool {
    let mut candidate = candidate.bytes().map(|b| b.to_ascii_lowercase());
    pattern
        .bytes()
        .map(|b| b.to_ascii_lowercase())
        .all(|p| candidate.any(|c| c == p))
}
