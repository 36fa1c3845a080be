#[allow(dead_code)]
mod common;

use common::random_identifier;
use fuzzrank::prelude::*;

const IDENTIFIERS: [&str; 12] = [
    "NewMatcher",
    "ScoreChunks",
    "MatchedRanges",
    "BestMatch",
    "poorMatch",
    "computeScore",
    "fuzzy.Matcher",
    "fuzzy.Score",
    "strings.HasPrefix",
    "bytes.HasPrefix",
    "RuneRoles",
    "LastSegment",
];

#[test]
fn picks_obvious_completions() {
    assert_eq!(best_match("NewMatcher", &IDENTIFIERS), "NewMatcher");
    assert_eq!(best_match("scorech", &IDENTIFIERS), "ScoreChunks");
    assert_eq!(best_match("lastseg", &IDENTIFIERS), "LastSegment");
}

#[test]
fn reverse_probe_finds_shorter_names() {
    // None of the names contain the pattern, but "BestMatch" is contained in it.
    assert_eq!(best_match("BestMatchFinder", &IDENTIFIERS), "BestMatch");
}

#[test]
fn nothing_similar() {
    assert_eq!(best_match("zzz", &IDENTIFIERS), "");
    assert_eq!(best_match::<&str>("zzz", &[]), "");
}

#[test]
fn empty_pattern_returns_first_name() {
    assert_eq!(best_match("", &IDENTIFIERS), "NewMatcher");
}

#[test]
fn best_match_is_first_of_ranking() {
    let matcher = RoleMatcher::new();
    for _ in 0..50 {
        let names: Vec<String> = (0..8).map(|_| random_identifier(2, 4)).collect();
        let pattern = names[3].chars().step_by(2).collect::<String>();
        let ranked = rank(&matcher, &pattern, &names);
        let best = best_match(&pattern, &names);
        match ranked.first() {
            Some(top) => assert_eq!(best, top.text, "{pattern:?} in {names:?}"),
            // Names are longer than the pattern, the reverse probe cannot match.
            None => assert_eq!(best, ""),
        }
    }
}
