//! Rendering of ranked candidates as output lines.

use crate::fuzzy_matcher::matcher::Matcher;
use crate::fuzzy_matcher::rank::{RoleMatcher, best_match, rank};
use crate::options::RankOptions;
use crate::util::wrap_ranges;

/// Rank `candidates` according to `options` and return the lines to print.
///
/// With `best`, the result is at most one line: the most similar candidate.
/// Otherwise every matched candidate is listed, best first, optionally
/// prefixed by its score and followed by its alignment table.
pub fn render<S: AsRef<str>>(options: &RankOptions, candidates: &[S]) -> Vec<String> {
    if options.best {
        let best = best_match(&options.query, candidates);
        return if best.is_empty() {
            Vec::new()
        } else {
            vec![best.to_string()]
        };
    }

    let ranked = rank(&RoleMatcher::new(), &options.query, candidates);
    let mut table_matcher = options.table.then(|| Matcher::new(&options.query));

    ranked
        .into_iter()
        .take(options.limit.unwrap_or(usize::MAX))
        .map(|r| {
            let mut line = String::new();
            if options.print_score {
                line.push_str(&format!("{:.3}\t", r.score));
            }
            if options.highlight {
                line.push_str(&wrap_ranges(r.text, &r.ranges));
            } else {
                line.push_str(r.text);
            }
            if let Some(matcher) = table_matcher.as_mut() {
                matcher.score(r.text);
                line.push('\n');
                line.push_str(matcher.score_table().to_string().trim_end());
            }
            line
        })
        .collect()
}
