//! Microbenchmark that isolates the fuzzy matcher DP from all other overhead
//! (I/O, sorting, output).

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use fuzzrank::fuzzy_matcher::FuzzyMatcher;
use fuzzrank::{Matcher, RoleMatcher, best_match};

const WORDS: [&str; 8] = ["fuzzy", "Matcher", "score", "Chunks", "http", "Server", "range", "Table"];
const SEPARATORS: [&str; 4] = [".", "_", "::", ""];

fn identifiers(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut id = String::new();
            for k in 0..(2 + i % 4) {
                if k > 0 {
                    id.push_str(SEPARATORS[(i + k) % SEPARATORS.len()]);
                }
                id.push_str(WORDS[(i * 7 + k * 3) % WORDS.len()]);
            }
            id
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let lines = identifiers(10_000);

    c.bench_function("micro_score", |b| {
        let mut m = Matcher::new("fzMat");
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.score(black_box(line)) > 0.0 {
                    count += 1;
                }
            }
            count
        });
    });

    c.bench_function("micro_score_ranges", |b| {
        let m = RoleMatcher::new();
        b.iter(|| {
            let mut count = 0usize;
            for line in &lines {
                if let Some((_, ranges)) = m.fuzzy_ranges(black_box(line), "srvRange") {
                    count += ranges.len();
                }
            }
            count
        });
    });

    c.bench_function("micro_best_match", |b| {
        let names = &lines[..1_000];
        b.iter(|| best_match(black_box("httpServerTable"), names).len());
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_matcher
);
criterion_main!(benches);
