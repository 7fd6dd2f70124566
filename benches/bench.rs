//! Criterion benchmarks for wordmill.
//!
//! Covers the hot paths of a build:
//! - Normalizing raw tokens
//! - Combining source sets
//! - Screening handles

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use wordmill::analysis::normalizer::{Normalizer, WordSet};
use wordmill::combine::{CombineMode, combine};
use wordmill::moderation::{HandleChecker, parse_protected_words};
use wordmill::wordlist::OutputList;

/// Generate raw tokens for benchmarking.
fn generate_raw_tokens(count: usize) -> Vec<String> {
    let stems = [
        "Search", "don't", "well-known", "engine", "o'clock", "naïve", "index", "rock-n-roll",
        "r2d2", "Query", "phrase", "can't", "boolean", "hello!", "vector", "similarity",
    ];

    (0..count)
        .map(|i| {
            let stem = stems[(i * 7) % stems.len()];
            // Suffix letters keep most tokens distinct.
            let suffix: String = (0..(i % 4))
                .map(|j| (b'a' + ((i / (j + 1)) % 26) as u8) as char)
                .collect();
            format!("{stem}{suffix}")
        })
        .collect()
}

/// Benchmark normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = Normalizer::new();
    let tokens = generate_raw_tokens(10_000);

    group.bench_function("normalize_single_token", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box("Don't"))))
    });

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| black_box(normalizer.normalize_all(black_box(tokens.iter().cloned()))))
    });

    group.finish();
}

/// Benchmark combining and length filtering.
fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");

    let normalizer = Normalizer::new();
    let sets: Vec<WordSet> = (0..3)
        .map(|offset| {
            let tokens = generate_raw_tokens(20_000 + offset * 1_000);
            normalizer.normalize_all(tokens).unwrap().words
        })
        .collect();

    group.bench_function("intersection", |b| {
        b.iter(|| black_box(combine(sets.iter(), CombineMode::Intersection)))
    });
    group.bench_function("union", |b| {
        b.iter(|| black_box(combine(sets.iter(), CombineMode::Union)))
    });
    group.bench_function("length_filter", |b| {
        b.iter_with_setup(
            || combine(sets.iter(), CombineMode::Union),
            |words| black_box(OutputList::from_words(words, 15)),
        )
    });

    group.finish();
}

/// Benchmark handle screening.
fn bench_moderation(c: &mut Criterion) {
    let mut group = c.benchmark_group("moderation");

    let words = parse_protected_words(
        r#"[{"word": "zulu", "position": "exact"},
            {"word": "pony", "position": "any"},
            {"word": "bad", "position": "beginswith", "exceptions": ["badge"]}]"#,
    )
    .unwrap();
    let checker = HandleChecker::new(words).unwrap();
    let handles: Vec<String> = generate_raw_tokens(1_000)
        .into_iter()
        .map(|token| token.to_lowercase())
        .collect();

    group.throughput(Throughput::Elements(handles.len() as u64));
    group.bench_function("check_handles", |b| {
        b.iter(|| black_box(checker.check_all(handles.iter().cloned())))
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_combine, bench_moderation);
criterion_main!(benches);
