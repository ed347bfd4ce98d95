//! Criterion benchmarks for the Respell corrector.
//!
//! Covers the two hot paths:
//! - Dictionary construction from corpus text
//! - Candidate generation and correction (edit distance 1 and 2)

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use respell::corrector::Corrector;
use respell::dictionary::FrequencyDictionary;

/// Generate corpus text for benchmarking.
fn generate_corpus(word_count: usize) -> String {
    let words = vec![
        "the", "spelling", "corrector", "dictionary", "frequency", "candidate", "distance",
        "correction", "language", "letter", "word", "corpus", "quick", "brown", "fox", "jumps",
        "over", "lazy", "dog", "common", "errors", "practice", "training", "text", "token",
        "normal", "count", "table", "search", "result", "known", "edit",
    ];

    let mut corpus_words = Vec::with_capacity(word_count);
    for i in 0..word_count {
        // Pseudo-random but repeatable distribution
        let word_idx = (i * 7 + i * i * 13) % words.len();
        corpus_words.push(words[word_idx]);
    }

    corpus_words.join(" ")
}

fn bench_dictionary_construction(c: &mut Criterion) {
    let corpus = generate_corpus(10_000);

    let mut group = c.benchmark_group("dictionary");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("from_corpus_10k_words", |b| {
        b.iter(|| FrequencyDictionary::from_corpus(black_box(&corpus)));
    });
    group.finish();
}

fn bench_edits1(c: &mut Criterion) {
    let dict = FrequencyDictionary::from_corpus(&generate_corpus(1_000));
    let corrector = Corrector::new(&dict);

    let mut group = c.benchmark_group("edits1");
    for word in ["cat", "spelling", "dictionaries"] {
        group.bench_function(format!("len_{}", word.len()), |b| {
            b.iter(|| corrector.edits1(black_box(word)));
        });
    }
    group.finish();
}

fn bench_correct(c: &mut Criterion) {
    let corpus = generate_corpus(10_000);
    let dict = FrequencyDictionary::from_corpus(&corpus);
    let corrector = Corrector::new(&dict);

    let mut group = c.benchmark_group("correct");
    // Exact hit, distance-1 hit, distance-2 hit, and a total miss that
    // forces the full distance-2 sweep
    group.bench_function("known_word", |b| {
        b.iter(|| corrector.correct(black_box("spelling")));
    });
    group.bench_function("distance_1", |b| {
        b.iter(|| corrector.correct(black_box("speling")));
    });
    group.bench_function("distance_2", |b| {
        b.iter(|| corrector.correct(black_box("spelng")));
    });
    group.bench_function("no_match", |b| {
        b.iter(|| corrector.correct(black_box("zzzzzzzz")));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_dictionary_construction,
    bench_edits1,
    bench_correct
);
criterion_main!(benches);
