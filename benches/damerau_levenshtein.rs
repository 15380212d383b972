use criterion::{black_box, criterion_group, criterion_main, Criterion};

use editdist::{damerau_levenshtein_bytes, damerau_levenshtein_distance};

fn bench_damerau_levenshtein(c: &mut Criterion) {
    c.bench_function("damerau_levenshtein/short_pair", |b| {
        b.iter(|| damerau_levenshtein_distance(black_box("colour"), black_box("color")))
    });

    let s1 = "the quick brown fox jumps over the lazy dog";
    let s2 = "teh quick brown fox jumped over a lazy dog";
    c.bench_function("damerau_levenshtein/sentence_pair", |b| {
        b.iter(|| damerau_levenshtein_distance(black_box(s1), black_box(s2)))
    });

    c.bench_function("damerau_levenshtein/sentence_pair_bytes", |b| {
        b.iter(|| damerau_levenshtein_bytes(black_box(s1.as_bytes()), black_box(s2.as_bytes())))
    });
}

criterion_group!(benches, bench_damerau_levenshtein);
criterion_main!(benches);
