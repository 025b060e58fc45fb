//! Criterion benchmarks for the default-merge and the JSON codec.
//!
//! Both run on the UI thread during startup and after every setter, so they
//! should stay well under a millisecond.
//!
//! Run with:
//! ```bash
//! cargo bench --package deskshell-core --bench merge_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deskshell_core::{decode_document, encode_document, fill_absent, ConfigDocument};

// ── Document fixtures ─────────────────────────────────────────────────────────

fn make_empty() -> ConfigDocument {
    ConfigDocument::empty()
}

fn make_theme_only() -> ConfigDocument {
    ConfigDocument {
        theme: Some("dark".to_string()),
        ..ConfigDocument::empty()
    }
}

fn make_complete() -> ConfigDocument {
    ConfigDocument::defaults()
}

// ── Benchmark groups ──────────────────────────────────────────────────────────

/// Benchmarks `fill_absent` for documents with varying numbers of absent fields.
fn bench_merge(c: &mut Criterion) {
    let docs: &[(&str, ConfigDocument)] = &[
        ("empty", make_empty()),
        ("theme_only", make_theme_only()),
        ("complete", make_complete()),
    ];
    let defaults = ConfigDocument::defaults();

    let mut group = c.benchmark_group("fill_absent");
    for (name, doc) in docs {
        group.bench_with_input(BenchmarkId::new("doc", name), doc, |b, doc| {
            b.iter(|| {
                let mut working = doc.clone();
                fill_absent(black_box(&mut working), black_box(&defaults))
            })
        });
    }
    group.finish();
}

/// Benchmarks a full save/load cycle through the codec.
fn bench_codec(c: &mut Criterion) {
    let doc = make_complete();
    let text = encode_document(&doc).expect("encode must succeed");

    let mut group = c.benchmark_group("codec");
    group.bench_function("encode", |b| {
        b.iter(|| encode_document(black_box(&doc)).expect("encode must succeed"))
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode_document(black_box(&text)).expect("decode must succeed"))
    });
    group.finish();
}

criterion_group!(benches, bench_merge, bench_codec);
criterion_main!(benches);
