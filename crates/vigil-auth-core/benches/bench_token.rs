//! Benchmarks for token minting and request parsing hot paths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vigil_auth_core::{parse_span, random_token};
use vigil_store::hash::digest_token;

fn bench_random_token(c: &mut Criterion) {
    let sizes = [16, 32, 64];

    let mut group = c.benchmark_group("random_token");

    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| random_token(black_box(size)));
        });
    }

    group.finish();
}

fn bench_digest_token(c: &mut Criterion) {
    let token = random_token(32);

    c.bench_function("digest_token", |b| {
        b.iter(|| digest_token(black_box(&token)));
    });
}

fn bench_parse_span(c: &mut Criterion) {
    let inputs = ["2 days", "90 minutes", "5 years"];

    let mut group = c.benchmark_group("parse_span");

    for input in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| parse_span(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_token, bench_digest_token, bench_parse_span);
criterion_main!(benches);
