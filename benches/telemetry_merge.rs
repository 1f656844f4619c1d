//! Benchmarks for telemetry interpolation and merging
//!
//! A fastest-lap trace from the backend is a few hundred to a few thousand
//! samples per channel. These cover:
//! - Merging two traces sampled at offset distances
//! - Merging traces with missing readings
//! - Single-point interpolation over a long trace
//! - Cache hits for an unchanged selection

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use slipstream::Channel;
use slipstream::telemetry::{MergeCache, interpolate, merge};
use slipstream::test_utils::synthetic_trace;
use std::hint::black_box;

const LAP_LENGTH: f64 = 5_793.0;

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for samples in [250usize, 1_000, 4_000] {
        let a = synthetic_trace(samples, LAP_LENGTH, 0.0, 0);
        let b = synthetic_trace(samples, LAP_LENGTH, 1.7, 0);
        group.throughput(Throughput::Elements((samples * 2) as u64));

        group.bench_with_input(BenchmarkId::new("offset_axes", samples), &samples, |bench, _| {
            bench.iter(|| {
                black_box(merge(black_box(&a), black_box(&b), Channel::Speed, "VER", "LEC"))
            })
        });
    }

    let a = synthetic_trace(1_000, LAP_LENGTH, 0.0, 7);
    let b = synthetic_trace(1_000, LAP_LENGTH, 2.3, 11);
    group.bench_function("with_missing_readings", |bench| {
        bench.iter(|| black_box(merge(black_box(&a), black_box(&b), Channel::Throttle, "HAM", "RUS")))
    });

    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let trace = synthetic_trace(4_000, LAP_LENGTH, 0.0, 0);

    let mut group = c.benchmark_group("interpolate");
    group.bench_function("exact_match", |bench| {
        let distance = trace[2_000].distance;
        bench.iter(|| black_box(interpolate(black_box(distance), &trace)))
    });
    group.bench_function("late_bracket", |bench| {
        let distance = trace[3_990].distance + 0.5;
        bench.iter(|| black_box(interpolate(black_box(distance), &trace)))
    });
    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let a = synthetic_trace(1_000, LAP_LENGTH, 0.0, 0);
    let b = synthetic_trace(1_000, LAP_LENGTH, 1.7, 0);
    let mut cache = MergeCache::new();
    cache.get_or_merge(&a, &b, Channel::Speed, "VER", "LEC");

    c.bench_function("merge_cache_hit", |bench| {
        bench.iter(|| black_box(cache.get_or_merge(&a, &b, Channel::Speed, "VER", "LEC")))
    });
}

criterion_group!(benches, bench_merge, bench_interpolate, bench_cache);
criterion_main!(benches);
