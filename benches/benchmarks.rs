//! Benchmarks for streamstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamstats::anomaly::{Config, ReturnType, StreamStats};
use streamstats::statistics::RunningMoments;
use streamstats::trend::Trend;

// ============================================================================
// Running Moments Benchmarks
// ============================================================================

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_moments");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut moments = RunningMoments::new();
        let mut i = 0u64;
        b.iter(|| {
            moments.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut moments = RunningMoments::new();
        for i in 0..100_000u64 {
            moments.add(i as f64);
        }
        b.iter(|| {
            black_box(moments.mean());
            black_box(moments.variance());
            black_box(moments.standard_deviation());
        });
    });

    group.finish();
}

// ============================================================================
// Trend Benchmarks
// ============================================================================

fn bench_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend");
    group.throughput(Throughput::Elements(1));

    group.bench_function("update", |b| {
        let mut trend = Trend::new();
        let mut i = 0u64;
        b.iter(|| {
            black_box(trend.update((i % 4000) as f64));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Detector Benchmarks
// ============================================================================

fn bench_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_stats");
    group.throughput(Throughput::Elements(1));

    for return_type in [ReturnType::Boolean, ReturnType::Ratio] {
        group.bench_function(format!("push_{:?}", return_type).to_lowercase(), |b| {
            let config = Config::default().with_return_type(return_type);
            let mut detector = StreamStats::with_config(config).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                black_box(detector.push((i % 4000) as f64));
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("push_meta", |b| {
        let mut detector = StreamStats::new();
        let mut i = 0u64;
        b.iter(|| {
            black_box(detector.push_meta((i % 4000) as f64));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_moments, bench_trend, bench_detector);

criterion_main!(benches);
