//! Harness throughput benchmarks
//!
//! Measures registration and execution cost for registries of increasing
//! size. Test bodies are trivial so the numbers isolate harness overhead:
//! - Registration (descriptor append) throughput
//! - Full run_all throughput, including per-check logging to a discard sink
//! - Single assertion evaluation cost

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use termcolor::NoColor;
use verdict::{check, check_eq, Logger, TestContext, TestRegistry, TestRunner};

/// Logger whose output goes nowhere
fn discard_logger() -> Logger {
    Logger::with_writer(Box::new(NoColor::new(io::sink())))
}

/// Build a registry of `size` single-check tests
fn registry_of(size: usize) -> TestRegistry {
    let mut registry = TestRegistry::new();
    for i in 0..size {
        registry.register("Bench", format!("case_{}", i), |t| {
            check!(t, 1 + 1 == 2);
        });
    }
    registry
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    for size in [100, 500, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            b.iter(|| registry_of(black_box(n)));
        });
    }

    group.finish();
}

fn bench_run_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_all");

    for size in [100, 500, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            let registry = registry_of(n);
            let logger = discard_logger();
            let runner = TestRunner::new(&logger);
            b.iter(|| runner.run_all(black_box(&registry)));
        });
    }

    group.finish();
}

fn bench_single_check(c: &mut Criterion) {
    c.bench_function("check_eq_once", |b| {
        let logger = discard_logger();
        b.iter(|| {
            let mut ctx = TestContext::new(&logger);
            check_eq!(ctx, 4, 2 + 2);
            black_box(ctx.checks_passed())
        });
    });
}

criterion_group!(
    harness_benches,
    bench_registration,
    bench_run_all,
    bench_single_check
);
criterion_main!(harness_benches);
