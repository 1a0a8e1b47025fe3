// ============================================================================
// Series Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal Context - Division and square root at growing precision
// 2. Term Evaluation - Exact integer terms reduced to decimals
// 3. Full Calculation - End-to-end compute() for growing digit counts
// 4. Convergence Tables - Sequential versus parallel workers
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ramanujan_pi::engine::RamanujanTerm;
use ramanujan_pi::numeric::{divide, square_root, working_context};
use ramanujan_pi::prelude::*;
use std::hint::black_box;

// ============================================================================
// Decimal Context Benchmarks
// ============================================================================

fn benchmark_decimal_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_context");
    let two = BigDecimal::from(2u32);
    let divisor = BigDecimal::from(9801u32);

    for precision in [50u32, 500, 2000].iter() {
        let ctx = working_context(*precision, RoundingMode::HalfEven).unwrap();

        group.bench_with_input(BenchmarkId::new("sqrt", precision), &ctx, |b, ctx| {
            b.iter(|| black_box(square_root(ctx, &two)));
        });
        group.bench_with_input(BenchmarkId::new("div", precision), &ctx, |b, ctx| {
            b.iter(|| black_box(divide(ctx, &two, &divisor)));
        });
    }

    group.finish();
}

// ============================================================================
// Term Benchmarks
// ============================================================================

fn benchmark_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("ramanujan_term");
    let ctx = working_context(200, RoundingMode::HalfEven).unwrap();

    for index in [0u32, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::new("exact", index), index, |b, &index| {
            b.iter(|| black_box(RamanujanTerm::new(index)));
        });

        let term = RamanujanTerm::new(*index).unwrap();
        group.bench_with_input(BenchmarkId::new("evaluate", index), &term, |b, term| {
            b.iter(|| black_box(term.evaluate(&ctx)));
        });
    }

    group.finish();
}

// ============================================================================
// Full Calculation Benchmarks
// ============================================================================

fn benchmark_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let calculator = PiSeriesCalculator::new(CalculatorConfig::default()).unwrap();

    // About eight digits per term, so iterations scale with precision.
    for precision in [50i64, 200, 1000].iter() {
        let iterations = precision / 8 + 1;
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &(iterations, *precision),
            |b, &(iterations, precision)| {
                b.iter(|| black_box(calculator.compute(iterations, precision)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Convergence Table Benchmarks
// ============================================================================

fn benchmark_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence");
    group.sample_size(20);
    let calculator = PiSeriesCalculator::default();

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(calculator.convergence(40, 300)));
    });

    for workers in [2usize, 4].iter() {
        group.bench_with_input(BenchmarkId::new("parallel", workers), workers, |b, &workers| {
            b.iter(|| black_box(calculator.convergence_parallel(40, 300, workers)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decimal_context,
    benchmark_terms,
    benchmark_compute,
    benchmark_convergence
);
criterion_main!(benches);
