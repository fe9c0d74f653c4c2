//! Benchmarks for register expansion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use superbit::{Register, State};

/// Register of `len` cells with every other cell undetermined.
fn alternating(len: usize) -> Register {
    let mut register = Register::new(len).unwrap();
    for i in (1..len).step_by(2) {
        register.set_cell(i, State::One).unwrap();
    }
    register
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");

    for len in [4usize, 8, 16, 24].iter() {
        let register = alternating(*len);
        group.throughput(Throughput::Elements(1 << register.unknown_count()));

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(register.enumerate()));
        });
    }

    group.finish();
}

fn bench_expansions(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansions");

    for len in [4usize, 8, 16, 24].iter() {
        let register = alternating(*len);
        group.throughput(Throughput::Elements(1 << register.unknown_count()));

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| {
                for s in register.expansions() {
                    black_box(s);
                }
            });
        });
    }

    group.finish();
}

fn bench_all_unknown(c: &mut Criterion) {
    let register = Register::new(12).unwrap();

    c.bench_function("enumerate_all_unknown_12", |b| {
        b.iter(|| black_box(register.enumerate()));
    });
}

criterion_group!(benches, bench_enumerate, bench_expansions, bench_all_unknown);
criterion_main!(benches);
