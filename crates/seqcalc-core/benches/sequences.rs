//! Criterion benchmarks for the sequence generators.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use seqcalc_core::{sequence, SequenceKind};

fn bench_generators(c: &mut Criterion) {
    let lengths: Vec<usize> = vec![10, 100, 1_000];

    for kind in SequenceKind::ALL {
        let mut group = c.benchmark_group(kind.as_str());
        for &length in &lengths {
            group.bench_with_input(
                BenchmarkId::from_parameter(length),
                &length,
                |b, &length| {
                    b.iter(|| sequence(kind, length));
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
